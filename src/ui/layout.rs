//! Pure layout step: snapshot + terminal size -> positioned, pre-clipped
//! rows. Nothing here touches a terminal, so every geometry rule can be
//! checked in plain unit tests.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::system::snapshot::MetricsSnapshot;
use crate::ui::footer;
use crate::ui::header::{self, CoreCell};
use crate::ui::severity::SeverityBand;
use crate::ui::summary::{self, SUMMARY_ROWS};

/// Semantic style of a piece of text; mapped to colors at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Label,
    Value,
    BarEmpty,
    Severity(SeverityBand),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }
}

/// One line of text at an absolute position, never wider than the space
/// it was laid out in
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub x: u16,
    pub y: u16,
    pub segments: Vec<Segment>,
}

impl Row {
    /// Build a row, truncating `segments` to `max_width` display columns
    pub fn clipped(x: u16, y: u16, segments: Vec<Segment>, max_width: u16) -> Self {
        let mut budget = max_width as usize;
        let mut kept = Vec::with_capacity(segments.len());
        for seg in segments {
            if budget == 0 {
                break;
            }
            let text = clip(&seg.text, budget);
            budget -= text.width();
            if !text.is_empty() {
                kept.push(Segment { text, tone: seg.tone });
            }
        }
        Self { x, y, segments: kept }
    }

    pub fn width(&self) -> u16 {
        self.segments.iter().map(|s| s.text.width()).sum::<usize>() as u16
    }
}

/// Truncate `s` to at most `max` display columns
pub fn clip(s: &str, max: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// What the renderer is asked to show
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub snapshot: &'a MetricsSnapshot,
    /// Reason the latest sample is missing, if the last tick failed
    pub failure: Option<&'a str>,
}

/// The full screen, ready to be applied to a terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub area: Rect,
    /// False when the terminal is too small to hold a border
    pub bordered: bool,
    pub cores: Vec<CoreCell>,
    pub rows: Vec<Row>,
}

#[cfg(test)]
impl Row {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
impl Dashboard {
    /// Find the first row containing `needle`
    pub fn row_containing(&self, needle: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.text().contains(needle))
    }
}

/// Lay out the whole dashboard for a `width` x `height` terminal
pub fn compute(view: View<'_>, width: u16, height: u16) -> Dashboard {
    let area = Rect::new(0, 0, width, height);
    let bordered = width >= 2 && height >= 2;
    let inner = if bordered {
        Rect::new(1, 1, width - 2, height - 2)
    } else {
        Rect::new(0, 0, width, 0)
    };

    let mut rows = footer::border_rows(area, inner);

    // The CPU panel gets whatever the summary block leaves, at least a row
    let cpu_area = Rect {
        height: inner.height.saturating_sub(SUMMARY_ROWS).max(1).min(inner.height),
        ..inner
    };

    let (cores, cpu_rows_used) = if view.snapshot.per_core_usage.is_empty() {
        let placeholder = if view.snapshot.is_empty() { "Collecting metrics..." } else { "No CPU data" };
        if cpu_area.height > 0 {
            rows.push(Row::clipped(
                cpu_area.x,
                cpu_area.y,
                vec![Segment::new(placeholder, Tone::Label)],
                cpu_area.width,
            ));
        }
        (Vec::new(), cpu_area.height.min(1))
    } else {
        header::core_cells(&view.snapshot.per_core_usage, cpu_area)
    };
    rows.extend(cores.iter().map(CoreCell::row));

    let summary_area = Rect {
        y: inner.y + cpu_rows_used,
        height: inner.height.saturating_sub(cpu_rows_used),
        ..inner
    };
    rows.extend(summary::summary_rows(view, summary_area));

    Dashboard { area, bordered, cores, rows }
}
