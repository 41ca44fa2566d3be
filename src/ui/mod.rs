pub mod footer;
pub mod header;
pub mod layout;
pub mod severity;
pub mod summary;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::color_scheme::ColorScheme;
use layout::{Dashboard, Tone};

fn tone_style(tone: Tone, cs: &ColorScheme) -> Style {
    match tone {
        Tone::Title => Style::default().fg(cs.title_fg).bg(cs.title_bg),
        Tone::Label => Style::default().fg(cs.label).add_modifier(Modifier::BOLD),
        Tone::Value => Style::default().fg(cs.info_value).add_modifier(Modifier::BOLD),
        Tone::BarEmpty => Style::default().fg(cs.bar_bg),
        Tone::Severity(band) => Style::default().fg(cs.severity(band)),
    }
}

/// Apply a computed dashboard to the frame: border first, then every row
pub fn draw(f: &mut Frame, dashboard: &Dashboard, cs: &ColorScheme) {
    let screen = f.area();

    if dashboard.bordered {
        let block = Block::bordered().border_style(Style::default().fg(cs.border));
        f.render_widget(block, dashboard.area.intersection(screen));
    }

    for row in &dashboard.rows {
        let width = row.width();
        if width == 0 {
            continue;
        }
        // Rows are clipped at layout time; intersecting again keeps a stale
        // dashboard from writing outside a terminal that just shrank.
        let area = Rect::new(row.x, row.y, width, 1).intersection(screen);
        if area.is_empty() {
            continue;
        }
        let spans: Vec<Span> = row
            .segments
            .iter()
            .map(|seg| Span::styled(seg.text.as_str(), tone_style(seg.tone, cs)))
            .collect();
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
