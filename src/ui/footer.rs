use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::{clip, Row, Segment, Tone};

pub const TITLE: &str = " System Monitor ";
pub const FOOTER_HINT: &str = "Press Q to exit";

/// Title centered on the top border, quit hint right-aligned on the bottom
/// border. Both are clipped to the width between the corners.
pub fn border_rows(area: Rect, inner: Rect) -> Vec<Row> {
    let mut rows = Vec::with_capacity(2);
    if area.width == 0 || area.height == 0 {
        return rows;
    }
    let bordered = area.width >= 2 && area.height >= 2;
    let (left, span) = if bordered { (area.x + 1, inner.width) } else { (area.x, area.width) };

    let title = clip(TITLE, span as usize);
    let title_x = left + (span - title.width() as u16) / 2;
    rows.push(Row::clipped(title_x, area.y, vec![Segment::new(title, Tone::Title)], span));

    if bordered {
        let hint = clip(FOOTER_HINT, span as usize);
        let hint_x = left + span - hint.width() as u16;
        rows.push(Row::clipped(
            hint_x,
            area.y + area.height - 1,
            vec![Segment::new(hint, Tone::Title)],
            span,
        ));
    }
    rows
}
