use ratatui::layout::Rect;

use crate::system::snapshot::clamp_percent;
use crate::ui::layout::{Row, Segment, Tone};
use crate::ui::severity::SeverityBand;

/// Width of everything on a core line except the core index:
/// " [" + "]" + "100.0%"
const CORE_LINE_FIXED: usize = 2 + 1 + 6;

/// One core's line in the CPU panel:
///
///   3 [||||||||||||||||||||||||                 ] 55.2%
#[derive(Debug, Clone, PartialEq)]
pub struct CoreCell {
    /// 1-based core number
    pub core: usize,
    /// 0 = left column, 1 = right column
    pub column: u8,
    pub x: u16,
    pub y: u16,
    /// Column width the line is clipped to
    pub width: u16,
    pub index_width: usize,
    /// Number of `|` characters
    pub fill: usize,
    /// Bar length in characters (fill + padding)
    pub capacity: usize,
    pub percent: f32,
    pub band: SeverityBand,
}

impl CoreCell {
    pub fn row(&self) -> Row {
        Row::clipped(
            self.x,
            self.y,
            vec![
                Segment::new(format!("{:>w$}", self.core, w = self.index_width), Tone::Label),
                Segment::new(" [", Tone::Label),
                Segment::new("|".repeat(self.fill), Tone::Severity(self.band)),
                Segment::new(" ".repeat(self.capacity - self.fill), Tone::BarEmpty),
                Segment::new("]", Tone::Label),
                Segment::new(format!("{:>5.1}%", self.percent), Tone::Severity(self.band)),
            ],
            self.width,
        )
    }
}

/// Bar length left for the `|` fill once labels are placed. Never zero, so
/// the fill ratio always has a divisor.
pub fn bar_capacity(column_width: u16, index_width: usize) -> usize {
    (column_width as usize)
        .saturating_sub(index_width + CORE_LINE_FIXED)
        .max(1)
}

/// `round(capacity * usage / 100)`, clamped to `[0, capacity]`
pub fn bar_fill(capacity: usize, usage: f32) -> usize {
    let filled = (capacity as f32 * clamp_percent(usage) / 100.0).round() as usize;
    filled.min(capacity)
}

/// How many cores go to the left and right column. A second column is only
/// opened when the cores don't fit in `rows` lines.
pub fn split_columns(cores: usize, rows: usize) -> (usize, usize) {
    if cores > rows && cores > 1 {
        let left = cores.div_ceil(2);
        (left, cores - left)
    } else {
        (cores, 0)
    }
}

/// Lay out one line per core inside `area`. Returns the cells that fit and
/// the number of rows they occupy.
pub fn core_cells(cores: &[f32], area: Rect) -> (Vec<CoreCell>, u16) {
    if cores.is_empty() || area.height == 0 {
        return (Vec::new(), 0);
    }

    let (left, right) = split_columns(cores.len(), area.height as usize);
    let index_width = cores.len().to_string().len();

    // Two columns: leave a one-cell gap between them
    let columns: [(u16, u16); 2] = if right > 0 {
        let half = area.width / 2;
        [(area.x, half.saturating_sub(1)), (area.x + half, area.width - half)]
    } else {
        [(area.x, area.width), (area.x, 0)]
    };

    let mut cells = Vec::with_capacity(cores.len());
    for (i, &usage) in cores.iter().enumerate() {
        let (column, row) = if i < left { (0u8, i) } else { (1u8, i - left) };
        if row >= area.height as usize {
            continue;
        }
        let (x, width) = columns[column as usize];
        let capacity = bar_capacity(width, index_width);
        let percent = clamp_percent(usage);
        cells.push(CoreCell {
            core: i + 1,
            column,
            x,
            y: area.y + row as u16,
            width,
            index_width,
            fill: bar_fill(capacity, percent),
            capacity,
            percent,
            band: SeverityBand::of(percent),
        });
    }

    let rows_used = left.min(area.height as usize) as u16;
    (cells, rows_used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_rounded_share_of_capacity() {
        assert_eq!(bar_fill(10, 0.0), 0);
        assert_eq!(bar_fill(10, 100.0), 10);
        assert_eq!(bar_fill(10, 44.0), 4);
        assert_eq!(bar_fill(10, 45.0), 5);
        assert_eq!(bar_fill(68, 10.0), 7);
    }

    #[test]
    fn fill_is_clamped_for_out_of_range_usage() {
        assert_eq!(bar_fill(10, -20.0), 0);
        assert_eq!(bar_fill(10, 250.0), 10);
        assert_eq!(bar_fill(10, f32::NAN), 0);
    }

    #[test]
    fn fill_is_monotonic_in_usage() {
        for capacity in [1usize, 7, 40, 68] {
            let mut prev = 0;
            for step in 0..=1000 {
                let fill = bar_fill(capacity, step as f32 / 10.0);
                assert!(fill >= prev);
                assert!(fill <= capacity);
                prev = fill;
            }
        }
    }

    #[test]
    fn capacity_never_drops_below_one() {
        assert_eq!(bar_capacity(78, 1), 68);
        assert_eq!(bar_capacity(10, 1), 1);
        assert_eq!(bar_capacity(0, 2), 1);
    }

    #[test]
    fn column_split() {
        assert_eq!(split_columns(1, 1), (1, 0));
        assert_eq!(split_columns(1, 0), (1, 0));
        assert_eq!(split_columns(4, 15), (4, 0));
        assert_eq!(split_columns(4, 3), (2, 2));
        assert_eq!(split_columns(5, 3), (3, 2));
        assert_eq!(split_columns(16, 8), (8, 8));
    }

    #[test]
    fn single_column_cells() {
        let (cells, used) = core_cells(&[10.0, 50.0, 80.0, 95.0], Rect::new(1, 1, 78, 15));
        assert_eq!(used, 4);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].capacity, 68);
        assert_eq!(cells[0].fill, 7);
        assert_eq!(cells[0].band, SeverityBand::Low);
        assert_eq!(cells[1].band, SeverityBand::Normal);
        assert_eq!(cells[2].band, SeverityBand::High);
        assert_eq!(cells[3].band, SeverityBand::High);

        let text = cells[2].row().text();
        assert!(text.starts_with("3 [|||"));
        assert!(text.ends_with("] 80.0%"));
        assert_eq!(text.chars().count(), 78);
    }

    #[test]
    fn two_columns_fill_left_first() {
        let (cells, used) = core_cells(&[1.0, 2.0, 3.0, 4.0, 5.0], Rect::new(1, 1, 60, 3));
        assert_eq!(used, 3);
        let columns: Vec<(usize, u8, u16)> = cells.iter().map(|c| (c.core, c.column, c.y)).collect();
        assert_eq!(
            columns,
            vec![(1, 0, 1), (2, 0, 2), (3, 0, 3), (4, 1, 1), (5, 1, 2)]
        );
        assert_eq!(cells[3].x, 31);
        assert!(cells.iter().all(|c| c.row().width() <= c.width));
    }

    #[test]
    fn rows_beyond_the_panel_are_dropped() {
        let cores = vec![50.0; 9];
        let (cells, used) = core_cells(&cores, Rect::new(1, 1, 40, 2));
        assert_eq!(used, 2);
        let numbers: Vec<usize> = cells.iter().map(|c| c.core).collect();
        assert_eq!(numbers, vec![1, 2, 6, 7]);
    }

    #[test]
    fn wide_index_for_many_cores() {
        let cores = vec![0.0; 12];
        let (cells, _) = core_cells(&cores, Rect::new(1, 1, 40, 20));
        assert_eq!(cells[0].row().text().get(..4), Some(" 1 ["));
        assert_eq!(cells[11].row().text().get(..4), Some("12 ["));
    }
}
