use ratatui::layout::Rect;

use crate::system::snapshot::clamp_percent;
use crate::ui::layout::{Row, Segment, Tone, View};
use crate::ui::severity::SeverityBand;

/// Status line, three usage lines, three info lines
pub const SUMMARY_ROWS: u16 = 7;

/// Rows below the CPU panel:
///
///   Metrics unavailable: ...      (only after a failed tick)
///   CPU Usage: 42.0%
///   Memory Usage: 63.1%
///   Swap Usage: 0.0%
///   Total Memory: 15.54 GB
///   Free Disk: 120.33 GB
///   Uptime: 1 day 01:01:01  Updated: 14:03:22
pub fn summary_rows(view: View<'_>, area: Rect) -> Vec<Row> {
    let snap = view.snapshot;

    let status = view.failure.map(|reason| {
        vec![
            Segment::new("Metrics unavailable: ", Tone::Severity(SeverityBand::High)),
            Segment::new(reason, Tone::Severity(SeverityBand::High)),
        ]
    });

    let mut uptime = vec![
        Segment::new("Uptime: ", Tone::Label),
        Segment::new(format_uptime(snap.uptime_secs), Tone::Value),
    ];
    if let Some(taken_at) = snap.taken_at {
        uptime.push(Segment::new("  Updated: ", Tone::Label));
        uptime.push(Segment::new(taken_at.format("%H:%M:%S").to_string(), Tone::Value));
    }

    let lines = [
        status,
        Some(usage_line("CPU Usage: ", snap.aggregate_cpu_usage)),
        Some(usage_line("Memory Usage: ", snap.used_memory_percent)),
        Some(usage_line("Swap Usage: ", snap.used_swap_percent)),
        Some(info_line("Total Memory: ", format!("{:.2} GB", snap.total_memory_gb))),
        Some(info_line("Free Disk: ", format!("{:.2} GB", snap.free_disk_gb))),
        Some(uptime),
    ];

    lines
        .into_iter()
        .enumerate()
        .take(area.height as usize)
        .filter_map(|(i, line)| line.map(|segments| Row::clipped(area.x, area.y + i as u16, segments, area.width)))
        .collect()
}

fn usage_line(label: &str, percent: f32) -> Vec<Segment> {
    let percent = clamp_percent(percent);
    vec![
        Segment::new(label, Tone::Label),
        Segment::new(format!("{:.1}%", percent), Tone::Severity(SeverityBand::of(percent))),
    ]
}

fn info_line(label: &str, value: String) -> Vec<Segment> {
    vec![Segment::new(label, Tone::Label), Segment::new(value, Tone::Value)]
}

/// Format uptime as "D day(s) HH:MM:SS", dropping the day part when zero
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    match days {
        0 => format!("{:02}:{:02}:{:02}", hours, minutes, secs),
        1 => format!("1 day {:02}:{:02}:{:02}", hours, minutes, secs),
        _ => format!("{} days {:02}:{:02}:{:02}", days, hours, minutes, secs),
    }
}
