use anyhow::Result;
use chrono::{DateTime, Local};

/// One atomically-captured set of host metrics.
///
/// Built once per sampler tick and shared read-only (`Arc`) afterwards.
/// `MetricsSnapshot::default()` is the "no data yet" value: no cores, every
/// figure zero and no capture time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    /// Per-core usage in percent, ordered by core index
    pub per_core_usage: Vec<f32>,
    pub aggregate_cpu_usage: f32,
    pub used_memory_percent: f32,
    pub used_swap_percent: f32,
    pub total_memory_gb: f64,
    pub free_disk_gb: f64,
    pub uptime_secs: u64,
    pub taken_at: Option<DateTime<Local>>,
}

impl MetricsSnapshot {
    /// True until the first real sample replaces the default value
    pub fn is_empty(&self) -> bool {
        self.taken_at.is_none() && self.per_core_usage.is_empty()
    }
}

/// Source of metrics snapshots. May block (CPU usage is interval-based),
/// so it is only ever called from the sampler thread.
pub trait MetricsProvider {
    fn sample(&mut self) -> Result<MetricsSnapshot>;
}

/// Clamp a percentage into [0, 100]. NaN maps to 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
