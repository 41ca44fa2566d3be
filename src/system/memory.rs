/// Memory usage information, in bytes
#[derive(Debug, Clone, Default)]
pub struct MemoryInfo {
    pub total_mem: u64,
    pub used_mem: u64,
    pub total_swap: u64,
    pub used_swap: u64,
}

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

impl MemoryInfo {
    /// Memory usage as percentage
    pub fn mem_percent(&self) -> f32 {
        percent_of(self.used_mem, self.total_mem)
    }

    /// Swap usage as percentage. A host without swap reports 0%.
    pub fn swap_percent(&self) -> f32 {
        percent_of(self.used_swap, self.total_swap)
    }

    pub fn total_mem_gb(&self) -> f64 {
        bytes_to_gb(self.total_mem)
    }
}

fn percent_of(used: u64, total: u64) -> f32 {
    if total == 0 {
        0.0
    } else {
        ((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0) as f32
    }
}

/// Bytes to GiB, the unit the dashboard labels "GB"
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIB
}
