use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use sysinfo::{Disk, Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::system::memory::{bytes_to_gb, MemoryInfo};
use crate::system::snapshot::{clamp_percent, MetricsProvider, MetricsSnapshot};

/// Metrics provider backed by the `sysinfo` crate
pub struct SysinfoProvider {
    sys: System,
    disks: Disks,
    /// Mount point whose free space is reported
    disk_mount: PathBuf,
}

impl SysinfoProvider {
    /// Build the provider and prime the CPU counters. Blocks for about
    /// `MINIMUM_CPU_UPDATE_INTERVAL`, so call it from the sampler thread.
    pub fn new(disk_mount: impl Into<PathBuf>) -> Self {
        let mut sys = System::new();
        // Only refresh what we need initially
        sys.refresh_cpu_all();
        sys.refresh_memory();

        // Need an initial CPU measurement for deltas
        std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_all();

        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            disk_mount: disk_mount.into(),
        }
    }

    fn collect_memory(&self) -> MemoryInfo {
        MemoryInfo {
            total_mem: self.sys.total_memory(),
            used_mem: self.sys.used_memory(),
            total_swap: self.sys.total_swap(),
            used_swap: self.sys.used_swap(),
        }
    }

    fn free_disk_bytes(&self) -> u64 {
        let disks = self.disks.list();
        pick_disk(disks, &self.disk_mount)
            .map(Disk::available_space)
            .unwrap_or(0)
    }
}

impl MetricsProvider for SysinfoProvider {
    fn sample(&mut self) -> Result<MetricsSnapshot> {
        // Refresh only what we need - much faster than refresh_all()
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();
        self.disks.refresh(true);

        let per_core_usage: Vec<f32> = self
            .sys
            .cpus()
            .iter()
            .map(|cpu| clamp_percent(cpu.cpu_usage()))
            .collect();
        let mem = self.collect_memory();

        Ok(MetricsSnapshot {
            aggregate_cpu_usage: clamp_percent(self.sys.global_cpu_usage()),
            per_core_usage,
            used_memory_percent: mem.mem_percent(),
            used_swap_percent: mem.swap_percent(),
            total_memory_gb: mem.total_mem_gb(),
            free_disk_gb: bytes_to_gb(self.free_disk_bytes()),
            uptime_secs: System::uptime(),
            taken_at: Some(Local::now()),
        })
    }
}

/// Disk mounted exactly at `mount`, else the first listed disk
fn pick_disk<'a>(disks: &'a [Disk], mount: &Path) -> Option<&'a Disk> {
    disks
        .iter()
        .find(|d| d.mount_point() == mount)
        .or_else(|| {
            tracing::debug!(mount = %mount.display(), "mount point not found, using first disk");
            disks.first()
        })
}
