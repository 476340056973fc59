//! Live host resource snapshots for the system-metrics endpoints.
//!
//! # Responsibilities
//! - Sample CPU usage over a short window (two /proc/stat reads)
//! - Read memory and root-disk totals at request time
//! - Render the JSON and plain-text exposition shapes
//!
//! # Design Decisions
//! - Nothing is cached: every request pays the sampling window, which is
//!   an async sleep, so the runtime keeps serving other requests
//! - GB conversions and CPU/disk percentages are rounded to 2 decimals;
//!   memory percent gets 1 decimal. The asymmetry is inherited from the
//!   original service and kept on purpose

pub mod probe;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;

use probe::{CpuTimes, DiskInfo, MemInfo};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One point-in-time reading of host resources.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub timestamp: DateTime<Utc>,
    pub cpu_percent: f64,
    pub cpu_count: usize,
    pub memory: MemInfo,
    pub disk: DiskInfo,
}

impl SystemSnapshot {
    /// Sample the host. Suspends for `sample` between the two CPU reads.
    pub async fn capture(sample: Duration) -> Self {
        let before = probe::read_cpu_times();
        tokio::time::sleep(sample).await;
        let after = probe::read_cpu_times();

        Self {
            timestamp: Utc::now(),
            cpu_percent: cpu_percent_between(before, after),
            cpu_count: probe::read_cpu_count(),
            memory: probe::read_meminfo(),
            disk: probe::read_disk(),
        }
    }

    /// JSON body for `GET /system-metrics`.
    pub fn to_json(&self, contacts_count: usize) -> serde_json::Value {
        json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "cpu": {
                "usage_percent": self.cpu_percent,
                "count": self.cpu_count,
            },
            "memory": {
                "total_gb": to_gb(self.memory.total_bytes),
                "available_gb": to_gb(self.memory.available_bytes),
                "used_gb": to_gb(self.memory.used_bytes()),
                "usage_percent": self.memory_percent(),
            },
            "disk": {
                "total_gb": to_gb(self.disk.total_bytes),
                "used_gb": to_gb(self.disk.used_bytes),
                "free_gb": to_gb(self.disk.free_bytes),
                "usage_percent": self.disk_percent(),
            },
            "contacts_count": contacts_count,
        })
    }

    /// Plain-text exposition lines for `GET /system-metrics-prometheus`:
    /// one `metric_name value` per line, raw byte values, trailing newline.
    pub fn to_exposition(&self, contacts_count: usize) -> String {
        let lines = [
            format!("system_cpu_usage_percent {}", self.cpu_percent),
            format!("system_cpu_count {}", self.cpu_count),
            format!("system_memory_total_bytes {}", self.memory.total_bytes),
            format!(
                "system_memory_available_bytes {}",
                self.memory.available_bytes
            ),
            format!("system_memory_used_bytes {}", self.memory.used_bytes()),
            format!("system_memory_usage_percent {}", self.memory_percent()),
            format!("system_disk_total_bytes {}", self.disk.total_bytes),
            format!("system_disk_used_bytes {}", self.disk.used_bytes),
            format!("system_disk_free_bytes {}", self.disk.free_bytes),
            format!("system_disk_usage_percent {}", self.disk_percent()),
            format!("agenda_contacts_total {}", contacts_count),
        ];
        lines.join("\n") + "\n"
    }

    fn memory_percent(&self) -> f64 {
        if self.memory.total_bytes == 0 {
            return 0.0;
        }
        round1(self.memory.used_bytes() as f64 / self.memory.total_bytes as f64 * 100.0)
    }

    fn disk_percent(&self) -> f64 {
        if self.disk.total_bytes == 0 {
            return 0.0;
        }
        round2(self.disk.used_bytes as f64 / self.disk.total_bytes as f64 * 100.0)
    }
}

/// Busy share of the jiffy delta between two readings.
fn cpu_percent_between(before: Option<CpuTimes>, after: Option<CpuTimes>) -> f64 {
    let (Some(before), Some(after)) = (before, after) else {
        return 0.0;
    };
    let total_delta = after.total().saturating_sub(before.total());
    if total_delta == 0 {
        return 0.0;
    }
    let busy_delta = after.busy.saturating_sub(before.busy);
    round2(busy_delta as f64 / total_delta as f64 * 100.0)
}

fn to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GB)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
