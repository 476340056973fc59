//! Raw host probes: /proc parsing and a `df` shell-out.
//!
//! Linux only; other targets get zeroed readings. Parsing is split from
//! reading so the parsers can be exercised on fixture text.

#[cfg(target_os = "linux")]
use std::fs;
#[cfg(target_os = "linux")]
use std::process::Command;

/// Aggregate CPU jiffies from the `cpu` summary line of /proc/stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTimes {
    pub busy: u64,
    pub idle: u64,
}

impl CpuTimes {
    pub fn total(&self) -> u64 {
        self.busy + self.idle
    }
}

/// Memory readings in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl MemInfo {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.available_bytes)
    }
}

/// Root filesystem readings in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

/// Parse the aggregate `cpu ` line. Idle time includes iowait, everything
/// else counts as busy, mirroring how psutil buckets the columns.
pub fn parse_cpu_times(stat: &str) -> Option<CpuTimes> {
    let line = stat.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .filter_map(|v| v.parse().ok())
        .collect();
    if fields.len() < 4 {
        return None;
    }

    let idle = fields[3] + fields.get(4).copied().unwrap_or(0);
    let busy = fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 3 && *i != 4)
        .map(|(_, v)| v)
        .sum();

    Some(CpuTimes { busy, idle })
}

/// Count logical CPUs from the per-cpu lines of /proc/stat.
pub fn parse_cpu_count(stat: &str) -> usize {
    stat.lines()
        .filter(|l| {
            l.strip_prefix("cpu")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        })
        .count()
}

/// Parse MemTotal/MemAvailable out of /proc/meminfo (values are in kB).
pub fn parse_meminfo(meminfo: &str) -> MemInfo {
    let parse_kb = |prefix: &str| -> u64 {
        meminfo
            .lines()
            .find(|l| l.starts_with(prefix))
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };

    MemInfo {
        total_bytes: parse_kb("MemTotal:") * 1024,
        available_bytes: parse_kb("MemAvailable:") * 1024,
    }
}

/// Parse `df -B1 --output=size,used,avail /` output: a header line then one
/// data line with three byte counts.
pub fn parse_df(output: &str) -> Option<DiskInfo> {
    let line = output.lines().nth(1)?;
    let mut fields = line.split_whitespace().filter_map(|v| v.parse().ok());
    Some(DiskInfo {
        total_bytes: fields.next()?,
        used_bytes: fields.next()?,
        free_bytes: fields.next()?,
    })
}

#[cfg(target_os = "linux")]
pub fn read_cpu_times() -> Option<CpuTimes> {
    parse_cpu_times(&fs::read_to_string("/proc/stat").unwrap_or_default())
}

#[cfg(target_os = "linux")]
pub fn read_cpu_count() -> usize {
    parse_cpu_count(&fs::read_to_string("/proc/stat").unwrap_or_default())
}

#[cfg(target_os = "linux")]
pub fn read_meminfo() -> MemInfo {
    parse_meminfo(&fs::read_to_string("/proc/meminfo").unwrap_or_default())
}

#[cfg(target_os = "linux")]
pub fn read_disk() -> DiskInfo {
    Command::new("df")
        .args(["-B1", "--output=size,used,avail", "/"])
        .output()
        .ok()
        .and_then(|out| parse_df(&String::from_utf8_lossy(&out.stdout)))
        .unwrap_or_default()
}

#[cfg(not(target_os = "linux"))]
pub fn read_cpu_times() -> Option<CpuTimes> {
    None
}

#[cfg(not(target_os = "linux"))]
pub fn read_cpu_count() -> usize {
    0
}

#[cfg(not(target_os = "linux"))]
pub fn read_meminfo() -> MemInfo {
    MemInfo::default()
}

#[cfg(not(target_os = "linux"))]
pub fn read_disk() -> DiskInfo {
    DiskInfo::default()
}
