/// Disk usage for one mounted partition, as reported by one `df -P` run.
/// Block counts are df's 1024-byte units; `use_pct` is df's rounded percent.
#[derive(Debug, Clone)]
pub struct DiskUsage {
    pub device:   String,
    pub mount:    String,
    pub total_kb: u64,
    pub used_kb:  u64,
    pub avail_kb: u64,
    pub use_pct:  u8,
}

impl DiskUsage {
    pub fn total_bytes(&self) -> u64 {
        self.total_kb * 1024
    }

    pub fn used_bytes(&self) -> u64 {
        self.used_kb * 1024
    }

    pub fn avail_bytes(&self) -> u64 {
        self.avail_kb * 1024
    }
}
