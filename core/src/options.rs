use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EraseMode {
    /// TRIM/discard the whole device.
    Trim,
    /// Secure discard. Many cards do not implement it.
    Secure,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    pub label: Option<String>,
    pub erase: Option<EraseMode>,
    /// Use FAT32 on cards whose default would be exFAT.
    pub force_fat32: bool,
    /// Allow logical sectors larger than 512 bytes when FAT32 clusters would exceed 64 KiB.
    pub big_clusters: bool,
    /// Capacity override in 512-byte sectors.
    pub capacity_override: Option<u64>,
    /// Compute and report parameters without touching the device.
    pub dry_run: bool,
}

/// Collects non-fatal warnings raised while planning a format.
///
/// Each warning is logged as it is recorded and kept for the final report.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
