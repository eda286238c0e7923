// Format pipeline
// capacity -> parameters -> label -> erase -> MBR -> filesystem -> flush -> close

use crate::buffered_writer::BufferedWriter;
use crate::exfat::write_exfat_filesystem;
use crate::fat::write_fat_filesystem;
use crate::fat_common::generate_volume_serial;
use crate::label::Label;
use crate::params::{calculate_format_params, FormatParams};
use crate::partitioner::write_mbr;
use log::{debug, info};
use sdfmt_core::{BlockDevice, Diagnostics, EraseMode, FormatError, FormatOptions};
use serde::Serialize;
use std::fmt;
use std::io;

/// Largest capacity override accepted, in 512-byte sectors (2 TiB).
pub const MAX_CAPACITY_OVERRIDE: u64 = 1 << 32;

/// Outcome of a format (or dry run).
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    /// Capacity used, in 512-byte sectors.
    pub device_sectors: u64,
    pub params: FormatParams,
    pub label: String,
    pub volume_serial: Option<u32>,
    pub disk_signature: Option<u32>,
    pub erased: bool,
    pub dry_run: bool,
    pub bytes_written: u64,
    pub warnings: Vec<String>,
}

impl fmt::Display for FormatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.params)?;
        writeln!(f, "  Device sectors:       {}", self.device_sectors)?;
        if !self.label.is_empty() {
            writeln!(f, "  Volume label:         {}", self.label)?;
        }
        if let Some(serial) = self.volume_serial {
            writeln!(f, "  Volume ID:            {:04X}-{:04X}", serial >> 16, serial & 0xFFFF)?;
        }
        if let Some(signature) = self.disk_signature {
            writeln!(f, "  Disk signature:       0x{:08X}", signature)?;
        }
        if self.dry_run {
            write!(f, "Dry run: nothing was written.")
        } else {
            write!(f, "Successfully formatted the card.")
        }
    }
}

/// Device capacity after applying the override, truncating new images as needed.
fn resolve_capacity<D: BlockDevice + ?Sized>(
    device: &mut D,
    capacity_override: Option<u64>,
    dry_run: bool,
) -> Result<u64, FormatError> {
    let device_sectors = device.sector_count();
    let Some(requested) = capacity_override else {
        return Ok(device_sectors);
    };

    if requested == 0 || requested > MAX_CAPACITY_OVERRIDE {
        return Err(FormatError::InvalidArgument(format!(
            "capacity override of {} sectors is out of range (1..={})",
            requested, MAX_CAPACITY_OVERRIDE
        )));
    }

    if device_sectors == 0 {
        if !dry_run {
            device.truncate(requested).map_err(FormatError::PartitionWriteFailed)?;
            info!("Sized new image to {} sectors", requested);
        }
        return Ok(requested);
    }

    if requested > device_sectors {
        return Err(FormatError::InvalidArgument(format!(
            "capacity override of {} sectors exceeds the device size of {} sectors",
            requested, device_sectors
        )));
    }
    if requested < device_sectors {
        info!("Using {} of {} sectors", requested, device_sectors);
    }
    Ok(requested)
}

fn erase<D: BlockDevice + ?Sized>(device: &mut D, mode: EraseMode, diag: &mut Diagnostics) -> Result<bool, FormatError> {
    info!("Erasing device ({:?})...", mode);
    match device.discard_all(mode == EraseMode::Secure) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::Unsupported => {
            diag.warn(format!("Device can't be erased ({}). Ignoring.", e));
            Ok(false)
        }
        Err(e) => Err(FormatError::EraseFailed(e)),
    }
}

/// Format `device` according to `options`.
///
/// Nothing is written before the parameters and label have been validated.
/// A failure after that point leaves the device partially formatted.
pub fn format_device<D: BlockDevice + ?Sized>(
    device: &mut D,
    options: &FormatOptions,
) -> Result<FormatReport, FormatError> {
    let mut diag = Diagnostics::new();

    let sectors = resolve_capacity(device, options.capacity_override, options.dry_run)?;
    debug!("Device contains {} sectors", sectors);

    let params = calculate_format_params(sectors, options.force_fat32, options.big_clusters, &mut diag)?;
    let label = Label::for_filesystem(params.fs_type, options.label.as_deref(), &mut diag)?;
    info!("Formatting as {}", params.fs_type);
    debug!("{}", params);

    let mut report = FormatReport {
        device_sectors: sectors,
        params,
        label: label.text().to_string(),
        volume_serial: None,
        disk_signature: None,
        erased: false,
        dry_run: options.dry_run,
        bytes_written: 0,
        warnings: Vec::new(),
    };

    if options.dry_run {
        report.warnings = diag.into_warnings();
        return Ok(report);
    }

    if let Some(mode) = options.erase {
        report.erased = erase(device, mode, &mut diag)?;
    }

    let params = &report.params;
    let mut writer = BufferedWriter::new(&mut *device);

    info!("Creating new partition table and partition...");
    let disk_signature = write_mbr(&mut writer, params, false).map_err(FormatError::PartitionWriteFailed)?;

    info!("Formatting the partition...");
    let volume_serial = generate_volume_serial();
    match &label {
        Label::Fat(label) => write_fat_filesystem(&mut writer, params, label, volume_serial),
        Label::ExFat(label) => write_exfat_filesystem(&mut writer, params, label, volume_serial),
    }
    .map_err(FormatError::FilesystemWriteFailed)?;

    let bytes_written = writer.finish().map_err(FormatError::FilesystemWriteFailed)?;
    device.close().map_err(FormatError::DeviceCloseFailed)?;

    report.disk_signature = Some(disk_signature);
    report.volume_serial = Some(volume_serial);
    report.bytes_written = bytes_written;
    report.warnings = diag.into_warnings();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FsType;
    use crate::partitioner::Mbr;
    use sdfmt_core::test_utils::MemoryDevice;

    fn options() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn test_format_small_card() {
        let mut dev = MemoryDevice::new_block_device(131072);
        let report = format_device(&mut dev, &options()).unwrap();

        assert_eq!(report.params.fs_type, FsType::Fat16);
        assert_eq!(report.bytes_written, 128 * 512);
        assert!(dev.closed);

        let mbr = Mbr::decode(&dev.sector(0)).unwrap();
        assert_eq!(Some(mbr.disk_signature), report.disk_signature);
        assert_eq!(mbr.partitions[0].partition_type, 0x06);
    }

    #[test]
    fn test_zero_capacity_writes_nothing() {
        let mut dev = MemoryDevice::new(0);
        let err = format_device(&mut dev, &options()).unwrap_err();
        assert!(matches!(err, FormatError::FormatParamsInfeasible(_)));
        assert_eq!(err.exit_code(), 5);
        assert!(!dev.was_written());
        assert!(!dev.closed);
    }

    #[test]
    fn test_capacity_override_sizes_new_image() {
        let mut dev = MemoryDevice::new(0);
        let opts = FormatOptions { capacity_override: Some(131072), ..options() };
        let report = format_device(&mut dev, &opts).unwrap();
        assert_eq!(report.device_sectors, 131072);
        assert_eq!(dev.sectors, 131072);
    }

    #[test]
    fn test_capacity_override_limits() {
        for bad in [0, MAX_CAPACITY_OVERRIDE + 1] {
            let mut dev = MemoryDevice::new(0);
            let opts = FormatOptions { capacity_override: Some(bad), ..options() };
            assert!(matches!(format_device(&mut dev, &opts), Err(FormatError::InvalidArgument(_))));
        }

        // Shrinking is allowed, growing is not
        let mut dev = MemoryDevice::new_block_device(262144);
        let opts = FormatOptions { capacity_override: Some(131072), ..options() };
        assert_eq!(format_device(&mut dev, &opts).unwrap().device_sectors, 131072);

        let mut dev = MemoryDevice::new_block_device(131072);
        let opts = FormatOptions { capacity_override: Some(262144), ..options() };
        assert!(matches!(format_device(&mut dev, &opts), Err(FormatError::InvalidArgument(_))));
        assert!(!dev.was_written());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let mut dev = MemoryDevice::new(0);
        let opts = FormatOptions {
            capacity_override: Some(131072),
            erase: Some(EraseMode::Trim),
            dry_run: true,
            ..options()
        };
        let report = format_device(&mut dev, &opts).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.params.fs_type, FsType::Fat16);
        assert_eq!(report.disk_signature, None);
        assert!(!dev.was_written());
        assert!(dev.discards.is_empty());
        assert_eq!(dev.sectors, 0);
        assert!(report.to_string().contains("Dry run"));
    }

    #[test]
    fn test_invalid_label_writes_nothing() {
        let mut dev = MemoryDevice::new_block_device(131072);
        let opts = FormatOptions { label: Some("déjà vu".to_string()), ..options() };
        let err = format_device(&mut dev, &opts).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(!dev.was_written());
    }

    #[test]
    fn test_erase_runs_before_writes() {
        let mut dev = MemoryDevice::new_block_device(131072);
        let opts = FormatOptions { erase: Some(EraseMode::Secure), ..options() };
        let report = format_device(&mut dev, &opts).unwrap();
        assert!(report.erased);
        assert_eq!(dev.discards, vec![true]);
    }

    #[test]
    fn test_unsupported_erase_is_a_warning() {
        let mut dev = MemoryDevice::new(131072);
        let opts = FormatOptions { erase: Some(EraseMode::Trim), ..options() };
        let report = format_device(&mut dev, &opts).unwrap();
        assert!(!report.erased);
        assert_eq!(report.warnings.len(), 1);
        assert!(dev.was_written());
    }

    #[test]
    fn test_write_failure_surfaces_on_flush() {
        let mut dev = MemoryDevice::new_block_device(131072);
        dev.fail_after_writes = Some(0);
        let err = format_device(&mut dev, &options()).unwrap_err();
        // Everything fits one buffered block, so the failure surfaces on the final flush.
        assert!(matches!(err, FormatError::FilesystemWriteFailed(_)));
        assert!(!dev.closed);
    }

    #[test]
    fn test_report_serializes() {
        let mut dev = MemoryDevice::new_block_device(131072);
        let opts = FormatOptions { label: Some("DATA".to_string()), ..options() };
        let report = format_device(&mut dev, &opts).unwrap();
        let text = report.to_string();
        assert!(text.contains("Volume label:         DATA"));
        assert!(text.contains("Successfully formatted"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["label"], "DATA");
        assert_eq!(json["params"]["fs_type"], "Fat16");
        assert_eq!(json["params"]["layout"]["kind"], "fat");
        assert_eq!(json["params"]["layout"]["partition_start"], 63);
    }
}
