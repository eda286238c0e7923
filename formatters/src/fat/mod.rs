// FAT12/16/32 volume writer
// Lays down the boot record, both FATs and the root directory inside the partition.
// The data area is not touched.

use crate::buffered_writer::BufferedWriter;
use crate::fat_common::{
    build_fat16_boot_sector, build_fat32_boot_sector, build_fsinfo_sector, build_sentinel_sector,
    FatBootSectorParams, ATTR_VOLUME_ID, DIR_ATTR_OFFSET, DIR_ENTRY_SIZE, FAT32_BACKUP_BOOT_SECTOR,
    FAT32_ENTRY_MASK, FAT32_EOC, FSI_UNKNOWN, MEDIA_FIXED,
};
use crate::label::FatLabel;
use crate::params::{FormatParams, FsType, Layout};
use log::{debug, info};
use sdfmt_core::BlockDevice;
use std::io;

/// FAT geometry extracted from validated parameters, in logical sectors.
#[derive(Debug, Clone, Copy)]
struct FatRegions {
    bytes_per_sector: u64,
    partition_start: u64,
    reserved_sectors: u64,
    sectors_per_fat: u64,
    fs_area_size: u64,
    max_clusters: u64,
}

impl FatRegions {
    fn from_params(params: &FormatParams) -> io::Result<Self> {
        match params.layout {
            Layout::Fat { reserved_sectors, sectors_per_fat, fs_area_size, partition_start, max_clusters }
                if params.fs_type.is_fat() =>
            {
                Ok(Self {
                    bytes_per_sector: params.bytes_per_sector as u64,
                    partition_start,
                    reserved_sectors,
                    sectors_per_fat,
                    fs_area_size,
                    max_clusters,
                })
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} parameters do not describe a FAT volume", params.fs_type),
            )),
        }
    }

    /// Byte offset of a partition-relative sector.
    fn offset(&self, sector: u64) -> u64 {
        (self.partition_start + sector) * self.bytes_per_sector
    }
}

/// Leading entries of each FAT: media descriptor, end-of-chain marker and,
/// for FAT32, the root directory cluster.
pub fn reserved_fat_entries(fs_type: FsType) -> Vec<u8> {
    match fs_type {
        FsType::Fat12 => vec![MEDIA_FIXED, 0xFF, 0xFF],
        FsType::Fat16 => vec![MEDIA_FIXED, 0xFF, 0xFF, 0xFF],
        _ => {
            let media = (0xFFFF_FF00 | MEDIA_FIXED as u32) & FAT32_ENTRY_MASK;
            let entries = [media, FAT32_EOC, FAT32_EOC];
            entries.iter().flat_map(|e| e.to_le_bytes()).collect()
        }
    }
}

/// Root directory entry carrying the volume label.
pub fn volume_label_entry(name: [u8; 11]) -> [u8; DIR_ENTRY_SIZE] {
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[..11].copy_from_slice(&name);
    entry[DIR_ATTR_OFFSET] = ATTR_VOLUME_ID;
    entry
}

fn boot_sector_params(params: &FormatParams, regions: &FatRegions, label: &FatLabel, volume_serial: u32) -> FatBootSectorParams {
    FatBootSectorParams {
        bytes_per_sector: params.bytes_per_sector as u16,
        sectors_per_cluster: params.sectors_per_cluster as u8,
        reserved_sectors: regions.reserved_sectors as u16,
        root_entries: params.root_entries() as u16,
        total_sectors: params.partition_sectors() as u32,
        media_descriptor: MEDIA_FIXED,
        sectors_per_fat: regions.sectors_per_fat as u32,
        sectors_per_track: params.sectors_per_track,
        num_heads: params.heads,
        hidden_sectors: regions.partition_start as u32,
        volume_serial,
        volume_label: label.boot_sector_label(),
    }
}

/// Write a FAT12/16/32 volume at the partition start described by `params`.
///
/// The writer cursor must not be past the partition start. On return the
/// cursor sits at the end of the filesystem area (plus the root cluster for FAT32).
pub fn write_fat_filesystem<D: BlockDevice + ?Sized>(
    writer: &mut BufferedWriter<'_, D>,
    params: &FormatParams,
    label: &FatLabel,
    volume_serial: u32,
) -> io::Result<()> {
    let regions = FatRegions::from_params(params)?;
    let bps = params.bytes_per_sector as u16;
    let bs_params = boot_sector_params(params, &regions, label, volume_serial);

    match params.fs_type {
        FsType::Fat12 => writer.fill_and_write(regions.offset(0), &build_fat16_boot_sector(&bs_params, b"FAT12   "))?,
        FsType::Fat16 => writer.fill_and_write(regions.offset(0), &build_fat16_boot_sector(&bs_params, b"FAT16   "))?,
        _ => {
            let boot = build_fat32_boot_sector(&bs_params);
            let sentinel = build_sentinel_sector(bps);
            let free = (regions.max_clusters - 1) as u32;

            writer.fill_and_write(regions.offset(0), &boot)?;
            writer.write(&build_fsinfo_sector(bps, free, 3))?;
            writer.write(&sentinel)?;

            // Backup boot record. The free count of the copy is left unknown.
            writer.fill_and_write(regions.offset(FAT32_BACKUP_BOOT_SECTOR as u64), &boot)?;
            writer.write(&build_fsinfo_sector(bps, FSI_UNKNOWN, 3))?;
            writer.write(&sentinel)?;
            debug!("Wrote FSInfo ({} free clusters) and backup boot sectors", free);
        }
    }
    info!(
        "Wrote {} boot sector at sector {} (serial {:04X}-{:04X})",
        params.fs_type,
        regions.partition_start,
        volume_serial >> 16,
        volume_serial & 0xFFFF
    );

    let entries = reserved_fat_entries(params.fs_type);
    for fat in 0..2 {
        let start = regions.reserved_sectors + fat * regions.sectors_per_fat;
        writer.fill_and_write(regions.offset(start), &entries)?;
    }
    debug!(
        "Wrote 2 FATs of {} sectors at sector {}",
        regions.sectors_per_fat, regions.reserved_sectors
    );

    // Fixed root directory for FAT12/16, cluster 2 for FAT32. Both start right after the FATs.
    let root_start = regions.reserved_sectors + 2 * regions.sectors_per_fat;
    if let Some(name) = label.dir_entry_name() {
        writer.fill_and_write(regions.offset(root_start), &volume_label_entry(name))?;
        debug!("Wrote volume label entry {:?}", label.text());
    }

    let mut end = regions.fs_area_size;
    if params.fs_type == FsType::Fat32 {
        end += params.sectors_per_cluster as u64;
    }
    writer.fill(regions.offset(end))?;

    info!(
        "{} filesystem written: {} clusters of {} bytes",
        params.fs_type,
        regions.max_clusters,
        params.cluster_bytes()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fat_common::*;
    use crate::params::calculate_format_params;
    use byteorder::{ByteOrder, LittleEndian};
    use sdfmt_core::test_utils::MemoryDevice;
    use sdfmt_core::Diagnostics;

    const GIB: u64 = 2 * 1024 * 1024;

    fn format(sectors: u64, force_fat32: bool, label: &str) -> (FormatParams, MemoryDevice, u64) {
        let mut diag = Diagnostics::new();
        let params = calculate_format_params(sectors, force_fat32, false, &mut diag).unwrap();
        let label = FatLabel::new(label, &mut diag).unwrap();
        let mut dev = MemoryDevice::new_block_device(sectors);
        let end = {
            let mut w = BufferedWriter::new(&mut dev);
            write_fat_filesystem(&mut w, &params, &label, 0x1234_ABCD).unwrap();
            w.finish().unwrap()
        };
        (params, dev, end)
    }

    fn fat_layout(params: &FormatParams) -> (u64, u64, u64, u64) {
        match params.layout {
            Layout::Fat { reserved_sectors, sectors_per_fat, fs_area_size, partition_start, .. } => {
                (reserved_sectors, sectors_per_fat, fs_area_size, partition_start)
            }
            _ => panic!("expected FAT layout"),
        }
    }

    #[test]
    fn test_reserved_entries() {
        assert_eq!(reserved_fat_entries(FsType::Fat12), vec![0xF8, 0xFF, 0xFF]);
        assert_eq!(reserved_fat_entries(FsType::Fat16), vec![0xF8, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            reserved_fat_entries(FsType::Fat32),
            vec![0xF8, 0xFF, 0xFF, 0x0F, 0xFF, 0xFF, 0xFF, 0x0F, 0xFF, 0xFF, 0xFF, 0x0F]
        );
    }

    #[test]
    fn test_fat16_volume_layout() {
        let (params, dev, end) = format(131072, false, "DATA");
        let (rsvd, spf, fs_area, start) = fat_layout(&params);
        assert_eq!((rsvd, spf, fs_area, start), (1, 16, 65, 63));
        assert_eq!(end, (start + fs_area) * 512);

        let vbr = dev.sector(start);
        assert_eq!(&vbr[0..3], &[0xEB, 0x3C, 0x90]);
        assert_eq!(LittleEndian::read_u32(&vbr[BPB_HIDD_SEC..]), 63);
        assert_eq!(LittleEndian::read_u32(&vbr[BPB_TOT_SEC32..]), 131072 - 63);
        assert_eq!(LittleEndian::read_u32(&vbr[BS16_VOL_ID..]), 0x1234_ABCD);
        assert_eq!(&vbr[BS16_VOL_LAB..BS16_VOL_LAB + 11], b"DATA       ");
        assert_eq!(&vbr[BS16_FIL_SYS_TYPE..BS16_FIL_SYS_TYPE + 8], b"FAT16   ");

        for fat in 0..2 {
            let sector = dev.sector(start + rsvd + fat * spf);
            assert_eq!(&sector[0..4], &[0xF8, 0xFF, 0xFF, 0xFF]);
            assert!(sector[4..].iter().all(|&b| b == 0));
        }

        let root = dev.sector(start + rsvd + 2 * spf);
        assert_eq!(&root[0..11], b"DATA       ");
        assert_eq!(root[11], 0x08);
        assert!(root[12..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fat12_volume_without_label() {
        let (params, dev, _) = format(16384, false, "");
        assert_eq!(params.fs_type, FsType::Fat12);
        let (rsvd, spf, _, start) = fat_layout(&params);

        let vbr = dev.sector(start);
        assert_eq!(&vbr[BS16_VOL_LAB..BS16_VOL_LAB + 11], b"NO NAME    ");
        assert_eq!(&vbr[BS16_FIL_SYS_TYPE..BS16_FIL_SYS_TYPE + 8], b"FAT12   ");
        assert_eq!(LittleEndian::read_u16(&vbr[BPB_TOT_SEC16..]) as u64, 16384 - start);
        assert_eq!(&dev.sector(start + rsvd)[0..4], &[0xF8, 0xFF, 0xFF, 0x00]);

        // No label, no root entry
        assert!(dev.sector(start + rsvd + 2 * spf).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fat32_boot_record_and_backup() {
        let (params, dev, end) = format(8 * GIB, true, "DATA");
        let (rsvd, spf, fs_area, start) = fat_layout(&params);
        assert_eq!(end, (start + fs_area + 64) * 512);

        let vbr = dev.sector(start);
        assert_eq!(&vbr[0..3], &[0xEB, 0x58, 0x90]);
        let fsinfo = dev.sector(start + 1);
        assert_eq!(LittleEndian::read_u32(&fsinfo[FSI_LEAD_SIG_OFFSET..]), FSI_LEAD_SIG);
        assert_eq!(LittleEndian::read_u32(&fsinfo[FSI_FREE_COUNT_OFFSET..]), 261888 - 1);
        assert_eq!(LittleEndian::read_u32(&fsinfo[FSI_NXT_FREE_OFFSET..]), 3);
        let sentinel = dev.sector(start + 2);
        assert_eq!(&sentinel[510..512], &[0x55, 0xAA]);
        assert!(sentinel[..510].iter().all(|&b| b == 0));

        assert_eq!(dev.sector(start + 6), vbr);
        let backup_fsinfo = dev.sector(start + 7);
        assert_eq!(LittleEndian::read_u32(&backup_fsinfo[FSI_FREE_COUNT_OFFSET..]), 0xFFFF_FFFF);
        assert_eq!(dev.sector(start + 8), sentinel);

        let fat = dev.sector(start + rsvd + spf);
        assert_eq!(LittleEndian::read_u32(&fat[0..]), 0x0FFF_FFF8);
        assert_eq!(LittleEndian::read_u32(&fat[4..]), 0x0FFF_FFFF);
        assert_eq!(LittleEndian::read_u32(&fat[8..]), 0x0FFF_FFFF);

        let root = start + rsvd + 2 * spf;
        assert_eq!(&dev.sector(root)[0..11], b"DATA       ");
        for s in 1..64 {
            assert!(dev.sector(root + s).iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_rejects_exfat_params() {
        let mut diag = Diagnostics::new();
        let params = calculate_format_params(64 * GIB, false, false, &mut diag).unwrap();
        let label = FatLabel::new("", &mut diag).unwrap();
        let mut dev = MemoryDevice::new(0);
        let mut w = BufferedWriter::new(&mut dev);
        let err = write_fat_filesystem(&mut w, &params, &label, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        w.finish().unwrap();
    }
}
