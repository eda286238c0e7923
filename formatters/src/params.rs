// Format parameter calculation
// Derives geometry, alignment and FAT/exFAT layout from the device capacity,
// following the SD Association's layout recommendations for SD memory cards.

use crate::fat_common::constants::*;
use log::debug;
use sdfmt_core::{Diagnostics, FormatError, SECTOR_SIZE};
use serde::Serialize;
use std::fmt;

/// Smallest device we agree to format, in 512-byte sectors (64 KiB).
pub const MIN_SECTORS: u64 = 128;

const MAX_ITERATIONS: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FsType {
    Fat12,
    Fat16,
    Fat32,
    ExFat,
}

impl FsType {
    /// Bits per FAT entry.
    pub fn fat_bits(self) -> u64 {
        match self {
            FsType::Fat12 => 12,
            FsType::Fat16 => 16,
            FsType::Fat32 | FsType::ExFat => 32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FsType::Fat12 => "FAT12",
            FsType::Fat16 => "FAT16",
            FsType::Fat32 => "FAT32",
            FsType::ExFat => "exFAT",
        }
    }

    pub fn is_fat(self) -> bool {
        !matches!(self, FsType::ExFat)
    }
}

impl fmt::Display for FsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filesystem-specific layout. All values are in logical sectors unless named otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layout {
    Fat {
        reserved_sectors: u64,
        sectors_per_fat: u64,
        /// Reserved sectors + both FATs + root directory sectors.
        fs_area_size: u64,
        partition_start: u64,
        /// Number of data clusters.
        max_clusters: u64,
    },
    ExFat {
        partition_offset: u64,
        volume_length: u64,
        fat_offset: u64,
        fat_length: u64,
        cluster_heap_offset: u64,
        cluster_count: u64,
    },
}

/// Validated parameters for one format operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatParams {
    /// Device capacity in logical sectors.
    pub total_sectors: u64,
    pub bytes_per_sector: u32,
    pub sectors_per_cluster: u32,
    /// Erase block size in logical sectors.
    pub alignment: u64,
    pub fs_type: FsType,
    pub heads: u16,
    pub sectors_per_track: u16,
    pub layout: Layout,
}

impl FormatParams {
    /// Logical sector size as a multiple of the 512-byte device sector.
    pub fn sector_ratio(&self) -> u64 {
        self.bytes_per_sector as u64 / SECTOR_SIZE as u64
    }

    pub fn cluster_bytes(&self) -> u64 {
        self.sectors_per_cluster as u64 * self.bytes_per_sector as u64
    }

    /// First sector of the partition.
    pub fn partition_start(&self) -> u64 {
        match self.layout {
            Layout::Fat { partition_start, .. } => partition_start,
            Layout::ExFat { partition_offset, .. } => partition_offset,
        }
    }

    /// Partition length; it always runs to the end of the device.
    pub fn partition_sectors(&self) -> u64 {
        self.total_sectors - self.partition_start()
    }

    pub fn cluster_count(&self) -> u64 {
        match self.layout {
            Layout::Fat { max_clusters, .. } => max_clusters,
            Layout::ExFat { cluster_count, .. } => cluster_count,
        }
    }

    pub fn root_entries(&self) -> u64 {
        match self.fs_type {
            FsType::Fat12 | FsType::Fat16 => FAT16_ROOT_ENTRIES as u64,
            _ => 0,
        }
    }

    pub fn root_dir_sectors(&self) -> u64 {
        root_dir_sectors(self.root_entries(), self.bytes_per_sector as u64)
    }

    /// Cross-check the layout. Any failure means the parameters must not be used.
    pub fn validate(&self) -> Result<(), FormatError> {
        let bps = self.bytes_per_sector as u64;
        let spc = self.sectors_per_cluster as u64;

        if !self.bytes_per_sector.is_power_of_two() || !(512..=4096).contains(&bps) {
            return Err(FormatError::infeasible(format!("invalid sector size {}", bps)));
        }
        if !self.sectors_per_cluster.is_power_of_two() {
            return Err(FormatError::infeasible(format!("sectors per cluster {} is not a power of two", spc)));
        }
        if !self.alignment.is_power_of_two() {
            return Err(FormatError::infeasible(format!("alignment {} is not a power of two", self.alignment)));
        }

        match self.layout {
            Layout::Fat { reserved_sectors, sectors_per_fat, fs_area_size, partition_start, max_clusters } => {
                if fs_area_size != reserved_sectors + 2 * sectors_per_fat + self.root_dir_sectors() {
                    return Err(FormatError::infeasible("filesystem area size does not match its parts"));
                }
                let (min, max) = match self.fs_type {
                    FsType::Fat12 => (1, FAT12_MAX_CLUSTERS),
                    FsType::Fat16 => (FAT16_MIN_CLUSTERS, FAT16_MAX_CLUSTERS),
                    FsType::Fat32 => (FAT32_MIN_CLUSTERS, FAT32_MAX_CLUSTERS),
                    FsType::ExFat => return Err(FormatError::infeasible("FAT layout with exFAT type")),
                };
                if !(min..=max).contains(&max_clusters) {
                    return Err(FormatError::infeasible(format!(
                        "{} clusters out of range for {} ({}..={})",
                        max_clusters, self.fs_type, min, max
                    )));
                }
                let fat_entries = sectors_per_fat * bps * 8 / self.fs_type.fat_bits();
                if fat_entries < max_clusters + 2 {
                    return Err(FormatError::infeasible(format!(
                        "FAT holds {} entries, {} needed",
                        fat_entries,
                        max_clusters + 2
                    )));
                }
                if partition_start == 0 || partition_start + fs_area_size + max_clusters * spc > self.total_sectors {
                    return Err(FormatError::infeasible("filesystem does not fit on the device"));
                }
                if spc > 128 || reserved_sectors > 0xFFFF {
                    return Err(FormatError::infeasible("cluster size or reserved area too large for the BPB"));
                }
                if self.fs_type == FsType::Fat32 && reserved_sectors < FAT32_MIN_RESERVED {
                    return Err(FormatError::infeasible("FAT32 needs at least 9 reserved sectors"));
                }
                if self.fs_type != FsType::Fat32 && sectors_per_fat > 0xFFFF {
                    return Err(FormatError::infeasible("FAT too large for a 16-bit FAT size field"));
                }
                if self.partition_sectors() > u32::MAX as u64 {
                    return Err(FormatError::infeasible(
                        "partition exceeds 2^32 sectors; try larger logical sectors",
                    ));
                }
            }
            Layout::ExFat {
                partition_offset,
                volume_length,
                fat_offset,
                fat_length,
                cluster_heap_offset,
                cluster_count,
            } => {
                if self.fs_type != FsType::ExFat {
                    return Err(FormatError::infeasible("exFAT layout with FAT type"));
                }
                if !(1..=0xFFFF_FFF5).contains(&cluster_count) {
                    return Err(FormatError::infeasible(format!("{} clusters out of range for exFAT", cluster_count)));
                }
                if fat_offset < 24 || fat_offset + fat_length > cluster_heap_offset {
                    return Err(FormatError::infeasible("exFAT FAT region overlaps boot region or heap"));
                }
                if fat_length * bps / 4 < cluster_count + 2 {
                    return Err(FormatError::infeasible("exFAT FAT too small for cluster count"));
                }
                if cluster_heap_offset + cluster_count * spc > volume_length
                    || partition_offset + volume_length > self.total_sectors
                {
                    return Err(FormatError::infeasible("exFAT volume does not fit on the device"));
                }
                if cluster_heap_offset > u32::MAX as u64 || spc * bps > 32 * 1024 * 1024 {
                    return Err(FormatError::infeasible("exFAT layout exceeds field limits"));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for FormatParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format parameters:")?;
        writeln!(f, "  Filesystem type:      {}", self.fs_type)?;
        writeln!(f, "  Heads:                {}", self.heads)?;
        writeln!(f, "  Sectors per track:    {}", self.sectors_per_track)?;
        writeln!(f, "  Bytes per sector:     {}", self.bytes_per_sector)?;
        writeln!(f, "  Alignment:            {}", self.alignment)?;
        writeln!(f, "  Sectors per cluster:  {}", self.sectors_per_cluster)?;
        match self.layout {
            Layout::Fat { reserved_sectors, sectors_per_fat, fs_area_size, partition_start, max_clusters } => {
                writeln!(f, "  Reserved sectors:     {}", reserved_sectors)?;
                writeln!(f, "  Sectors per FAT:      {}", sectors_per_fat)?;
                writeln!(f, "  Filesystem area size: {}", fs_area_size)?;
                writeln!(f, "  Partition start:      {}", partition_start)?;
                write!(f, "  Maximum clusters:     {}", max_clusters)
            }
            Layout::ExFat { partition_offset, volume_length, fat_offset, fat_length, cluster_heap_offset, cluster_count } => {
                writeln!(f, "  Partition offset:     {}", partition_offset)?;
                writeln!(f, "  Volume length:        {}", volume_length)?;
                writeln!(f, "  FAT offset:           {}", fat_offset)?;
                writeln!(f, "  FAT length:           {}", fat_length)?;
                writeln!(f, "  Cluster heap offset:  {}", cluster_heap_offset)?;
                write!(f, "  Cluster count:        {}", cluster_count)
            }
        }
    }
}

/// CHS geometry by capacity in MiB. The last row covers everything larger.
const GEOMETRY_TABLE: [(u64, u16, u16); 10] = [
    (2, 2, 16),
    (16, 2, 32),
    (32, 4, 32),
    (128, 8, 32),
    (256, 16, 32),
    (504, 16, 63),
    (1008, 32, 63),
    (2016, 64, 63),
    (4032, 128, 63),
    (u64::MAX, 255, 63),
];

struct AlignRow {
    cap_log2: u32,
    fs_type: FsType,
    sectors_per_cluster: u32,
    alignment: u64,
}

/// Default filesystem, cluster size and erase block size by capacity in 512-byte sectors.
const ALIGN_TABLE: [AlignRow; 9] = [
    AlignRow { cap_log2: 14, fs_type: FsType::Fat12, sectors_per_cluster: 16, alignment: 16 }, // <= 8 MiB
    AlignRow { cap_log2: 17, fs_type: FsType::Fat12, sectors_per_cluster: 32, alignment: 32 }, // <= 64 MiB
    AlignRow { cap_log2: 19, fs_type: FsType::Fat16, sectors_per_cluster: 32, alignment: 64 }, // <= 256 MiB
    AlignRow { cap_log2: 21, fs_type: FsType::Fat16, sectors_per_cluster: 32, alignment: 128 }, // <= 1 GiB
    AlignRow { cap_log2: 22, fs_type: FsType::Fat16, sectors_per_cluster: 64, alignment: 128 }, // <= 2 GiB
    AlignRow { cap_log2: 26, fs_type: FsType::Fat32, sectors_per_cluster: 64, alignment: 8192 }, // <= 32 GiB
    AlignRow { cap_log2: 28, fs_type: FsType::ExFat, sectors_per_cluster: 256, alignment: 32768 }, // <= 128 GiB
    AlignRow { cap_log2: 30, fs_type: FsType::ExFat, sectors_per_cluster: 512, alignment: 65536 }, // <= 512 GiB
    AlignRow { cap_log2: 32, fs_type: FsType::ExFat, sectors_per_cluster: 1024, alignment: 131072 }, // <= 2 TiB
];

fn root_dir_sectors(root_entries: u64, bytes_per_sector: u64) -> u64 {
    (root_entries * DIR_ENTRY_SIZE as u64).div_ceil(bytes_per_sector)
}

fn fat_sectors_for(entries: u64, bits: u64, bytes_per_sector: u64) -> u64 {
    (entries * bits).div_ceil(bytes_per_sector * 8)
}

#[derive(Debug, Clone, Copy)]
struct FatGeometry {
    reserved_sectors: u64,
    sectors_per_fat: u64,
    fs_area_size: u64,
    partition_start: u64,
    max_clusters: u64,
}

fn data_clusters(total: u64, partition_start: u64, fs_area_size: u64, spc: u64) -> Result<u64, FormatError> {
    total
        .checked_sub(partition_start)
        .and_then(|s| s.checked_sub(fs_area_size))
        .map(|s| s / spc)
        .ok_or_else(|| FormatError::infeasible("device too small for the filesystem metadata"))
}

/// FAT12/16: the partition start moves so that the data area begins on an alignment boundary.
fn calc_fat12_16(total: u64, bits: u64, bps: u64, spc: u64, alignment: u64) -> Result<FatGeometry, FormatError> {
    let reserved = 1;
    let root_sectors = root_dir_sectors(FAT16_ROOT_ENTRIES as u64, bps);
    let mut spf = fat_sectors_for(total / spc, bits, bps);

    for _ in 0..MAX_ITERATIONS {
        let fs_area_size = reserved + 2 * spf + root_sectors;
        let mut partition_start = alignment - fs_area_size % alignment;
        if partition_start != alignment {
            partition_start += alignment;
        }

        let (max_clusters, needed) = loop {
            let clusters = data_clusters(total, partition_start, fs_area_size, spc)?;
            let needed = fat_sectors_for(clusters + 2, bits, bps);
            if needed <= spf {
                break (clusters, needed);
            }
            partition_start += alignment;
        };

        if needed == spf {
            return Ok(FatGeometry {
                reserved_sectors: reserved,
                sectors_per_fat: spf,
                fs_area_size,
                partition_start,
                max_clusters,
            });
        }
        spf = needed;
    }
    Err(FormatError::infeasible("FAT size did not converge"))
}

/// FAT32: the partition starts at the first alignment boundary and the
/// reserved area grows so that the data area is aligned.
fn calc_fat32(total: u64, bps: u64, spc: u64, alignment: u64) -> Result<FatGeometry, FormatError> {
    let partition_start = alignment;
    let mut spf = fat_sectors_for(total / spc, 32, bps);

    for _ in 0..MAX_ITERATIONS {
        let mut reserved = alignment - (2 * spf) % alignment;
        if reserved < FAT32_MIN_RESERVED {
            reserved += alignment;
        }
        let mut fs_area_size = reserved + 2 * spf;

        let (max_clusters, needed) = loop {
            let clusters = data_clusters(total, partition_start, fs_area_size, spc)?;
            let needed = fat_sectors_for(clusters + 2, 32, bps);
            if needed <= spf {
                break (clusters, needed);
            }
            fs_area_size += alignment;
            reserved += alignment;
        };

        if needed == spf {
            // BPB_RsvdSecCnt is 16 bits. Trade whole erase blocks of reserved
            // area for a later partition start; the data area stays aligned.
            let mut partition_start = partition_start;
            while reserved > 0xFFFF && reserved >= alignment + FAT32_MIN_RESERVED {
                reserved -= alignment;
                fs_area_size -= alignment;
                partition_start += alignment;
            }
            return Ok(FatGeometry {
                reserved_sectors: reserved,
                sectors_per_fat: spf,
                fs_area_size,
                partition_start,
                max_clusters,
            });
        }
        spf = spf
            .checked_sub(1)
            .ok_or_else(|| FormatError::infeasible("FAT32 size did not converge"))?;
    }
    Err(FormatError::infeasible("FAT32 size did not converge"))
}

/// Compute and validate the format parameters for a device of `device_sectors` 512-byte sectors.
pub fn calculate_format_params(
    device_sectors: u64,
    force_fat32: bool,
    big_clusters: bool,
    diag: &mut Diagnostics,
) -> Result<FormatParams, FormatError> {
    if device_sectors == 0 {
        return Err(FormatError::infeasible("device capacity is 0"));
    }
    if device_sectors < MIN_SECTORS {
        return Err(FormatError::DeviceTooSmall { sectors: device_sectors, minimum: MIN_SECTORS });
    }

    let mib = device_sectors >> 11;
    let (_, heads, sectors_per_track) = GEOMETRY_TABLE
        .iter()
        .copied()
        .find(|&(cap, _, _)| mib <= cap)
        .unwrap_or(GEOMETRY_TABLE[GEOMETRY_TABLE.len() - 1]);

    let row = ALIGN_TABLE
        .iter()
        .find(|row| device_sectors <= 1u64 << row.cap_log2)
        .ok_or_else(|| {
            FormatError::infeasible(format!(
                "capacity of {} sectors exceeds the supported maximum of 2 TiB",
                device_sectors
            ))
        })?;

    let mut fs_type = row.fs_type;
    let mut spc = row.sectors_per_cluster;
    let mut alignment = row.alignment;
    let mut total = device_sectors;
    let mut bps = SECTOR_SIZE as u32;

    if force_fat32 && fs_type == FsType::ExFat {
        fs_type = FsType::Fat32;
        if spc > 128 {
            if big_clusters {
                let ratio = spc / 128;
                bps *= ratio;
                spc = 128;
                alignment /= ratio as u64;
                total /= ratio as u64;
                diag.warn(format!(
                    "Using {} byte logical sectors to keep {} KiB clusters. Some drivers do not support this.",
                    bps,
                    spc * bps / 1024
                ));
            } else {
                spc = 128;
                diag.warn(
                    "FAT32 doesn't support more than 64 KiB per cluster. \
                     Using 64 KiB which might lower performance and lifetime.",
                );
            }
        }
    }

    debug!(
        "Capacity {} sectors: {} spc={} alignment={} bps={}",
        device_sectors, fs_type, spc, alignment, bps
    );

    let params = match fs_type {
        FsType::Fat12 | FsType::Fat16 => {
            let (fs_type, geo) = fit_fat12_16(total, fs_type, bps as u64, spc as u64, alignment)?;
            fat_params(total, bps, spc, alignment, fs_type, heads, sectors_per_track, geo)
        }
        FsType::Fat32 => {
            let mut geo = calc_fat32(total, bps as u64, spc as u64, alignment)?;
            // Just above 2 GiB the default cluster size leaves too few clusters for FAT32.
            while geo.max_clusters < FAT32_MIN_CLUSTERS && spc > 1 {
                spc /= 2;
                debug!("Too few FAT32 clusters, retrying with {} sectors per cluster", spc);
                geo = calc_fat32(total, bps as u64, spc as u64, alignment)?;
            }
            if geo.reserved_sectors > 0xFFFF {
                while geo.reserved_sectors > 0xFFFF && alignment > 1 {
                    alignment /= 2;
                    geo = calc_fat32(total, bps as u64, spc as u64, alignment)?;
                }
                diag.warn(format!(
                    "Reserved area does not fit the FAT32 boot sector, aligning to {} sectors instead.",
                    alignment
                ));
            }
            fat_params(total, bps, spc, alignment, FsType::Fat32, heads, sectors_per_track, geo)
        }
        FsType::ExFat => FormatParams {
            total_sectors: total,
            bytes_per_sector: bps,
            sectors_per_cluster: spc,
            alignment,
            fs_type,
            heads,
            sectors_per_track,
            layout: Layout::ExFat {
                partition_offset: alignment,
                volume_length: total - alignment,
                fat_offset: alignment / 2,
                fat_length: alignment / 2,
                cluster_heap_offset: alignment,
                cluster_count: total.saturating_sub(2 * alignment) / spc as u64,
            },
        },
    };

    params.validate()?;
    Ok(params)
}

/// FAT12 is only kept while the cluster count stays below the FAT12 limit.
fn fit_fat12_16(
    total: u64,
    fs_type: FsType,
    bps: u64,
    spc: u64,
    alignment: u64,
) -> Result<(FsType, FatGeometry), FormatError> {
    if fs_type == FsType::Fat16 {
        return Ok((FsType::Fat16, calc_fat12_16(total, 16, bps, spc, alignment)?));
    }

    let mut geo = calc_fat12_16(total, 12, bps, spc, alignment)?;
    if geo.max_clusters <= FAT12_MAX_CLUSTERS {
        return Ok((FsType::Fat12, geo));
    }

    let fat16 = calc_fat12_16(total, 16, bps, spc, alignment)?;
    if fat16.max_clusters >= FAT16_MIN_CLUSTERS {
        debug!("{} clusters exceed FAT12, using FAT16", geo.max_clusters);
        return Ok((FsType::Fat16, fat16));
    }

    // Between the two ranges: give up a few clusters to stay FAT12.
    while geo.max_clusters > FAT12_MAX_CLUSTERS {
        geo.partition_start += alignment;
        geo.max_clusters = data_clusters(total, geo.partition_start, geo.fs_area_size, spc)?;
    }
    Ok((FsType::Fat12, geo))
}

#[allow(clippy::too_many_arguments)]
fn fat_params(
    total: u64,
    bps: u32,
    spc: u32,
    alignment: u64,
    fs_type: FsType,
    heads: u16,
    sectors_per_track: u16,
    geo: FatGeometry,
) -> FormatParams {
    FormatParams {
        total_sectors: total,
        bytes_per_sector: bps,
        sectors_per_cluster: spc,
        alignment,
        fs_type,
        heads,
        sectors_per_track,
        layout: Layout::Fat {
            reserved_sectors: geo.reserved_sectors,
            sectors_per_fat: geo.sectors_per_fat,
            fs_area_size: geo.fs_area_size,
            partition_start: geo.partition_start,
            max_clusters: geo.max_clusters,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 2 * 1024 * 1024;

    fn calc(sectors: u64) -> FormatParams {
        calculate_format_params(sectors, false, false, &mut Diagnostics::new()).unwrap()
    }

    #[test]
    fn test_64mib_card_is_fat16() {
        let p = calc(131072);
        assert_eq!(p.fs_type, FsType::Fat16);
        assert_eq!(p.sectors_per_cluster, 32);
        assert_eq!(p.alignment, 32);
        assert_eq!(p.bytes_per_sector, 512);
        assert_eq!((p.heads, p.sectors_per_track), (8, 32));
        assert_eq!(
            p.layout,
            Layout::Fat {
                reserved_sectors: 1,
                sectors_per_fat: 16,
                fs_area_size: 65,
                partition_start: 63,
                max_clusters: 4092,
            }
        );
        // Data area starts on an erase block boundary
        assert_eq!((63 + 65) % 32, 0);
    }

    #[test]
    fn test_8gib_forced_fat32() {
        let p = calculate_format_params(8 * GIB, true, false, &mut Diagnostics::new()).unwrap();
        assert_eq!(p.fs_type, FsType::Fat32);
        assert_eq!(p.sectors_per_cluster, 64);
        assert_eq!(p.alignment, 8192);
        assert_eq!((p.heads, p.sectors_per_track), (255, 63));
        assert_eq!(
            p.layout,
            Layout::Fat {
                reserved_sectors: 4098,
                sectors_per_fat: 2047,
                fs_area_size: 8192,
                partition_start: 8192,
                max_clusters: 261888,
            }
        );
    }

    #[test]
    fn test_every_table_range_satisfies_invariants() {
        let capacities = [
            128,
            1000,
            4096,
            16384,
            16385,
            40000,
            130900,
            131072,
            131073,
            400000,
            524288,
            524289,
            2097152,
            2097153,
            4194304,
            4194305,
            8 * GIB,
            1u64 << 26,
            (1u64 << 26) + 1,
            100 * GIB,
            1u64 << 28,
            (1u64 << 28) + 1,
            1u64 << 30,
            (1u64 << 30) + 12345,
            1u64 << 32,
        ];

        for &cap in &capacities {
            let p = calc(cap);
            p.validate().unwrap();
            match p.layout {
                Layout::Fat { reserved_sectors, sectors_per_fat, fs_area_size, partition_start, max_clusters } => {
                    assert_eq!(
                        fs_area_size,
                        reserved_sectors + 2 * sectors_per_fat + (32 * p.root_entries()).div_ceil(512),
                        "capacity {}",
                        cap
                    );
                    let range = match p.fs_type {
                        FsType::Fat12 => 1..=4084,
                        FsType::Fat16 => 4087..=65524,
                        FsType::Fat32 => 65525..=0x0FFF_FFF6,
                        FsType::ExFat => unreachable!(),
                    };
                    assert!(range.contains(&max_clusters), "capacity {}: {} clusters", cap, max_clusters);
                    assert_eq!((partition_start + fs_area_size) % p.alignment, 0, "capacity {}", cap);
                }
                Layout::ExFat { cluster_count, .. } => {
                    assert!((1..=0xFFFF_FFF5).contains(&cluster_count));
                }
            }
        }
    }

    #[test]
    fn test_forced_fat32_on_every_exfat_row() {
        for &cap in &[(1u64 << 26) + 1, 1u64 << 28, 1u64 << 30, 1u64 << 32] {
            let mut diag = Diagnostics::new();
            let p = calculate_format_params(cap, true, false, &mut diag).unwrap();
            assert_eq!(p.fs_type, FsType::Fat32);
            assert_eq!(p.sectors_per_cluster, 128);
            p.validate().unwrap();
            assert!(!diag.is_empty());
        }
    }

    #[test]
    fn test_forced_fat32_on_huge_card_keeps_reserved_area_in_bpb() {
        for &cap in &[2_412_975_152u64, 2_153_832_479, 1_088_841_759, 3_709_109_106] {
            let p = calculate_format_params(cap, true, false, &mut Diagnostics::new()).unwrap();
            match p.layout {
                Layout::Fat { reserved_sectors, partition_start, fs_area_size, .. } => {
                    assert!(reserved_sectors <= 0xFFFF);
                    assert_eq!((partition_start + fs_area_size) % p.alignment, 0);
                }
                _ => panic!("expected FAT layout"),
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for &cap in &[5000u64, 131072, 3 * GIB, 16 * GIB, 200 * GIB] {
            for &force in &[false, true] {
                let a = calculate_format_params(cap, force, false, &mut Diagnostics::new()).unwrap();
                let b = calculate_format_params(cap, force, false, &mut Diagnostics::new()).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_force_fat32_ignored_below_exfat_sizes() {
        assert_eq!(calculate_format_params(2 * GIB, true, false, &mut Diagnostics::new()).unwrap(), calc(2 * GIB));
        assert_eq!(calculate_format_params(16 * GIB, true, false, &mut Diagnostics::new()).unwrap(), calc(16 * GIB));
    }

    #[test]
    fn test_forced_fat32_clamps_cluster_size() {
        let mut diag = Diagnostics::new();
        let p = calculate_format_params(64 * GIB, true, false, &mut diag).unwrap();
        assert_eq!(p.fs_type, FsType::Fat32);
        assert_eq!(p.sectors_per_cluster, 128);
        assert_eq!(p.bytes_per_sector, 512);
        assert_eq!(p.alignment, 32768);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].contains("64 KiB"));
    }

    #[test]
    fn test_big_clusters_raise_sector_size() {
        let mut diag = Diagnostics::new();
        let p = calculate_format_params(64 * GIB, true, true, &mut diag).unwrap();
        assert_eq!(p.fs_type, FsType::Fat32);
        assert_eq!(p.bytes_per_sector, 1024);
        assert_eq!(p.sectors_per_cluster, 128);
        assert_eq!(p.alignment, 16384);
        assert_eq!(p.total_sectors, 32 * GIB);
        assert_eq!(p.cluster_bytes(), 128 * 1024);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_exfat_layout() {
        let p = calc(64 * GIB);
        assert_eq!(p.fs_type, FsType::ExFat);
        assert_eq!(p.sectors_per_cluster, 256);
        assert_eq!(
            p.layout,
            Layout::ExFat {
                partition_offset: 32768,
                volume_length: 64 * GIB - 32768,
                fat_offset: 16384,
                fat_length: 16384,
                cluster_heap_offset: 32768,
                cluster_count: (64 * GIB - 65536) / 256,
            }
        );
    }

    #[test]
    fn test_just_above_2gib_keeps_fat32_cluster_minimum() {
        let p = calc(4194305);
        assert_eq!(p.fs_type, FsType::Fat32);
        assert_eq!(p.sectors_per_cluster, 32);
        assert!(p.cluster_count() >= FAT32_MIN_CLUSTERS);
    }

    #[test]
    fn test_rejected_capacities() {
        let mut diag = Diagnostics::new();
        assert!(matches!(
            calculate_format_params(0, false, false, &mut diag),
            Err(FormatError::FormatParamsInfeasible(_))
        ));
        assert!(matches!(
            calculate_format_params(127, false, false, &mut diag),
            Err(FormatError::DeviceTooSmall { sectors: 127, .. })
        ));
        assert!(matches!(
            calculate_format_params((1u64 << 32) + 1, false, false, &mut diag),
            Err(FormatError::FormatParamsInfeasible(_))
        ));
    }

    #[test]
    fn test_validate_catches_inconsistent_layout() {
        let mut p = calc(131072);
        if let Layout::Fat { ref mut fs_area_size, .. } = p.layout {
            *fs_area_size += 1;
        }
        assert!(p.validate().is_err());

        let mut p = calc(131072);
        p.sectors_per_cluster = 24;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_display_lists_parameters() {
        let text = calc(131072).to_string();
        assert!(text.contains("FAT16"));
        assert!(text.contains("Partition start:      63"));
        assert!(text.contains("Maximum clusters:     4092"));
    }
}
