// exFAT volume writer
// Writes the boot region and its backup, the FAT, the allocation bitmap,
// the up-case table and the root directory. The rest of the heap is untouched.

pub mod bitmap;
pub mod boot_region;
pub mod structures;
pub mod upcase;

pub use bitmap::ExFatBitmap;
pub use boot_region::{boot_checksum, build_boot_region, BOOT_REGION_SECTORS};
pub use upcase::{upcase_table, UpcaseTable};

use crate::buffered_writer::BufferedWriter;
use crate::label::ExFatLabel;
use crate::params::{FormatParams, Layout};
use log::{debug, info};
use sdfmt_core::BlockDevice;
use std::io;
use structures::{bitmap_entry, upcase_entry, volume_label_entry};

/// First cluster of the cluster heap.
pub const FIRST_CLUSTER: u32 = 2;

const FAT_MEDIA_ENTRY: u32 = 0xFFFF_FFF8;
const FAT_END_OF_CHAIN: u32 = 0xFFFF_FFFF;

/// The exFAT rotate-right-add checksum, continued from `sum`.
pub fn checksum(sum: u32, bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(sum, |sum, &b| sum.rotate_right(1).wrapping_add(b as u32))
}

fn field<T: TryFrom<u64>>(value: u64, name: &str) -> io::Result<T> {
    T::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("exFAT {} {} does not fit its boot sector field", name, value),
        )
    })
}

/// On-disk layout of a new exFAT volume. Sector values are volume-relative
/// logical sectors, except `partition_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExFatLayout {
    pub bytes_per_sector: u32,
    pub sectors_per_cluster: u32,
    pub partition_offset: u64,
    pub volume_length: u64,
    pub fat_offset: u32,
    pub fat_length: u32,
    pub cluster_heap_offset: u32,
    pub cluster_count: u32,
    pub bitmap_bytes: u64,
    pub bitmap_clusters: u32,
    pub upcase_bytes: u64,
    pub upcase_clusters: u32,
    pub root_cluster: u32,
    pub erase_block_bytes: u32,
}

impl ExFatLayout {
    pub fn new(params: &FormatParams, upcase_bytes: u64) -> io::Result<Self> {
        let Layout::ExFat {
            partition_offset,
            volume_length,
            fat_offset,
            fat_length,
            cluster_heap_offset,
            cluster_count,
        } = params.layout
        else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} parameters do not describe an exFAT volume", params.fs_type),
            ));
        };

        let cluster_bytes = params.cluster_bytes();
        let bitmap_bytes = cluster_count.div_ceil(8);
        let bitmap_clusters = bitmap_bytes.div_ceil(cluster_bytes);
        let upcase_clusters = upcase_bytes.div_ceil(cluster_bytes);
        let system_clusters = bitmap_clusters + upcase_clusters + 1;
        if system_clusters > cluster_count {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} clusters cannot hold {} system clusters", cluster_count, system_clusters),
            ));
        }

        Ok(Self {
            bytes_per_sector: params.bytes_per_sector,
            sectors_per_cluster: params.sectors_per_cluster,
            partition_offset,
            volume_length,
            fat_offset: field(fat_offset, "FAT offset")?,
            fat_length: field(fat_length, "FAT length")?,
            cluster_heap_offset: field(cluster_heap_offset, "cluster heap offset")?,
            cluster_count: field(cluster_count, "cluster count")?,
            bitmap_bytes,
            bitmap_clusters: field(bitmap_clusters, "bitmap size")?,
            upcase_bytes,
            upcase_clusters: field(upcase_clusters, "up-case table size")?,
            root_cluster: field(FIRST_CLUSTER as u64 + bitmap_clusters + upcase_clusters, "root cluster")?,
            erase_block_bytes: field(params.alignment * params.bytes_per_sector as u64, "erase block size")?,
        })
    }

    pub fn upcase_cluster(&self) -> u32 {
        FIRST_CLUSTER + self.bitmap_clusters
    }

    /// Bitmap, up-case table and root directory.
    pub fn system_clusters(&self) -> u32 {
        self.bitmap_clusters + self.upcase_clusters + 1
    }

    /// Byte offset of a volume-relative sector from the start of the device.
    pub fn sector_offset(&self, sector: u64) -> u64 {
        (self.partition_offset + sector) * self.bytes_per_sector as u64
    }

    pub fn cluster_offset(&self, cluster: u32) -> u64 {
        let heap_sector = (cluster - FIRST_CLUSTER) as u64 * self.sectors_per_cluster as u64;
        self.sector_offset(self.cluster_heap_offset as u64 + heap_sector)
    }

    /// Leading FAT entries: the two reserved ones, then one contiguous chain
    /// each for the bitmap, the up-case table and the root directory.
    pub fn fat_entries(&self) -> Vec<u8> {
        let mut entries = vec![FAT_MEDIA_ENTRY, FAT_END_OF_CHAIN];
        let chains = [
            (FIRST_CLUSTER, self.bitmap_clusters),
            (self.upcase_cluster(), self.upcase_clusters),
            (self.root_cluster, 1),
        ];
        for (first, count) in chains {
            for cluster in first..first + count {
                let last = cluster + 1 == first + count;
                entries.push(if last { FAT_END_OF_CHAIN } else { cluster + 1 });
            }
        }
        entries.iter().flat_map(|e| e.to_le_bytes()).collect()
    }

    pub fn bitmap(&self) -> ExFatBitmap {
        let mut bitmap = ExFatBitmap::new(self.cluster_count);
        bitmap.allocate_range(FIRST_CLUSTER, self.system_clusters());
        bitmap
    }
}

/// Root directory contents: label, allocation bitmap and up-case table entries.
pub fn root_directory(layout: &ExFatLayout, label: &ExFatLabel, upcase: &UpcaseTable) -> Vec<u8> {
    let mut root = Vec::with_capacity(3 * structures::DIR_ENTRY_SIZE);
    root.extend_from_slice(&volume_label_entry(label.units()));
    root.extend_from_slice(&bitmap_entry(FIRST_CLUSTER, layout.bitmap_bytes));
    root.extend_from_slice(&upcase_entry(upcase.checksum(), layout.upcase_cluster(), upcase.len()));
    root
}

/// Write an exFAT volume at the partition offset described by `params`.
///
/// On return the writer cursor sits at the end of the root directory cluster.
pub fn write_exfat_filesystem<D: BlockDevice + ?Sized>(
    writer: &mut BufferedWriter<'_, D>,
    params: &FormatParams,
    label: &ExFatLabel,
    volume_serial: u32,
) -> io::Result<()> {
    let upcase = upcase_table();
    let layout = ExFatLayout::new(params, upcase.len())?;

    // Main and backup boot regions are identical and adjacent.
    let region = build_boot_region(&layout, volume_serial);
    writer.fill_and_write(layout.sector_offset(0), &region)?;
    writer.fill_and_write(layout.sector_offset(BOOT_REGION_SECTORS), &region)?;
    info!(
        "Wrote exFAT boot regions at sector {} (serial {:08X})",
        layout.partition_offset, volume_serial
    );

    writer.fill_and_write(layout.sector_offset(layout.fat_offset as u64), &layout.fat_entries())?;
    debug!("Wrote FAT at volume sector {} ({} sectors)", layout.fat_offset, layout.fat_length);

    let bitmap = layout.bitmap();
    writer.fill_and_write(layout.cluster_offset(FIRST_CLUSTER), bitmap.as_bytes())?;
    debug!(
        "Wrote allocation bitmap: {} bytes, {} free clusters",
        bitmap.len(),
        bitmap.count_free()
    );

    writer.fill_and_write(layout.cluster_offset(layout.upcase_cluster()), upcase.bytes())?;
    debug!(
        "Wrote up-case table at cluster {} (checksum 0x{:08X})",
        layout.upcase_cluster(),
        upcase.checksum()
    );

    writer.fill_and_write(
        layout.cluster_offset(layout.root_cluster),
        &root_directory(&layout, label, upcase),
    )?;
    writer.fill(layout.cluster_offset(layout.root_cluster + 1))?;

    info!(
        "exFAT filesystem written: {} clusters of {} bytes, root at cluster {}",
        layout.cluster_count,
        params.cluster_bytes(),
        layout.root_cluster
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::calculate_format_params;
    use byteorder::{ByteOrder, LittleEndian};
    use sdfmt_core::Diagnostics;

    const GIB: u64 = 2 * 1024 * 1024;

    fn params_64gib() -> FormatParams {
        calculate_format_params(64 * GIB, false, false, &mut Diagnostics::new()).unwrap()
    }

    #[test]
    fn test_checksum_is_rotate_right_add() {
        assert_eq!(checksum(0, &[1]), 1);
        assert_eq!(checksum(1, &[0]), 0x8000_0000);
        assert_eq!(checksum(0x8000_0000, &[5]), 0x4000_0005);
    }

    #[test]
    fn test_layout_for_64gib_card() {
        let layout = ExFatLayout::new(&params_64gib(), 5836).unwrap();
        assert_eq!(layout.cluster_count, 524_032);
        assert_eq!(layout.bitmap_bytes, 65504);
        assert_eq!(layout.bitmap_clusters, 1);
        assert_eq!(layout.upcase_clusters, 1);
        assert_eq!(layout.upcase_cluster(), 3);
        assert_eq!(layout.root_cluster, 4);
        assert_eq!(layout.erase_block_bytes, 16 * 1024 * 1024);
        assert_eq!(layout.sector_offset(0), 32768 * 512);
        assert_eq!(layout.cluster_offset(2), (32768 + 32768) * 512);
        assert_eq!(layout.cluster_offset(4), (32768 + 32768 + 512) * 512);
    }

    #[test]
    fn test_fat_chains() {
        let mut layout = ExFatLayout::new(&params_64gib(), 5836).unwrap();
        let fat = layout.fat_entries();
        let entries: Vec<u32> = fat.chunks_exact(4).map(LittleEndian::read_u32).collect();
        assert_eq!(entries, vec![0xFFFF_FFF8, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF]);

        // Multi-cluster chains link to the next cluster
        layout.bitmap_clusters = 3;
        layout.root_cluster = 6;
        let entries: Vec<u32> = layout.fat_entries().chunks_exact(4).map(LittleEndian::read_u32).collect();
        assert_eq!(entries[2..], [3, 4, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF]);
    }

    #[test]
    fn test_bitmap_marks_system_clusters() {
        let layout = ExFatLayout::new(&params_64gib(), 5836).unwrap();
        let bitmap = layout.bitmap();
        assert_eq!(bitmap.as_bytes()[0], 0b0000_0111);
        assert_eq!(bitmap.count_free(), 524_032 - 3);
    }

    #[test]
    fn test_rejects_fat_params() {
        let p = calculate_format_params(131072, false, false, &mut Diagnostics::new()).unwrap();
        let err = ExFatLayout::new(&p, 5836).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_root_directory_entries() {
        let layout = ExFatLayout::new(&params_64gib(), upcase_table().len()).unwrap();
        let label = ExFatLabel::new("Fotos").unwrap();
        let root = root_directory(&layout, &label, upcase_table());
        assert_eq!(root.len(), 96);
        assert_eq!(root[0], 0x83);
        assert_eq!(root[1], 5);
        assert_eq!(root[32], 0x81);
        assert_eq!(LittleEndian::read_u32(&root[32 + 20..]), 2);
        assert_eq!(LittleEndian::read_u64(&root[32 + 24..]), 65504);
        assert_eq!(root[64], 0x82);
        assert_eq!(LittleEndian::read_u32(&root[64 + 4..]), upcase_table().checksum());
        assert_eq!(LittleEndian::read_u32(&root[64 + 20..]), 3);
        assert_eq!(LittleEndian::read_u64(&root[64 + 24..]), upcase_table().len());
    }
}
