// Master Boot Record creation
// One partition spanning from the aligned partition start to the end of the card.

#[cfg(test)]
mod mbr_tests;

use crate::buffered_writer::BufferedWriter;
use crate::params::{FormatParams, FsType};
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};
use rand::rngs::OsRng;
use rand::RngCore;
use sdfmt_core::{BlockDevice, SECTOR_SIZE};
use std::io;

pub const MBR_DISK_SIGNATURE_OFFSET: usize = 440;
pub const MBR_PARTITION_TABLE_OFFSET: usize = 446;
pub const PARTITION_ENTRY_SIZE: usize = 16;
pub const MBR_SIGNATURE_OFFSET: usize = 510;

// Partition type codes
pub const PARTITION_TYPE_FAT12: u8 = 0x01;
pub const PARTITION_TYPE_FAT16_SMALL: u8 = 0x04; // FAT16 < 32 MiB
pub const PARTITION_TYPE_FAT16: u8 = 0x06;
pub const PARTITION_TYPE_FAT32: u8 = 0x0B; // FAT32 CHS
pub const PARTITION_TYPE_FAT32_LBA: u8 = 0x0C;
pub const PARTITION_TYPE_EXFAT: u8 = 0x07;

/// Last LBA reachable with 1024 cylinders of 255 heads and 63 sectors.
pub const CHS_LBA_LIMIT: u64 = 16_450_560;

/// Cylinder/head/sector address as stored in a partition entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chs {
    pub cylinder: u16,
    pub head: u8,
    pub sector: u8,
}

impl Chs {
    /// Used for any LBA that does not fit 10/8/6-bit CHS.
    pub const MAX: Chs = Chs { cylinder: 1023, head: 254, sector: 63 };

    pub fn from_lba(lba: u64, heads: u16, sectors_per_track: u16) -> Chs {
        let heads = heads as u64;
        let spt = sectors_per_track as u64;
        let cylinder = lba / (heads * spt);
        if cylinder > 1023 {
            return Chs::MAX;
        }
        Chs {
            cylinder: cylinder as u16,
            head: ((lba / spt) % heads) as u8,
            sector: (lba % spt + 1) as u8,
        }
    }

    pub fn encode(&self) -> [u8; 3] {
        [
            self.head,
            (self.sector & 0x3F) | ((self.cylinder >> 2) as u8 & 0xC0),
            self.cylinder as u8,
        ]
    }

    pub fn decode(bytes: [u8; 3]) -> Chs {
        Chs {
            cylinder: (bytes[2] as u16) | ((bytes[1] as u16 & 0xC0) << 2),
            head: bytes[0],
            sector: bytes[1] & 0x3F,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionEntry {
    pub bootable: bool,
    pub start_chs: Chs,
    pub partition_type: u8,
    pub end_chs: Chs,
    pub start_lba: u32,
    pub sector_count: u32,
}

impl PartitionEntry {
    pub fn encode(&self) -> [u8; PARTITION_ENTRY_SIZE] {
        let mut entry = [0u8; PARTITION_ENTRY_SIZE];
        entry[0] = if self.bootable { 0x80 } else { 0x00 };
        entry[1..4].copy_from_slice(&self.start_chs.encode());
        entry[4] = self.partition_type;
        entry[5..8].copy_from_slice(&self.end_chs.encode());
        LittleEndian::write_u32(&mut entry[8..12], self.start_lba);
        LittleEndian::write_u32(&mut entry[12..16], self.sector_count);
        entry
    }

    pub fn decode(entry: &[u8]) -> Option<PartitionEntry> {
        if entry.len() < PARTITION_ENTRY_SIZE || entry[4] == 0 {
            return None;
        }
        Some(PartitionEntry {
            bootable: entry[0] == 0x80,
            start_chs: Chs::decode([entry[1], entry[2], entry[3]]),
            partition_type: entry[4],
            end_chs: Chs::decode([entry[5], entry[6], entry[7]]),
            start_lba: LittleEndian::read_u32(&entry[8..12]),
            sector_count: LittleEndian::read_u32(&entry[12..16]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mbr {
    pub disk_signature: u32,
    pub partitions: Vec<PartitionEntry>,
}

impl Mbr {
    pub fn encode(&self) -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];
        LittleEndian::write_u32(&mut sector[MBR_DISK_SIGNATURE_OFFSET..], self.disk_signature);
        for (i, part) in self.partitions.iter().take(4).enumerate() {
            let offset = MBR_PARTITION_TABLE_OFFSET + i * PARTITION_ENTRY_SIZE;
            sector[offset..offset + PARTITION_ENTRY_SIZE].copy_from_slice(&part.encode());
        }
        sector[MBR_SIGNATURE_OFFSET] = 0x55;
        sector[MBR_SIGNATURE_OFFSET + 1] = 0xAA;
        sector
    }

    /// Parse sector 0. Returns `None` without the 0x55AA signature.
    pub fn decode(sector: &[u8]) -> Option<Mbr> {
        if sector.len() < SECTOR_SIZE || sector[MBR_SIGNATURE_OFFSET..MBR_SIGNATURE_OFFSET + 2] != [0x55, 0xAA] {
            return None;
        }
        let partitions = (0..4)
            .filter_map(|i| {
                let offset = MBR_PARTITION_TABLE_OFFSET + i * PARTITION_ENTRY_SIZE;
                PartitionEntry::decode(&sector[offset..offset + PARTITION_ENTRY_SIZE])
            })
            .collect();
        Some(Mbr {
            disk_signature: LittleEndian::read_u32(&sector[MBR_DISK_SIGNATURE_OFFSET..]),
            partitions,
        })
    }
}

/// Partition type byte for the chosen filesystem. Sizes are in 512-byte device sectors.
pub fn partition_type(fs_type: FsType, partition_sectors: u64, total_sectors: u64) -> u8 {
    match fs_type {
        FsType::Fat12 => PARTITION_TYPE_FAT12,
        FsType::Fat16 if partition_sectors < 65536 => PARTITION_TYPE_FAT16_SMALL,
        FsType::Fat16 => PARTITION_TYPE_FAT16,
        FsType::Fat32 if total_sectors - 1 < CHS_LBA_LIMIT => PARTITION_TYPE_FAT32,
        FsType::Fat32 => PARTITION_TYPE_FAT32_LBA,
        FsType::ExFat => PARTITION_TYPE_EXFAT,
    }
}

/// Build the partition entry for `params`, converting logical sectors to device sectors.
pub fn partition_entry(params: &FormatParams, bootable: bool) -> PartitionEntry {
    let ratio = params.sector_ratio();
    let start = params.partition_start() * ratio;
    let total = params.total_sectors * ratio;
    let count = total - start;

    PartitionEntry {
        bootable,
        start_chs: Chs::from_lba(start, params.heads, params.sectors_per_track),
        partition_type: partition_type(params.fs_type, count, total),
        end_chs: Chs::from_lba(total - 1, params.heads, params.sectors_per_track),
        start_lba: start as u32,
        sector_count: count as u32,
    }
}

/// Build a complete MBR for `params` with the given disk signature.
pub fn build_mbr(params: &FormatParams, disk_signature: u32, bootable: bool) -> Mbr {
    Mbr {
        disk_signature,
        partitions: vec![partition_entry(params, bootable)],
    }
}

/// Random disk signature from the OS CSPRNG.
pub fn generate_disk_signature() -> io::Result<u32> {
    let mut bytes = [0u8; 4];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("random source failed: {}", e)))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Write the MBR at offset 0. Returns the disk signature used.
pub fn write_mbr<D: BlockDevice + ?Sized>(
    writer: &mut BufferedWriter<'_, D>,
    params: &FormatParams,
    bootable: bool,
) -> io::Result<u32> {
    let disk_signature = generate_disk_signature()?;
    let mbr = build_mbr(params, disk_signature, bootable);

    writer.fill_and_write(0, &mbr.encode())?;

    let part = &mbr.partitions[0];
    info!(
        "Wrote MBR: type 0x{:02X}, start LBA {}, {} sectors",
        part.partition_type, part.start_lba, part.sector_count
    );
    debug!("Disk signature: 0x{:08X}", disk_signature);
    Ok(disk_signature)
}
