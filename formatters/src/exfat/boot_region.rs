// exFAT boot region: boot sector, 8 extended boot sectors, OEM parameters,
// a reserved sector and the checksum sector. 12 sectors, written twice.

use super::{checksum, ExFatLayout};
use crate::fat_common::{BOOT_CODE_FILL, BOOT_SIGNATURE, BOOT_SIGNATURE_OFFSET, DRIVE_NUMBER_HDD};
use byteorder::{ByteOrder, LittleEndian};
use uuid::Uuid;

pub const BOOT_REGION_SECTORS: u64 = 12;
pub const EXTENDED_BOOT_SECTORS: u64 = 8;
const CHECKSUMMED_SECTORS: usize = 11;

// Boot sector field offsets
pub const EXFAT_JUMP_BOOT: [u8; 3] = [0xEB, 0x76, 0x90];
pub const EXFAT_FS_NAME: [u8; 8] = *b"EXFAT   ";
pub const BS_PARTITION_OFFSET: usize = 64;
pub const BS_VOLUME_LENGTH: usize = 72;
pub const BS_FAT_OFFSET: usize = 80;
pub const BS_FAT_LENGTH: usize = 84;
pub const BS_CLUSTER_HEAP_OFFSET: usize = 88;
pub const BS_CLUSTER_COUNT: usize = 92;
pub const BS_FIRST_CLUSTER_OF_ROOT: usize = 96;
pub const BS_VOLUME_SERIAL: usize = 100;
pub const BS_FS_REVISION: usize = 104;
pub const BS_VOLUME_FLAGS: usize = 106;
pub const BS_BYTES_PER_SECTOR_SHIFT: usize = 108;
pub const BS_SECTORS_PER_CLUSTER_SHIFT: usize = 109;
pub const BS_NUMBER_OF_FATS: usize = 110;
pub const BS_DRIVE_SELECT: usize = 111;
pub const BS_PERCENT_IN_USE: usize = 112;
pub const BS_BOOT_CODE: usize = 120;

const FS_REVISION_1_00: u16 = 0x0100;
const EXTENDED_BOOT_SIGNATURE: u32 = 0xAA55_0000;

/// Flash parameters GUID {0A0C7E46-3399-4021-90C8-FA6D389C4BA2}
pub const FLASH_PARAMETERS_GUID: u128 = 0x0A0C7E46_3399_4021_90C8_FA6D389C4BA2;
pub const OEM_ERASE_BLOCK_SIZE: usize = 16;

/// Main boot sector
pub fn build_boot_sector(layout: &ExFatLayout, volume_serial: u32) -> Vec<u8> {
    let mut sector = vec![0u8; layout.bytes_per_sector as usize];

    sector[0..3].copy_from_slice(&EXFAT_JUMP_BOOT);
    sector[3..11].copy_from_slice(&EXFAT_FS_NAME);
    // 53 bytes at 11 must be zero

    LittleEndian::write_u64(&mut sector[BS_PARTITION_OFFSET..], layout.partition_offset);
    LittleEndian::write_u64(&mut sector[BS_VOLUME_LENGTH..], layout.volume_length);
    LittleEndian::write_u32(&mut sector[BS_FAT_OFFSET..], layout.fat_offset);
    LittleEndian::write_u32(&mut sector[BS_FAT_LENGTH..], layout.fat_length);
    LittleEndian::write_u32(&mut sector[BS_CLUSTER_HEAP_OFFSET..], layout.cluster_heap_offset);
    LittleEndian::write_u32(&mut sector[BS_CLUSTER_COUNT..], layout.cluster_count);
    LittleEndian::write_u32(&mut sector[BS_FIRST_CLUSTER_OF_ROOT..], layout.root_cluster);
    LittleEndian::write_u32(&mut sector[BS_VOLUME_SERIAL..], volume_serial);
    LittleEndian::write_u16(&mut sector[BS_FS_REVISION..], FS_REVISION_1_00);
    LittleEndian::write_u16(&mut sector[BS_VOLUME_FLAGS..], 0); // First FAT active, clean
    sector[BS_BYTES_PER_SECTOR_SHIFT] = layout.bytes_per_sector.trailing_zeros() as u8;
    sector[BS_SECTORS_PER_CLUSTER_SHIFT] = layout.sectors_per_cluster.trailing_zeros() as u8;
    sector[BS_NUMBER_OF_FATS] = 1;
    sector[BS_DRIVE_SELECT] = DRIVE_NUMBER_HDD;
    sector[BS_PERCENT_IN_USE] = 0;

    sector[BS_BOOT_CODE..BOOT_SIGNATURE_OFFSET].fill(BOOT_CODE_FILL);
    sector[BOOT_SIGNATURE_OFFSET..BOOT_SIGNATURE_OFFSET + 2].copy_from_slice(&BOOT_SIGNATURE);
    sector
}

/// Extended boot sector: empty boot code and the signature in the last 4 bytes
pub fn build_extended_boot_sector(bytes_per_sector: u32) -> Vec<u8> {
    let mut sector = vec![0u8; bytes_per_sector as usize];
    let sig = sector.len() - 4;
    LittleEndian::write_u32(&mut sector[sig..], EXTENDED_BOOT_SIGNATURE);
    sector
}

/// OEM parameters sector holding one flash parameters record
pub fn build_oem_parameters(bytes_per_sector: u32, erase_block_bytes: u32) -> Vec<u8> {
    let mut sector = vec![0u8; bytes_per_sector as usize];
    let guid = Uuid::from_u128(FLASH_PARAMETERS_GUID);
    sector[0..16].copy_from_slice(&guid.to_bytes_le());
    LittleEndian::write_u32(&mut sector[OEM_ERASE_BLOCK_SIZE..], erase_block_bytes);
    // Page size, spare sectors, access times and cycle counts stay 0 (unknown)
    sector
}

/// Boot checksum over the first 11 sectors, skipping VolumeFlags and PercentInUse.
pub fn boot_checksum(region: &[u8], bytes_per_sector: usize) -> u32 {
    region[..bytes_per_sector * CHECKSUMMED_SECTORS]
        .iter()
        .enumerate()
        .filter(|&(i, _)| !matches!(i, BS_VOLUME_FLAGS | 107 | BS_PERCENT_IN_USE))
        .fold(0u32, |sum, (_, &b)| checksum(sum, &[b]))
}

/// Build the complete 12-sector boot region.
pub fn build_boot_region(layout: &ExFatLayout, volume_serial: u32) -> Vec<u8> {
    let bps = layout.bytes_per_sector;
    let mut region = Vec::with_capacity(bps as usize * BOOT_REGION_SECTORS as usize);

    region.extend_from_slice(&build_boot_sector(layout, volume_serial));
    let extended = build_extended_boot_sector(bps);
    for _ in 0..EXTENDED_BOOT_SECTORS {
        region.extend_from_slice(&extended);
    }
    region.extend_from_slice(&build_oem_parameters(bps, layout.erase_block_bytes));
    region.resize(bps as usize * CHECKSUMMED_SECTORS, 0); // Reserved sector

    let sum = boot_checksum(&region, bps as usize);
    for _ in 0..bps / 4 {
        region.extend_from_slice(&sum.to_le_bytes());
    }
    region
}
