// Boot sector builder for FAT filesystems
// Handles common BPB fields and provides specialized builders for FAT12/16 and FAT32

use super::constants::*;
use byteorder::{ByteOrder, LittleEndian};

/// Common FAT boot sector parameters
#[derive(Debug, Clone)]
pub struct FatBootSectorParams {
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub root_entries: u16,
    /// Sectors in the partition.
    pub total_sectors: u32,
    pub media_descriptor: u8,
    pub sectors_per_fat: u32,
    pub sectors_per_track: u16,
    pub num_heads: u16,
    pub hidden_sectors: u32,
    pub volume_serial: u32,
    pub volume_label: [u8; 11],
}

fn write_common_bpb(sector: &mut [u8], params: &FatBootSectorParams, jump: [u8; 3]) {
    sector[BS_JMP_BOOT..BS_JMP_BOOT + 3].copy_from_slice(&jump);
    sector[BS_OEM_NAME..BS_OEM_NAME + 8].copy_from_slice(&OEM_NAME);

    LittleEndian::write_u16(&mut sector[BPB_BYTES_PER_SEC..], params.bytes_per_sector);
    sector[BPB_SEC_PER_CLUS] = params.sectors_per_cluster;
    LittleEndian::write_u16(&mut sector[BPB_RSVD_SEC_CNT..], params.reserved_sectors);
    sector[BPB_NUM_FATS] = NUM_FATS;
    LittleEndian::write_u16(&mut sector[BPB_ROOT_ENT_CNT..], params.root_entries);
    sector[BPB_MEDIA] = params.media_descriptor;
    LittleEndian::write_u16(&mut sector[BPB_SEC_PER_TRK..], params.sectors_per_track);
    LittleEndian::write_u16(&mut sector[BPB_NUM_HEADS..], params.num_heads);
    LittleEndian::write_u32(&mut sector[BPB_HIDD_SEC..], params.hidden_sectors);

    sector[BOOT_SIGNATURE_OFFSET..BOOT_SIGNATURE_OFFSET + 2].copy_from_slice(&BOOT_SIGNATURE);
}

/// Build a FAT12 or FAT16 boot sector. `fs_type` is the 8-byte informational type string.
pub fn build_fat16_boot_sector(params: &FatBootSectorParams, fs_type: &[u8; 8]) -> Vec<u8> {
    let mut sector = vec![0u8; params.bytes_per_sector as usize];
    write_common_bpb(&mut sector, params, [0xEB, 0x3C, 0x90]);

    // Whichever total field fits; the other stays zero.
    if params.total_sectors <= 0xFFFF {
        LittleEndian::write_u16(&mut sector[BPB_TOT_SEC16..], params.total_sectors as u16);
    } else {
        LittleEndian::write_u32(&mut sector[BPB_TOT_SEC32..], params.total_sectors);
    }
    LittleEndian::write_u16(&mut sector[BPB_FAT_SZ16..], params.sectors_per_fat as u16);

    sector[BS16_DRV_NUM] = DRIVE_NUMBER_HDD;
    sector[BS16_BOOT_SIG] = EXT_BOOT_SIG;
    LittleEndian::write_u32(&mut sector[BS16_VOL_ID..], params.volume_serial);
    sector[BS16_VOL_LAB..BS16_VOL_LAB + 11].copy_from_slice(&params.volume_label);
    sector[BS16_FIL_SYS_TYPE..BS16_FIL_SYS_TYPE + 8].copy_from_slice(fs_type);
    sector[BS16_BOOT_CODE..BOOT_SIGNATURE_OFFSET].fill(BOOT_CODE_FILL);

    sector
}

/// Build a FAT32 boot sector
pub fn build_fat32_boot_sector(params: &FatBootSectorParams) -> Vec<u8> {
    let mut sector = vec![0u8; params.bytes_per_sector as usize];
    write_common_bpb(&mut sector, params, [0xEB, 0x58, 0x90]);

    // Root entries, 16-bit total and 16-bit FAT size are always 0 for FAT32
    LittleEndian::write_u32(&mut sector[BPB_TOT_SEC32..], params.total_sectors);
    LittleEndian::write_u32(&mut sector[BPB_FAT_SZ32..], params.sectors_per_fat);
    LittleEndian::write_u16(&mut sector[BPB_EXT_FLAGS..], 0); // Mirroring enabled
    LittleEndian::write_u16(&mut sector[BPB_FS_VER..], 0);
    LittleEndian::write_u32(&mut sector[BPB_ROOT_CLUS..], FAT32_ROOT_CLUSTER);
    LittleEndian::write_u16(&mut sector[BPB_FS_INFO..], FAT32_FS_INFO_SECTOR);
    LittleEndian::write_u16(&mut sector[BPB_BK_BOOT_SEC..], FAT32_BACKUP_BOOT_SECTOR);

    sector[BS32_DRV_NUM] = DRIVE_NUMBER_HDD;
    sector[BS32_BOOT_SIG] = EXT_BOOT_SIG;
    LittleEndian::write_u32(&mut sector[BS32_VOL_ID..], params.volume_serial);
    sector[BS32_VOL_LAB..BS32_VOL_LAB + 11].copy_from_slice(&params.volume_label);
    sector[BS32_FIL_SYS_TYPE..BS32_FIL_SYS_TYPE + 8].copy_from_slice(b"FAT32   ");
    sector[BS32_BOOT_CODE..BOOT_SIGNATURE_OFFSET].fill(BOOT_CODE_FILL);

    sector
}

/// Build a FAT32 FSInfo sector
pub fn build_fsinfo_sector(bytes_per_sector: u16, free_count: u32, next_free: u32) -> Vec<u8> {
    let mut sector = vec![0u8; bytes_per_sector as usize];
    LittleEndian::write_u32(&mut sector[FSI_LEAD_SIG_OFFSET..], FSI_LEAD_SIG);
    LittleEndian::write_u32(&mut sector[FSI_STRUC_SIG_OFFSET..], FSI_STRUC_SIG);
    LittleEndian::write_u32(&mut sector[FSI_FREE_COUNT_OFFSET..], free_count);
    LittleEndian::write_u32(&mut sector[FSI_NXT_FREE_OFFSET..], next_free);
    LittleEndian::write_u32(&mut sector[FSI_TRAIL_SIG_OFFSET..], FSI_TRAIL_SIG);
    sector
}

/// Third boot sector of the FAT32 boot record. Holds nothing but the signature word.
pub fn build_sentinel_sector(bytes_per_sector: u16) -> Vec<u8> {
    let mut sector = vec![0u8; bytes_per_sector as usize];
    sector[BOOT_SIGNATURE_OFFSET..BOOT_SIGNATURE_OFFSET + 2].copy_from_slice(&BOOT_SIGNATURE);
    sector
}
