// On-disk offsets and values shared by the FAT12/16/32 writers

// BIOS Parameter Block, common to all FAT variants
pub const BS_JMP_BOOT: usize = 0x00;
pub const BS_OEM_NAME: usize = 0x03;
pub const BPB_BYTES_PER_SEC: usize = 0x0B;
pub const BPB_SEC_PER_CLUS: usize = 0x0D;
pub const BPB_RSVD_SEC_CNT: usize = 0x0E;
pub const BPB_NUM_FATS: usize = 0x10;
pub const BPB_ROOT_ENT_CNT: usize = 0x11;
pub const BPB_TOT_SEC16: usize = 0x13;
pub const BPB_MEDIA: usize = 0x15;
pub const BPB_FAT_SZ16: usize = 0x16;
pub const BPB_SEC_PER_TRK: usize = 0x18;
pub const BPB_NUM_HEADS: usize = 0x1A;
pub const BPB_HIDD_SEC: usize = 0x1C;
pub const BPB_TOT_SEC32: usize = 0x20;

// FAT12/16 extended BPB
pub const BS16_DRV_NUM: usize = 0x24;
pub const BS16_BOOT_SIG: usize = 0x26;
pub const BS16_VOL_ID: usize = 0x27;
pub const BS16_VOL_LAB: usize = 0x2B;
pub const BS16_FIL_SYS_TYPE: usize = 0x36;
pub const BS16_BOOT_CODE: usize = 0x3E;

// FAT32 extended BPB
pub const BPB_FAT_SZ32: usize = 0x24;
pub const BPB_EXT_FLAGS: usize = 0x28;
pub const BPB_FS_VER: usize = 0x2A;
pub const BPB_ROOT_CLUS: usize = 0x2C;
pub const BPB_FS_INFO: usize = 0x30;
pub const BPB_BK_BOOT_SEC: usize = 0x32;
pub const BS32_DRV_NUM: usize = 0x40;
pub const BS32_BOOT_SIG: usize = 0x42;
pub const BS32_VOL_ID: usize = 0x43;
pub const BS32_VOL_LAB: usize = 0x47;
pub const BS32_FIL_SYS_TYPE: usize = 0x52;
pub const BS32_BOOT_CODE: usize = 0x5A;

// Boot sector signature
pub const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];
pub const BOOT_SIGNATURE_OFFSET: usize = 0x1FE;

// FSInfo sector
pub const FSI_LEAD_SIG_OFFSET: usize = 0;
pub const FSI_STRUC_SIG_OFFSET: usize = 484;
pub const FSI_FREE_COUNT_OFFSET: usize = 488;
pub const FSI_NXT_FREE_OFFSET: usize = 492;
pub const FSI_TRAIL_SIG_OFFSET: usize = 508;
pub const FSI_LEAD_SIG: u32 = 0x4161_5252;
pub const FSI_STRUC_SIG: u32 = 0x6141_7272;
pub const FSI_TRAIL_SIG: u32 = 0xAA55_0000;
pub const FSI_UNKNOWN: u32 = 0xFFFF_FFFF;

// Extended boot signature and drive number
pub const EXT_BOOT_SIG: u8 = 0x29;
pub const DRIVE_NUMBER_HDD: u8 = 0x80;

/// x86 `hlt`, used to fill boot code areas
pub const BOOT_CODE_FILL: u8 = 0xF4;

pub const OEM_NAME: [u8; 8] = *b"MSWIN4.1";
pub const NO_NAME_LABEL: [u8; 11] = *b"NO NAME    ";

// FAT entry values
pub const FAT32_ENTRY_MASK: u32 = 0x0FFF_FFFF;
pub const FAT32_EOC: u32 = 0x0FFF_FFFF;

// Cluster count limits
pub const FAT12_MAX_CLUSTERS: u64 = 4084;
pub const FAT16_MIN_CLUSTERS: u64 = 4087;
pub const FAT16_MAX_CLUSTERS: u64 = 65524;
pub const FAT32_MIN_CLUSTERS: u64 = 65525;
pub const FAT32_MAX_CLUSTERS: u64 = 0x0FFF_FFF6;

// Standard values
pub const NUM_FATS: u8 = 2;
pub const FAT16_ROOT_ENTRIES: u16 = 512;
pub const DIR_ENTRY_SIZE: usize = 32;
pub const FAT32_ROOT_CLUSTER: u32 = 2;
pub const FAT32_FS_INFO_SECTOR: u16 = 1;
pub const FAT32_BACKUP_BOOT_SECTOR: u16 = 6;
pub const FAT32_MIN_RESERVED: u64 = 9;

/// Fixed disk
pub const MEDIA_FIXED: u8 = 0xF8;

// Directory entry
pub const DIR_ATTR_OFFSET: usize = 11;
pub const ATTR_VOLUME_ID: u8 = 0x08;
