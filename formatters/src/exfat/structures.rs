// exFAT directory entries written into the root directory of a new volume

use byteorder::{ByteOrder, LittleEndian};

pub const DIR_ENTRY_SIZE: usize = 32;

// Entry type definitions
pub const EXFAT_ENTRY_BITMAP: u8 = 0x81;
pub const EXFAT_ENTRY_UPCASE: u8 = 0x82;
pub const EXFAT_ENTRY_VOLUME_LABEL: u8 = 0x83;

// Shared offsets of the allocation bitmap and up-case entries
const ENTRY_FIRST_CLUSTER: usize = 20;
const ENTRY_DATA_LENGTH: usize = 24;
const UPCASE_TABLE_CHECKSUM: usize = 4;
const LABEL_CHARACTER_COUNT: usize = 1;
const LABEL_TEXT: usize = 2;

/// Volume label entry. An empty label has a character count of 0.
pub fn volume_label_entry(units: &[u16]) -> [u8; DIR_ENTRY_SIZE] {
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[0] = EXFAT_ENTRY_VOLUME_LABEL;
    entry[LABEL_CHARACTER_COUNT] = units.len() as u8;
    for (i, &unit) in units.iter().take(11).enumerate() {
        LittleEndian::write_u16(&mut entry[LABEL_TEXT + i * 2..], unit);
    }
    entry
}

/// Allocation bitmap entry for the first (only) bitmap
pub fn bitmap_entry(first_cluster: u32, length: u64) -> [u8; DIR_ENTRY_SIZE] {
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[0] = EXFAT_ENTRY_BITMAP;
    // BitmapFlags bit 0 = 0: first allocation bitmap
    LittleEndian::write_u32(&mut entry[ENTRY_FIRST_CLUSTER..], first_cluster);
    LittleEndian::write_u64(&mut entry[ENTRY_DATA_LENGTH..], length);
    entry
}

pub fn upcase_entry(table_checksum: u32, first_cluster: u32, length: u64) -> [u8; DIR_ENTRY_SIZE] {
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[0] = EXFAT_ENTRY_UPCASE;
    LittleEndian::write_u32(&mut entry[UPCASE_TABLE_CHECKSUM..], table_checksum);
    LittleEndian::write_u32(&mut entry[ENTRY_FIRST_CLUSTER..], first_cluster);
    LittleEndian::write_u64(&mut entry[ENTRY_DATA_LENGTH..], length);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_entry() {
        let units: Vec<u16> = "Fotos".encode_utf16().collect();
        let entry = volume_label_entry(&units);
        assert_eq!(entry[0], 0x83);
        assert_eq!(entry[1], 5);
        assert_eq!(&entry[2..12], &[b'F', 0, b'o', 0, b't', 0, b'o', 0, b's', 0]);
        assert!(entry[12..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_label_entry() {
        let entry = volume_label_entry(&[]);
        assert_eq!(entry[0], 0x83);
        assert!(entry[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bitmap_and_upcase_entries() {
        let bitmap = bitmap_entry(2, 65504);
        assert_eq!(bitmap[0], 0x81);
        assert_eq!(bitmap[1], 0);
        assert_eq!(LittleEndian::read_u32(&bitmap[20..]), 2);
        assert_eq!(LittleEndian::read_u64(&bitmap[24..]), 65504);

        let upcase = upcase_entry(0xE619_D30D, 3, 5836);
        assert_eq!(upcase[0], 0x82);
        assert_eq!(LittleEndian::read_u32(&upcase[4..]), 0xE619_D30D);
        assert_eq!(LittleEndian::read_u32(&upcase[20..]), 3);
        assert_eq!(LittleEndian::read_u64(&upcase[24..]), 5836);
    }
}
