// MBR layout and partition entry tests
use super::*;
use crate::params::calculate_format_params;
use sdfmt_core::test_utils::MemoryDevice;
use sdfmt_core::Diagnostics;

const GIB: u64 = 2 * 1024 * 1024;

fn params(sectors: u64, force_fat32: bool, big_clusters: bool) -> FormatParams {
    calculate_format_params(sectors, force_fat32, big_clusters, &mut Diagnostics::new()).unwrap()
}

#[test]
fn test_chs_small_lba() {
    let chs = Chs::from_lba(63, 8, 32);
    assert_eq!(chs, Chs { cylinder: 0, head: 1, sector: 32 });
    assert_eq!(chs.encode(), [1, 32, 0]);
}

#[test]
fn test_chs_high_cylinder_bits() {
    let chs = Chs::from_lba(131071, 8, 32);
    assert_eq!(chs, Chs { cylinder: 511, head: 7, sector: 32 });
    // Cylinder bits 8-9 live in the top of the sector byte
    assert_eq!(chs.encode(), [7, 0x60, 0xFF]);
    assert_eq!(Chs::decode(chs.encode()), chs);
}

#[test]
fn test_chs_clamps_beyond_1024_cylinders() {
    let chs = Chs::from_lba(16_777_215, 255, 63);
    assert_eq!(chs, Chs::MAX);
    assert_eq!(chs.encode(), [0xFE, 0xFF, 0xFF]);

    // Last addressable cylinder is still encoded
    let last = Chs::from_lba(1023 * 255 * 63, 255, 63);
    assert_eq!(last.cylinder, 1023);
    assert_eq!(last.head, 0);
    assert_eq!(last.sector, 1);
}

#[test]
fn test_partition_types() {
    assert_eq!(partition_type(FsType::Fat12, 16000, 16384), 0x01);
    assert_eq!(partition_type(FsType::Fat16, 65535, 70000), 0x04);
    assert_eq!(partition_type(FsType::Fat16, 65536, 70000), 0x06);
    assert_eq!(partition_type(FsType::Fat32, 1, CHS_LBA_LIMIT), 0x0B);
    assert_eq!(partition_type(FsType::Fat32, 1, CHS_LBA_LIMIT + 1), 0x0C);
    assert_eq!(partition_type(FsType::ExFat, 1, 1 << 30), 0x07);
}

#[test]
fn test_fat16_card_mbr() {
    let p = params(131072, false, false);
    let mbr = build_mbr(&p, 0xDEAD_BEEF, false);
    let sector = mbr.encode();

    assert_eq!(&sector[510..512], &[0x55, 0xAA]);
    assert_eq!(&sector[440..444], &[0xEF, 0xBE, 0xAD, 0xDE]);

    let entry = &sector[446..462];
    assert_eq!(entry[0], 0x00);
    assert_eq!(entry[4], 0x06);
    assert_eq!(&entry[1..4], &[1, 32, 0]);
    assert_eq!(&entry[5..8], &[7, 0x60, 0xFF]);
    assert_eq!(LittleEndian::read_u32(&entry[8..12]), 63);
    assert_eq!(LittleEndian::read_u32(&entry[12..16]), 131072 - 63);

    // Remaining entries are empty
    assert!(sector[462..510].iter().all(|&b| b == 0));
}

#[test]
fn test_fat32_card_uses_lba_type_and_clamped_end() {
    let p = params(8 * GIB, true, false);
    let part = partition_entry(&p, false);
    assert_eq!(part.partition_type, 0x0C);
    assert_eq!(part.start_lba, 8192);
    assert_eq!(part.sector_count, 16_777_216 - 8192);
    assert_eq!(part.start_chs, Chs { cylinder: 0, head: 130, sector: 3 });
    assert_eq!(part.end_chs, Chs::MAX);
}

#[test]
fn test_exfat_card_type() {
    let p = params(64 * GIB, false, false);
    let part = partition_entry(&p, false);
    assert_eq!(part.partition_type, 0x07);
    assert_eq!(part.start_lba, 32768);
    assert_eq!(part.sector_count as u64, 64 * GIB - 32768);
}

#[test]
fn test_large_logical_sectors_are_converted_to_device_sectors() {
    let p = params(64 * GIB, true, true);
    assert_eq!(p.bytes_per_sector, 1024);
    let part = partition_entry(&p, false);
    assert_eq!(part.start_lba as u64, p.partition_start() * 2);
    assert_eq!(part.sector_count as u64, 64 * GIB - p.partition_start() * 2);
}

#[test]
fn test_bootable_flag() {
    let p = params(131072, false, false);
    let sector = build_mbr(&p, 1, true).encode();
    assert_eq!(sector[446], 0x80);
}

#[test]
fn test_decode_round_trip() {
    let p = params(8 * GIB, true, false);
    let mbr = build_mbr(&p, 0x1234_5678, false);
    let decoded = Mbr::decode(&mbr.encode()).unwrap();
    assert_eq!(decoded, mbr);
}

#[test]
fn test_decode_rejects_missing_signature() {
    let mut sector = build_mbr(&params(131072, false, false), 7, false).encode();
    sector[511] = 0;
    assert!(Mbr::decode(&sector).is_none());
    assert!(Mbr::decode(&[0u8; 100]).is_none());
}

#[test]
fn test_write_mbr_through_buffered_writer() {
    let p = params(131072, false, false);
    let mut dev = MemoryDevice::new_block_device(131072);
    let signature = {
        let mut w = BufferedWriter::new(&mut dev);
        let signature = write_mbr(&mut w, &p, false).unwrap();
        w.finish().unwrap();
        signature
    };

    let mbr = Mbr::decode(&dev.sector(0)).unwrap();
    assert_eq!(mbr.disk_signature, signature);
    assert_eq!(mbr.partitions.len(), 1);
    assert_eq!(mbr.partitions[0].start_lba, 63);
}
