// Integration tests for image-file backed block devices
use sdfmt_core::{BlockDevice, FormatError};
use sdfmt_platform::FileBlockDevice;
use std::io::ErrorKind;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_open_existing_image_reports_size() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(64 * 512).unwrap();

    let dev = FileBlockDevice::open(file.path()).unwrap();
    assert_eq!(dev.sector_count(), 64);
    assert!(dev.is_regular_file());
}

#[test]
fn test_open_creates_missing_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.img");

    let mut dev = FileBlockDevice::open(&path).unwrap();
    assert_eq!(dev.sector_count(), 0);

    dev.truncate(2048).unwrap();
    assert_eq!(dev.sector_count(), 2048);
    dev.close().unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 2048 * 512);
}

#[test]
fn test_write_then_read_back() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(32 * 512).unwrap();
    let mut dev = FileBlockDevice::open(file.path()).unwrap();

    let data: Vec<u8> = (0..1024).map(|i| (i % 251) as u8).collect();
    dev.write_sectors(&data, 7).unwrap();

    let mut back = vec![0u8; 1024];
    dev.read_sectors(&mut back, 7).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_partial_sector_buffers_rejected() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(8 * 512).unwrap();
    let mut dev = FileBlockDevice::open(file.path()).unwrap();

    let err = dev.write_sectors(&[0u8; 300], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_discard_unsupported_on_images() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(8 * 512).unwrap();
    let mut dev = FileBlockDevice::open(file.path()).unwrap();

    assert_eq!(dev.discard_all(false).unwrap_err().kind(), ErrorKind::Unsupported);
    assert_eq!(dev.discard_all(true).unwrap_err().kind(), ErrorKind::Unsupported);
}

#[test]
fn test_close_is_idempotent() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(8 * 512).unwrap();
    let mut dev = FileBlockDevice::open(file.path()).unwrap();

    dev.close().unwrap();
    dev.close().unwrap();
    assert!(dev.write_sectors(&[0u8; 512], 0).is_err());
}

#[test]
fn test_system_drive_refused() {
    match FileBlockDevice::open("/dev/sda") {
        Err(FormatError::DeviceOpenFailed { source, .. }) => {
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("expected DeviceOpenFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_open_existing_never_creates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.img");

    match FileBlockDevice::open_existing(&path) {
        Err(FormatError::DeviceOpenFailed { source, .. }) => {
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("expected DeviceOpenFailed, got {:?}", other.map(|_| ())),
    }
    assert!(!path.exists());
}

#[test]
fn test_open_existing_is_read_only() {
    let file = NamedTempFile::new().unwrap();
    file.as_file().set_len(16 * 512).unwrap();

    let mut dev = FileBlockDevice::open_existing(file.path()).unwrap();
    assert_eq!(dev.sector_count(), 16);
    assert!(dev.write_sectors(&[0xAA; 512], 0).is_err());
}
