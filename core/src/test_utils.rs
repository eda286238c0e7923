/// Test utilities and an in-memory block device for safe testing
use crate::device::{sectors_in_buffer, BlockDevice, SECTOR_SIZE};
use std::io;

/// One recorded call to `write_sectors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub start_sector: u64,
    pub len: usize,
}

/// Memory-backed device - NEVER touches real hardware
///
/// The image grows on write like a sparse file, so a device created with
/// `new(0)` behaves like a freshly created image.
#[derive(Debug, Clone)]
pub struct MemoryDevice {
    pub data: Vec<u8>,
    pub sectors: u64,
    pub regular_file: bool,
    pub discard_supported: bool,
    pub writes: Vec<WriteRecord>,
    pub discards: Vec<bool>,
    pub closed: bool,
    /// Fail every write after this many successful ones.
    pub fail_after_writes: Option<usize>,
}

impl MemoryDevice {
    pub fn new(sectors: u64) -> Self {
        Self {
            data: Vec::new(),
            sectors,
            regular_file: true,
            discard_supported: false,
            writes: Vec::new(),
            discards: Vec::new(),
            closed: false,
            fail_after_writes: None,
        }
    }

    /// Simulates a card reader node rather than an image file.
    pub fn new_block_device(sectors: u64) -> Self {
        Self {
            regular_file: false,
            discard_supported: true,
            ..Self::new(sectors)
        }
    }

    /// Bytes at `offset`, reading unwritten space as zero.
    pub fn bytes(&self, offset: usize, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        if offset < self.data.len() {
            let end = (offset + len).min(self.data.len());
            out[..end - offset].copy_from_slice(&self.data[offset..end]);
        }
        out
    }

    pub fn sector(&self, lba: u64) -> Vec<u8> {
        self.bytes(lba as usize * SECTOR_SIZE, SECTOR_SIZE)
    }

    pub fn was_written(&self) -> bool {
        !self.writes.is_empty()
    }
}

impl BlockDevice for MemoryDevice {
    fn sector_count(&self) -> u64 {
        self.sectors
    }

    fn is_regular_file(&self) -> bool {
        self.regular_file
    }

    fn read_sectors(&mut self, buf: &mut [u8], start_sector: u64) -> io::Result<()> {
        sectors_in_buffer(buf.len())?;
        let data = self.bytes(start_sector as usize * SECTOR_SIZE, buf.len());
        buf.copy_from_slice(&data);
        Ok(())
    }

    fn write_sectors(&mut self, buf: &[u8], start_sector: u64) -> io::Result<()> {
        let count = sectors_in_buffer(buf.len())?;
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::Other, "device is closed"));
        }
        if let Some(limit) = self.fail_after_writes {
            if self.writes.len() >= limit {
                return Err(io::Error::new(io::ErrorKind::Other, "injected write failure"));
            }
        }
        if !self.regular_file && start_sector + count > self.sectors {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "write past end of device"));
        }

        let offset = start_sector as usize * SECTOR_SIZE;
        if self.data.len() < offset + buf.len() {
            self.data.resize(offset + buf.len(), 0);
        }
        self.data[offset..offset + buf.len()].copy_from_slice(buf);
        self.writes.push(WriteRecord { start_sector, len: buf.len() });
        if self.regular_file {
            self.sectors = self.sectors.max(start_sector + count);
        }
        Ok(())
    }

    fn discard_all(&mut self, secure: bool) -> io::Result<()> {
        if !self.discard_supported {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "discard not supported"));
        }
        self.discards.push(secure);
        self.data.clear();
        Ok(())
    }

    fn truncate(&mut self, sectors: u64) -> io::Result<()> {
        if !self.regular_file {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "cannot truncate a block device"));
        }
        self.data.truncate(sectors as usize * SECTOR_SIZE);
        self.sectors = sectors;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}
