// Sequential writer that coalesces small writes into large aligned device blocks
// Only suitable for overwriting (reformatting): gaps are zero-filled, never read back.

use log::{error, trace};
use sdfmt_core::{BlockDevice, SECTOR_SIZE};
use std::io;

/// Size of one buffered block. Must be a power of two larger than a sector.
pub const BLOCK_SIZE: usize = 4 * 1024 * 1024;
const BLOCK_MASK: u64 = BLOCK_SIZE as u64 - 1;

const _: () = assert!(BLOCK_SIZE > SECTOR_SIZE && BLOCK_SIZE.is_power_of_two());

/// Buffered writer with a monotonic byte cursor.
///
/// Every write issued to the device starts on a `BLOCK_SIZE` boundary. A
/// block is written when it fills; the trailing partial block is written by
/// [`BufferedWriter::finish`], padded with zeros to the next 512-byte sector.
///
/// Dropping a writer with unflushed data loses that data. `finish` must be
/// called and its result checked.
pub struct BufferedWriter<'d, D: BlockDevice + ?Sized> {
    device: &'d mut D,
    buf: Vec<u8>,
    pos: u64,
    finished: bool,
}

impl<'d, D: BlockDevice + ?Sized> BufferedWriter<'d, D> {
    pub fn new(device: &'d mut D) -> Self {
        Self {
            device,
            buf: vec![0u8; BLOCK_SIZE],
            pos: 0,
            finished: false,
        }
    }

    /// Current write position in bytes.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Zero-fill from the cursor up to `offset`.
    pub fn fill(&mut self, offset: u64) -> io::Result<()> {
        if offset < self.pos {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot fill backwards from {} to {}", self.pos, offset),
            ));
        }

        while self.pos < offset {
            let in_block = (self.pos & BLOCK_MASK) as usize;
            let n = (BLOCK_SIZE - in_block).min((offset - self.pos) as usize);
            self.buf[in_block..in_block + n].fill(0);
            self.advance(n)?;
        }
        Ok(())
    }

    /// Append `data` at the cursor.
    pub fn write(&mut self, mut data: &[u8]) -> io::Result<()> {
        while !data.is_empty() {
            let in_block = (self.pos & BLOCK_MASK) as usize;

            if in_block == 0 && data.len() >= BLOCK_SIZE {
                // Whole blocks go straight from the caller's buffer.
                let n = data.len() - data.len() % BLOCK_SIZE;
                self.device
                    .write_sectors(&data[..n], self.pos / SECTOR_SIZE as u64)?;
                trace!("Wrote {} bytes directly at {}", n, self.pos);
                self.pos += n as u64;
                data = &data[n..];
                continue;
            }

            let n = (BLOCK_SIZE - in_block).min(data.len());
            self.buf[in_block..in_block + n].copy_from_slice(&data[..n]);
            data = &data[n..];
            self.advance(n)?;
        }
        Ok(())
    }

    /// Zero-fill up to `offset`, then write `data` there.
    pub fn fill_and_write(&mut self, offset: u64, data: &[u8]) -> io::Result<()> {
        self.fill(offset)?;
        self.write(data)
    }

    /// Flush the trailing partial block and return the final cursor.
    pub fn finish(mut self) -> io::Result<u64> {
        let used = (self.pos & BLOCK_MASK) as usize;
        if used > 0 {
            let padded = used.div_ceil(SECTOR_SIZE) * SECTOR_SIZE;
            self.buf[used..padded].fill(0);
            let start = (self.pos - used as u64) / SECTOR_SIZE as u64;
            self.device.write_sectors(&self.buf[..padded], start)?;
            trace!("Flushed final {} bytes at sector {}", padded, start);
        }
        self.finished = true;
        Ok(self.pos)
    }

    fn advance(&mut self, n: usize) -> io::Result<()> {
        self.pos += n as u64;
        if self.pos & BLOCK_MASK == 0 {
            let start = (self.pos - BLOCK_SIZE as u64) / SECTOR_SIZE as u64;
            self.device.write_sectors(&self.buf, start)?;
            trace!("Flushed block at sector {}", start);
        }
        Ok(())
    }
}

impl<D: BlockDevice + ?Sized> Drop for BufferedWriter<'_, D> {
    fn drop(&mut self) {
        let pending = self.pos & BLOCK_MASK;
        if !self.finished && pending > 0 {
            error!(
                "Buffered writer dropped with {} unflushed bytes at offset {}",
                pending,
                self.pos - pending
            );
        }
    }
}
