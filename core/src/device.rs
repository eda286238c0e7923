use std::io;

/// Device I/O is always addressed in 512-byte units, independent of the
/// logical sector size a filesystem chooses.
pub const SECTOR_SIZE: usize = 512;

/// Sector-addressed access to a block device or disk image.
///
/// Buffers passed to `read_sectors`/`write_sectors` must be a multiple of
/// [`SECTOR_SIZE`] long. `discard_all` reports an unsupported device through
/// `io::ErrorKind::Unsupported` so callers can treat it as non-fatal.
pub trait BlockDevice {
    /// Size in 512-byte sectors. A freshly created image reports 0.
    fn sector_count(&self) -> u64;

    fn is_regular_file(&self) -> bool;

    fn read_sectors(&mut self, buf: &mut [u8], start_sector: u64) -> io::Result<()>;

    fn write_sectors(&mut self, buf: &[u8], start_sector: u64) -> io::Result<()>;

    fn discard_all(&mut self, secure: bool) -> io::Result<()>;

    /// Resize the backing file. Only valid for regular files.
    fn truncate(&mut self, sectors: u64) -> io::Result<()>;

    /// Flush to stable storage and release the device. Calling it twice is a no-op.
    fn close(&mut self) -> io::Result<()>;
}

/// Number of whole sectors in a buffer, or `InvalidInput` if it is not sector sized.
pub fn sectors_in_buffer(len: usize) -> io::Result<u64> {
    if len % SECTOR_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("buffer length {} is not a multiple of {}", len, SECTOR_SIZE),
        ));
    }
    Ok((len / SECTOR_SIZE) as u64)
}

impl<D: BlockDevice + ?Sized> BlockDevice for &mut D {
    fn sector_count(&self) -> u64 {
        (**self).sector_count()
    }

    fn is_regular_file(&self) -> bool {
        (**self).is_regular_file()
    }

    fn read_sectors(&mut self, buf: &mut [u8], start_sector: u64) -> io::Result<()> {
        (**self).read_sectors(buf, start_sector)
    }

    fn write_sectors(&mut self, buf: &[u8], start_sector: u64) -> io::Result<()> {
        (**self).write_sectors(buf, start_sector)
    }

    fn discard_all(&mut self, secure: bool) -> io::Result<()> {
        (**self).discard_all(secure)
    }

    fn truncate(&mut self, sectors: u64) -> io::Result<()> {
        (**self).truncate(sectors)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
