// Block device access for card readers and disk images
// Regular files are treated as images: they can be created, truncated and never discarded.

use log::{debug, info, warn};
use sdfmt_core::device::sectors_in_buffer;
use sdfmt_core::{BlockDevice, FormatError, SECTOR_SIZE};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Largest single read/write issued to the OS.
const MAX_CHUNK: usize = 1024 * 1024 * 1024;

/// Paths refused outright since they are almost always the system disk.
const PROTECTED_PREFIXES: &[&str] = &["/dev/sda"];

pub struct FileBlockDevice {
    path: PathBuf,
    file: Option<File>,
    sectors: u64,
    regular_file: bool,
    dirty: bool,
}

impl FileBlockDevice {
    /// Open a device node or image file for writing. Missing images are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        Self::open_with(path.as_ref(), true)
    }

    /// Open an existing device node or image file without write access.
    /// Used for dry runs, so a mistyped path never leaves a new file behind.
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        Self::open_with(path.as_ref(), false)
    }

    fn open_with(path: &Path, writable: bool) -> Result<Self, FormatError> {
        let open_failed = |source: io::Error| FormatError::DeviceOpenFailed {
            path: path.display().to_string(),
            source,
        };

        let path_str = path.to_string_lossy();
        if PROTECTED_PREFIXES.iter().any(|p| path_str.starts_with(p)) {
            return Err(open_failed(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "refusing to format what is likely the system drive",
            )));
        }

        let file = OpenOptions::new()
            .read(true)
            .write(writable)
            .create(writable)
            .open(path)
            .map_err(open_failed)?;

        let metadata = file.metadata().map_err(open_failed)?;
        let regular_file = metadata.is_file();
        let size_bytes = if regular_file {
            metadata.len()
        } else {
            Self::device_size(&file).map_err(open_failed)?
        };
        let sectors = size_bytes / SECTOR_SIZE as u64;

        info!(
            "Opened {} ({}, {} sectors)",
            path.display(),
            if regular_file { "image file" } else { "block device" },
            sectors
        );

        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            sectors,
            regular_file,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(target_os = "linux")]
    fn device_size(file: &File) -> io::Result<u64> {
        crate::linux::block_device_size(file)
    }

    #[cfg(not(target_os = "linux"))]
    fn device_size(file: &File) -> io::Result<u64> {
        let mut file = file;
        file.seek(SeekFrom::End(0))
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "device already closed"))
    }

    fn check_range(&self, start_sector: u64, count: u64) -> io::Result<()> {
        // Images grow on write; device nodes have a hard end.
        if !self.regular_file && start_sector.saturating_add(count) > self.sectors {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "access to sectors {}..{} beyond end of device ({} sectors)",
                    start_sector,
                    start_sector + count,
                    self.sectors
                ),
            ));
        }
        Ok(())
    }
}

impl BlockDevice for FileBlockDevice {
    fn sector_count(&self) -> u64 {
        self.sectors
    }

    fn is_regular_file(&self) -> bool {
        self.regular_file
    }

    fn read_sectors(&mut self, buf: &mut [u8], start_sector: u64) -> io::Result<()> {
        let count = sectors_in_buffer(buf.len())?;
        self.check_range(start_sector, count)?;

        let file = self.file()?;
        file.seek(SeekFrom::Start(start_sector * SECTOR_SIZE as u64))?;
        for chunk in buf.chunks_mut(MAX_CHUNK) {
            file.read_exact(chunk)?;
        }
        Ok(())
    }

    fn write_sectors(&mut self, buf: &[u8], start_sector: u64) -> io::Result<()> {
        let count = sectors_in_buffer(buf.len())?;
        self.check_range(start_sector, count)?;

        let file = self.file()?;
        file.seek(SeekFrom::Start(start_sector * SECTOR_SIZE as u64))?;
        for chunk in buf.chunks(MAX_CHUNK) {
            file.write_all(chunk)?;
        }

        self.dirty = true;
        if self.regular_file {
            self.sectors = self.sectors.max(start_sector + count);
        }
        Ok(())
    }

    fn discard_all(&mut self, secure: bool) -> io::Result<()> {
        if self.regular_file {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "discard is not supported on image files",
            ));
        }
        let len = self.sectors * SECTOR_SIZE as u64;

        #[cfg(target_os = "linux")]
        {
            let file = self.file()?;
            crate::linux::discard_range(file, 0, len, secure)?;
            self.dirty = true;
            Ok(())
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = (len, secure);
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "discard is not supported on this platform",
            ))
        }
    }

    fn truncate(&mut self, sectors: u64) -> io::Result<()> {
        if !self.regular_file {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "only image files can be truncated",
            ));
        }
        self.file()?.set_len(sectors * SECTOR_SIZE as u64)?;
        debug!("Truncated {} to {} sectors", self.path.display(), sectors);
        self.sectors = sectors;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => return Ok(()),
        };

        file.sync_all()?;

        #[cfg(target_os = "linux")]
        if self.dirty && !self.regular_file {
            // A busy device (mounted partition) refuses the rescan; the data is already synced.
            if let Err(e) = crate::linux::reread_partition_table(&file) {
                warn!("Partition table re-read failed on {}: {}", self.path.display(), e);
            }
        }

        debug!("Closed {}", self.path.display());
        Ok(())
    }
}

impl Drop for FileBlockDevice {
    fn drop(&mut self) {
        if self.file.is_some() {
            if let Err(e) = self.close() {
                warn!("Failed to close {}: {}", self.path.display(), e);
            }
        }
    }
}
