// Linux block device ioctls
// Only meaningful on device nodes; callers route regular files elsewhere.

use log::debug;
use nix::errno::Errno;
use std::fs::File;
use std::io;
use std::os::unix::io::AsRawFd;

mod ioctls {
    use nix::{ioctl_none, ioctl_read, ioctl_write_ptr_bad, request_code_none};

    // <linux/fs.h>
    ioctl_none!(blkrrpart, 0x12, 95);
    ioctl_read!(blkgetsize64, 0x12, 114, u64);
    ioctl_write_ptr_bad!(blkdiscard, request_code_none!(0x12, 119), [u64; 2]);
    ioctl_write_ptr_bad!(blksecdiscard, request_code_none!(0x12, 125), [u64; 2]);
}

fn errno_to_io(err: Errno, what: &str) -> io::Error {
    match err {
        Errno::EOPNOTSUPP => io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{} not supported by device", what),
        ),
        other => io::Error::new(io::Error::from(other).kind(), format!("{}: {}", what, other)),
    }
}

/// Device size in bytes (BLKGETSIZE64).
pub fn block_device_size(file: &File) -> io::Result<u64> {
    let mut size: u64 = 0;
    // SAFETY: the fd is open for the lifetime of `file` and `size` is a valid u64 out-pointer.
    unsafe { ioctls::blkgetsize64(file.as_raw_fd(), &mut size) }
        .map_err(|e| errno_to_io(e, "BLKGETSIZE64"))?;
    Ok(size)
}

/// Discard `len` bytes starting at byte `offset`.
pub fn discard_range(file: &File, offset: u64, len: u64, secure: bool) -> io::Result<()> {
    let range: [u64; 2] = [offset, len];
    debug!("Discarding {} bytes at {} (secure: {})", len, offset, secure);

    // SAFETY: both requests read a [u64; 2] range from the pointer and nothing else.
    let res = unsafe {
        if secure {
            ioctls::blksecdiscard(file.as_raw_fd(), &range)
        } else {
            ioctls::blkdiscard(file.as_raw_fd(), &range)
        }
    };
    res.map(|_| ())
        .map_err(|e| errno_to_io(e, if secure { "BLKSECDISCARD" } else { "BLKDISCARD" }))
}

/// Ask the kernel to re-read the partition table (BLKRRPART).
pub fn reread_partition_table(file: &File) -> io::Result<()> {
    // SAFETY: BLKRRPART takes no argument.
    unsafe { ioctls::blkrrpart(file.as_raw_fd()) }
        .map(|_| ())
        .map_err(|e| errno_to_io(e, "BLKRRPART"))
}
