pub mod device;
pub mod error;
pub mod options;
pub mod test_utils;

pub use device::{BlockDevice, SECTOR_SIZE};
pub use error::FormatError;
pub use options::{Diagnostics, EraseMode, FormatOptions};
