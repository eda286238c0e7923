// SD card formatter: parameter calculation and on-disk structure writers

pub mod buffered_writer;
pub mod exfat;
pub mod fat;
pub mod fat_common;
pub mod format;
pub mod label;
pub mod params;
pub mod partitioner;

pub use buffered_writer::BufferedWriter;
pub use format::{format_device, FormatReport};
pub use label::{ExFatLabel, FatLabel, Label};
pub use params::{calculate_format_params, FormatParams, FsType, Layout};
pub use partitioner::{Mbr, PartitionEntry};
