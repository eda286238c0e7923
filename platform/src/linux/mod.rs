pub mod device;

pub use device::{block_device_size, discard_range, reread_partition_table};
