pub mod file_device;

#[cfg(target_os = "linux")]
pub mod linux;

pub use file_device::FileBlockDevice;
