use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to open device {path}: {source}")]
    DeviceOpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Device too small: {sectors} sectors (minimum {minimum})")]
    DeviceTooSmall { sectors: u64, minimum: u64 },

    #[error("Format parameters infeasible: {0}")]
    FormatParamsInfeasible(String),

    #[error("Failed to erase device: {0}")]
    EraseFailed(#[source] io::Error),

    #[error("Failed to write partition table: {0}")]
    PartitionWriteFailed(#[source] io::Error),

    #[error("Failed to write filesystem: {0}")]
    FilesystemWriteFailed(#[source] io::Error),

    #[error("Failed to close device: {0}")]
    DeviceCloseFailed(#[source] io::Error),
}

impl FormatError {
    /// Process exit code for this failure. Anything outside the taxonomy exits with 9.
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatError::InvalidArgument(_) => 1,
            FormatError::DeviceOpenFailed { .. } => 2,
            FormatError::DeviceTooSmall { .. } => 3,
            FormatError::EraseFailed(_) => 4,
            FormatError::FormatParamsInfeasible(_) => 5,
            FormatError::PartitionWriteFailed(_) => 6,
            FormatError::FilesystemWriteFailed(_) => 7,
            FormatError::DeviceCloseFailed(_) => 8,
        }
    }

    pub fn infeasible(msg: impl Into<String>) -> Self {
        FormatError::FormatParamsInfeasible(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            FormatError::InvalidArgument("x".into()),
            FormatError::DeviceOpenFailed {
                path: "/dev/null".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            FormatError::DeviceTooSmall { sectors: 1, minimum: 128 },
            FormatError::EraseFailed(io::Error::from(io::ErrorKind::Other)),
            FormatError::infeasible("x"),
            FormatError::PartitionWriteFailed(io::Error::from(io::ErrorKind::Other)),
            FormatError::FilesystemWriteFailed(io::Error::from(io::ErrorKind::Other)),
            FormatError::DeviceCloseFailed(io::Error::from(io::ErrorKind::Other)),
        ];
        let codes: Vec<i32> = errors.iter().map(FormatError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error as _;
        let err = FormatError::FilesystemWriteFailed(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk gone"));
    }
}
