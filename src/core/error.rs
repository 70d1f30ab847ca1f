//! Error types for the logging subsystem

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    /// A raw rank outside the five defined severities was given to `set_level_rank`
    #[error("Invalid log level rank: {rank} (valid ranks are 0..=4)")]
    InvalidLevel { rank: u8 },

    /// An empty or blank module name was given to `for_module`
    #[error("Invalid module name: must be non-empty")]
    InvalidModuleName,

    /// The process-wide logging context was initialized more than once
    #[error("Logging context already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create an invalid level error for the given rank
    pub fn invalid_level(rank: u8) -> Self {
        LoggerError::InvalidLevel { rank }
    }
}
