use std::io;
use thiserror::Error;

/// Custom error type for the systrack application
#[derive(Error, Debug)]
pub enum SysTrackError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Battery probe error: {0}")]
    Battery(#[from] battery::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for the systrack application
pub type Result<T> = std::result::Result<T, SysTrackError>;

impl SysTrackError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SysTrackError::InvalidInput(msg.into())
    }

    /// Create a metric collection error
    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        SysTrackError::MetricCollection(msg.into())
    }
}
