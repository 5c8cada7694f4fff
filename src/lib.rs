// SysTrack Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SysTrackError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::system_info::types::SystemSnapshot;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
