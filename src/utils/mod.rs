//! Utility modules for error handling, configuration and paths

pub mod config;
pub mod error;
pub mod locate;
pub mod paths;

// Re-export for convenience
pub use config::{AppSettings, DEFAULT_USER_AGENT};
pub use error::BridgeError;
pub use locate::locate_download;
pub use paths::{default_output_dir, expand_home, is_executable};
