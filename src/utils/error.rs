//! Error handling for ytbridge

use thiserror::Error;

/// Main error type for ytbridge
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("{0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    DownloadFailed(String),

    #[error("Failed to extract video information")]
    EmptyProbe,

    #[error("Downloaded file not found")]
    FileNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid UTF-8 in yt-dlp output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
