use crate::extractor::models::VideoInfo;
use crate::extractor::options::ExtractOptions;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Core trait for video extractors
///
/// The service layer only talks to this trait, so tests can drive it with a
/// scripted stand-in instead of a real yt-dlp binary.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "ytdlp")
    fn id(&self) -> &'static str;

    /// Extracts video information without downloading
    async fn probe(&self, url: &str, opts: &ExtractOptions) -> Result<VideoInfo>;

    /// Downloads the video and returns the final file paths it reported
    ///
    /// The list may be empty when the backend does not report paths.
    async fn download(&self, url: &str, opts: &ExtractOptions) -> Result<Vec<PathBuf>>;
}
