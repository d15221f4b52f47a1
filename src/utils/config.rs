//! Application configuration

use crate::selector::SelectorStrategy;
use crate::utils::paths::default_output_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Desktop Chrome user agent sent with every yt-dlp request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory downloads are written to
    pub output_dir: PathBuf,

    /// Explicit yt-dlp binary; auto-detected when unset
    pub ytdlp_path: Option<PathBuf>,

    /// Which format-selector heuristic to use
    pub strategy: SelectorStrategy,

    /// User-Agent header
    pub user_agent: String,

    /// Retry attempts handed to yt-dlp
    pub retries: u32,

    /// Socket timeout for downloads (seconds)
    pub socket_timeout: u32,

    /// Socket timeout for metadata probes (seconds)
    pub info_socket_timeout: u32,

    /// Minimum sleep between downloads (seconds)
    pub sleep_interval: u32,

    /// Maximum sleep between downloads (seconds)
    pub max_sleep_interval: u32,

    /// YouTube player clients, tried in order
    pub player_clients: Vec<String>,

    /// Bitrate for audio extraction (kbps)
    pub audio_quality: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            ytdlp_path: None,
            strategy: SelectorStrategy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retries: 3,
            socket_timeout: 30,
            info_socket_timeout: 15,
            sleep_interval: 2,
            max_sleep_interval: 5,
            player_clients: vec!["android".to_string(), "web".to_string()],
            audio_quality: "192".to_string(),
        }
    }
}

impl AppSettings {
    /// Apply overrides coming from the command line or environment
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        ytdlp_path: Option<PathBuf>,
        strategy: Option<SelectorStrategy>,
    ) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if ytdlp_path.is_some() {
            self.ytdlp_path = ytdlp_path;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self
    }
}
