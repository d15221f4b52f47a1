//! yt-dlp wrapper for video extraction
//!
//! This module runs yt-dlp as a child process. It supports a yt-dlp placed next
//! to the executable, one on PATH, and the usual install locations.

use crate::extractor::models::VideoInfo;
use crate::extractor::options::ExtractOptions;
use crate::extractor::traits::Extractor;
use crate::utils::config::AppSettings;
use crate::utils::error::BridgeError;
use crate::utils::paths::{expand_home, is_executable};
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Extractor backed by the yt-dlp executable
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize extractor and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. Next to the current executable
    /// 2. System PATH
    /// 3. Common installation paths (Homebrew, pip --user, etc.)
    pub fn new() -> Result<Self, BridgeError> {
        match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(BridgeError::YtDlpNotFound)
            }
        }
    }

    /// Use the configured binary if one is set, otherwise search for it
    pub fn from_settings(settings: &AppSettings) -> Result<Self, BridgeError> {
        match &settings.ytdlp_path {
            Some(path) => {
                let path = expand_home(&path.to_string_lossy());
                debug!("Using configured yt-dlp: {}", path.display());
                Ok(Self::with_path(path))
            }
            None => Self::new(),
        }
    }

    /// Use an explicit yt-dlp binary
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: path.into(),
        }
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }

    async fn run(&self, args: &[String]) -> Result<Output, BridgeError> {
        debug!("Running {} {:?}", self.ytdlp_path.display(), args);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BridgeError::YtDlpNotFound
                } else {
                    BridgeError::Io(e)
                }
            })?;

        Ok(output)
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Uses: yt-dlp --dump-single-json --skip-download
    async fn probe(&self, url: &str, opts: &ExtractOptions) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let mut args = vec![
            "--dump-single-json".to_string(),
            "--skip-download".to_string(),
        ];
        args.extend(opts.to_args());
        push_url(&mut args, url);

        let output = self.run(&args).await?;
        if !output.status.success() {
            let error_msg = stderr_message(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(BridgeError::ExtractionFailed(error_msg).into());
        }

        let json_str = String::from_utf8(output.stdout).map_err(BridgeError::from)?;
        if json_str.trim().is_empty() || json_str.trim() == "null" {
            return Err(BridgeError::EmptyProbe.into());
        }
        let video_info: VideoInfo = serde_json::from_str(&json_str).map_err(BridgeError::from)?;

        Ok(video_info)
    }

    /// Uses: yt-dlp --no-simulate --print after_move:filepath
    async fn download(&self, url: &str, opts: &ExtractOptions) -> Result<Vec<PathBuf>> {
        info!("Downloading {}", url);

        let mut args = vec![
            "--no-simulate".to_string(),
            "--print".to_string(),
            "after_move:filepath".to_string(),
        ];
        args.extend(opts.to_args());
        push_url(&mut args, url);

        let output = self.run(&args).await?;
        if !output.status.success() {
            let error_msg = stderr_message(&output.stderr);
            error!("yt-dlp download failed: {}", error_msg);
            return Err(BridgeError::DownloadFailed(error_msg).into());
        }

        Ok(parse_printed_paths(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Append the URL after `--` so IDs starting with `-` are never read as options
fn push_url(args: &mut Vec<String>, url: &str) {
    args.push("--".to_string());
    args.push(url.to_string());
}

/// Paths printed by `--print after_move:filepath`, one per line
pub fn parse_printed_paths(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "NA")
        .map(PathBuf::from)
        .collect()
}

/// Reduce yt-dlp's stderr to the message worth reporting.
///
/// Prefers the last `ERROR:` line without its prefix, else the trimmed output.
pub fn stderr_message(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);

    let last_error = text
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with("ERROR:"));

    match last_error {
        Some(line) => line.trim_start_matches("ERROR:").trim().to_string(),
        None => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                "yt-dlp exited with an error".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. Next to the executable
/// 2. System PATH
/// 3. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(bundled) = find_bundled_ytdlp() {
        info!("✓ Using bundled yt-dlp: {:?}", bundled);
        return Some(bundled);
    }

    if let Some(system) = find_in_path() {
        info!("✓ Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("✓ Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("✗ yt-dlp not found anywhere!");
    None
}

fn find_bundled_ytdlp() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    let candidate = exe_dir.join(binary_name());
    debug!("Checking bundled path: {:?}", candidate);
    if is_executable(&candidate) {
        return Some(candidate);
    }

    None
}

fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
        // Python.org installation
        "/Library/Frameworks/Python.framework/Versions/Current/bin/yt-dlp",
        // pip --user / pipx
        "~/.local/bin/yt-dlp",
    ];

    common_paths
        .iter()
        .map(|p| expand_home(p))
        .find(|path| is_executable(path))
}

fn binary_name() -> &'static str {
    if cfg!(windows) {
        "yt-dlp.exe"
    } else {
        "yt-dlp"
    }
}

// ============================================================
// Tests
// ============================================================
