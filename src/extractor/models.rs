//! Data structures for video information

use serde::{Deserialize, Serialize};

/// Shown when a video exposes no heights at all
pub const FALLBACK_QUALITIES: [&str; 3] = ["720p", "480p", "360p"];

/// Shown when a video exposes no extensions at all
pub const FALLBACK_FORMATS: [&str; 4] = ["mp4", "webm", "mp3", "m4a"];

/// Video information as dumped by `yt-dlp --dump-single-json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub webpage_url: String,
    #[serde(default)]
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    pub upload_date: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
    pub view_count: Option<u64>,
    pub extractor: Option<String>,
}

/// Video format information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub format_id: String,
    pub ext: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub tbr: Option<f32>, // Total bitrate
}

impl VideoInfo {
    /// Duration in whole seconds, 0 when unknown
    pub fn duration_secs(&self) -> u64 {
        self.duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d as u64)
            .unwrap_or(0)
    }

    /// Distinct `"{height}p"` labels, tallest first
    pub fn available_qualities(&self) -> Vec<String> {
        let mut heights: Vec<u32> = self
            .formats
            .iter()
            .filter_map(|f| f.height)
            .filter(|h| *h > 0)
            .collect();
        heights.sort_unstable_by(|a, b| b.cmp(a));
        heights.dedup();

        if heights.is_empty() {
            return FALLBACK_QUALITIES.iter().map(|q| q.to_string()).collect();
        }
        heights.into_iter().map(|h| format!("{}p", h)).collect()
    }

    /// Distinct extensions in the order yt-dlp listed them
    pub fn available_formats(&self) -> Vec<String> {
        let mut exts: Vec<String> = Vec::new();
        for ext in self.formats.iter().filter_map(|f| f.ext.as_deref()) {
            if !ext.is_empty() && !exts.iter().any(|e| e == ext) {
                exts.push(ext.to_string());
            }
        }

        if exts.is_empty() {
            return FALLBACK_FORMATS.iter().map(|f| f.to_string()).collect();
        }
        exts
    }
}
