//! yt-dlp `-f` expression construction
//!
//! Two heuristics are available. `Codec` asks for H.264/AAC when merging MP4
//! at 1080p and above, and prefers progressive files below that. `Simple`
//! caps height and lets yt-dlp pick anything.

use super::quality::parse_quality_height;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector used for audio-only targets
pub const AUDIO_SELECTOR: &str = "bestaudio/best";

/// Container or audio codec requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Mp4,
    Webm,
    Mp3,
    M4a,
    Other(String),
}

impl OutputFormat {
    /// Parse the format argument (case-sensitive)
    pub fn parse(value: &str) -> Self {
        match value {
            "mp4" => OutputFormat::Mp4,
            "webm" => OutputFormat::Webm,
            "mp3" => OutputFormat::Mp3,
            "m4a" => OutputFormat::M4a,
            other => OutputFormat::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Webm => "webm",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::M4a => "m4a",
            OutputFormat::Other(s) => s,
        }
    }

    /// Whether yt-dlp should extract audio instead of keeping video
    pub fn is_audio(&self) -> bool {
        matches!(self, OutputFormat::Mp3 | OutputFormat::M4a)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-selector heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStrategy {
    /// Codec-constrained selectors with progressive preference below 1080p
    #[default]
    Codec,
    /// Height cap only
    Simple,
}

impl FromStr for SelectorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "codec" => Ok(SelectorStrategy::Codec),
            "simple" => Ok(SelectorStrategy::Simple),
            other => Err(format!("unknown selector strategy: {}", other)),
        }
    }
}

/// Build the yt-dlp format selector for a quality label and output format.
///
/// Never fails: unknown qualities cap at 720p, unknown formats get the
/// generic video+audio selector.
pub fn build_format_selector(
    quality: &str,
    format: &OutputFormat,
    strategy: SelectorStrategy,
) -> String {
    let height = parse_quality_height(quality);

    match strategy {
        SelectorStrategy::Codec => codec_selector(height, format),
        SelectorStrategy::Simple => format!(
            "bv*[height<={h}]+ba/b[height<={h}]/bv*+ba/best",
            h = height
        ),
    }
}

fn codec_selector(height: u32, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Mp4 if height >= 1080 => format!(
            "bestvideo[height<={h}][vcodec^=avc1][ext=mp4]+bestaudio[acodec^=mp4a][ext=m4a]/\
             bestvideo[height<={h}][ext=mp4]+bestaudio[ext=m4a]/\
             bestvideo[height<={h}]+bestaudio/\
             best[height<={h}]",
            h = height
        ),
        OutputFormat::Mp4 => format!(
            "best[height<={h}][ext=mp4]/\
             bestvideo[height<={h}][vcodec^=avc1][ext=mp4]+bestaudio[acodec^=mp4a]/\
             best[height<={h}]",
            h = height
        ),
        OutputFormat::Webm => format!(
            "bestvideo[height<={h}][ext=webm]+bestaudio[ext=webm]/\
             bestvideo[height<={h}]+bestaudio/\
             best[height<={h}]",
            h = height
        ),
        _ => format!(
            "bestvideo[height<={h}]+bestaudio/best[height<={h}]",
            h = height
        ),
    }
}
