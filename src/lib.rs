//! ytbridge library
//!
//! Translates `info` / `download` requests into yt-dlp invocations and shapes
//! the outcome into a fixed JSON report.

pub mod cli;
pub mod extractor;
pub mod selector;
pub mod service;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{ExtractOptions, Extractor, Format, VideoInfo, YtDlpExtractor};
pub use selector::{build_format_selector, parse_quality_height, OutputFormat, SelectorStrategy};
pub use service::Report;
pub use utils::{AppSettings, BridgeError};
