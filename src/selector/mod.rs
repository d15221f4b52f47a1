pub mod format_selector;
pub mod quality;

pub use format_selector::{build_format_selector, OutputFormat, SelectorStrategy, AUDIO_SELECTOR};
pub use quality::{parse_quality_height, BEST_HEIGHT, DEFAULT_HEIGHT, QUALITY_MAP};
