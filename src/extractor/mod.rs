pub mod models;
pub mod options;
pub mod traits;
pub mod ytdlp;

pub use models::{Format, VideoInfo};
pub use options::{ExtractOptions, PostProcessor};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
