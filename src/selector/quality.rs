//! Quality string parsing

/// Height used for `"best"`: larger than any real stream
pub const BEST_HEIGHT: u32 = 9999;

/// Height used when the quality string is not recognised
pub const DEFAULT_HEIGHT: u32 = 720;

/// Supported quality labels and the maximum frame height they stand for
pub const QUALITY_MAP: [(&str, u32); 6] = [
    ("2160p", 2160),
    ("1440p", 1440),
    ("1080p", 1080),
    ("720p", 720),
    ("480p", 480),
    ("360p", 360),
];

/// Convert a quality label into a height cap.
///
/// ```
/// use ytbridge::selector::parse_quality_height;
/// assert_eq!(parse_quality_height("best"), 9999);
/// assert_eq!(parse_quality_height("1080p"), 1080);
/// assert_eq!(parse_quality_height("ultra"), 720);
/// ```
pub fn parse_quality_height(quality: &str) -> u32 {
    if quality == "best" {
        return BEST_HEIGHT;
    }
    QUALITY_MAP
        .iter()
        .find(|(label, _)| *label == quality)
        .map(|(_, height)| *height)
        .unwrap_or(DEFAULT_HEIGHT)
}
