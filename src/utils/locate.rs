//! Locating the file yt-dlp produced
//!
//! yt-dlp normally reports the final path itself (`--print after_move:filepath`).
//! When it does not, the output directory is scanned: first for a file whose
//! name contains the video title, then for the most recently modified entry.

use crate::utils::error::BridgeError;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Title as it appears in a yt-dlp filename (`/` is not allowed in names)
pub fn title_fragment(title: &str) -> String {
    title.replace('/', "_")
}

/// Pick the downloaded file.
///
/// `reported` are the paths yt-dlp printed; the first one that exists wins.
pub fn locate_download(
    output_dir: &Path,
    title: &str,
    reported: &[PathBuf],
) -> Result<PathBuf, BridgeError> {
    if let Some(path) = reported.iter().find(|p| p.is_file()) {
        debug!("yt-dlp reported output file: {}", path.display());
        return Ok(path.clone());
    }
    if !reported.is_empty() {
        warn!("yt-dlp reported paths that do not exist: {:?}", reported);
    }

    if let Some(path) = find_by_title(output_dir, title)? {
        debug!("Matched output file by title: {}", path.display());
        return Ok(path);
    }

    match most_recent_entry(output_dir)? {
        Some(path) => {
            warn!(
                "No file matched title {:?}, falling back to newest entry {}",
                title,
                path.display()
            );
            Ok(path)
        }
        None => Err(BridgeError::FileNotFound),
    }
}

fn find_by_title(dir: &Path, title: &str) -> Result<Option<PathBuf>, BridgeError> {
    let fragment = title_fragment(title);
    let mut entries = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect::<Vec<_>>();
    entries.sort();

    Ok(entries.into_iter().find(|path| {
        path.is_file()
            && path
                .file_name()
                .map(|name| name.to_string_lossy().contains(&fragment))
                .unwrap_or(false)
    }))
}

fn most_recent_entry(dir: &Path) -> Result<Option<PathBuf>, BridgeError> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(dir)?.filter_map(|e| e.ok()) {
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => continue,
        };
        if newest.as_ref().map_or(true, |(t, _)| modified > *t) {
            newest = Some((modified, entry.path()));
        }
    }

    Ok(newest.map(|(_, path)| path))
}
