//! Path resolution helpers
//!
//! Downloads land in `<temp>/downloads` unless overridden, which is
//! `/tmp/downloads` on Unix systems.

use std::path::{Path, PathBuf};

/// Returns the default download directory: `<system temp>/downloads`
pub fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("downloads")
}

/// Expand a leading `~/` to the user's home directory.
///
/// Paths without the prefix, or systems without a home directory, are
/// returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

/// Check if a file is executable
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.is_file() && metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
