//! ytbridge - yt-dlp bridge with JSON output
//!
//! `ytbridge info <url>` / `ytbridge download <url> [quality] [format]`

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the JSON result, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    ytbridge::cli::main_with_args(std::env::args_os())
}
