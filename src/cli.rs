//! Command-line surface
//!
//! `ytbridge info <url>` and `ytbridge download <url> [quality] [format]`.
//! Argument errors are reported as JSON too, with exit code 1.

use crate::extractor::YtDlpExtractor;
use crate::selector::SelectorStrategy;
use crate::service::{self, Report, DEFAULT_FORMAT, DEFAULT_QUALITY};
use crate::utils::config::AppSettings;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "ytbridge", version, about = "Fetch video metadata or downloads through yt-dlp, reported as JSON")]
pub struct Cli {
    /// Directory downloads are written to
    #[arg(long, global = true, env = "YTBRIDGE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// yt-dlp executable to use instead of auto-detection
    #[arg(long, global = true, env = "YTBRIDGE_YTDLP")]
    pub ytdlp_path: Option<PathBuf>,

    /// Format-selector heuristic: codec or simple
    #[arg(long, global = true, env = "YTBRIDGE_SELECTOR_STRATEGY")]
    pub strategy: Option<SelectorStrategy>,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Action {
    /// Print title, duration, channel and available qualities
    Info { url: String },

    /// Download the video
    Download {
        url: String,
        /// best, 2160p, 1440p, 1080p, 720p, 480p or 360p
        quality: Option<String>,
        /// mp4, webm, mp3 or m4a
        format: Option<String>,
    },
}

impl Cli {
    pub fn settings(&self) -> AppSettings {
        AppSettings::default().with_overrides(
            self.output_dir.clone(),
            self.ytdlp_path.clone(),
            self.strategy,
        )
    }
}

/// What to do with a command line that failed to parse
#[derive(Debug)]
pub enum ParseFailure {
    /// `--help` / `--version`: let clap print it, exit 0
    Informational(clap::Error),
    /// Print this JSON, exit 1
    Usage(Report),
}

/// Map clap errors onto ytbridge's JSON error contract
pub fn classify_parse_error(err: clap::Error) -> ParseFailure {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseFailure::Informational(err),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::MissingRequiredArgument => {
            ParseFailure::Usage(Report::usage_error("Missing arguments"))
        }
        ErrorKind::InvalidSubcommand => ParseFailure::Usage(Report::usage_error("Invalid action")),
        _ => {
            let rendered = err.to_string();
            let first_line = rendered
                .lines()
                .next()
                .unwrap_or("Invalid arguments")
                .trim_start_matches("error: ")
                .to_string();
            ParseFailure::Usage(Report::usage_error(first_line))
        }
    }
}

/// Run a parsed action to completion
pub async fn run(action: &Action, settings: &AppSettings) -> Report {
    let extractor = match YtDlpExtractor::from_settings(settings) {
        Ok(extractor) => extractor,
        Err(e) => {
            let context = match action {
                Action::Info { .. } => "Failed to get video info",
                Action::Download { .. } => "Download failed",
            };
            return Report::failure(context, e);
        }
    };
    debug!("Using yt-dlp at {}", extractor.ytdlp_path().display());

    match action {
        Action::Info { url } => service::fetch_info(&extractor, url, settings).await,
        Action::Download {
            url,
            quality,
            format,
        } => {
            let quality = quality.as_deref().unwrap_or(DEFAULT_QUALITY);
            let format = format.as_deref().unwrap_or(DEFAULT_FORMAT);
            service::download(&extractor, url, quality, format, settings).await
        }
    }
}

/// Parse `args`, run the action and print the JSON result
pub fn main_with_args<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match classify_parse_error(err) {
                ParseFailure::Informational(err) => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                ParseFailure::Usage(report) => {
                    println!("{}", report.to_json());
                    ExitCode::FAILURE
                }
            };
        }
    };

    let settings = cli.settings();
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            println!("{}", Report::usage_error(e).to_json());
            return ExitCode::FAILURE;
        }
    };

    let report = runtime.block_on(run(&cli.action, &settings));
    println!("{}", report.to_json());
    ExitCode::SUCCESS
}
