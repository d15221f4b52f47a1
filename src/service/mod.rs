//! Action orchestration
//!
//! Both actions are infallible from the caller's point of view: every error
//! is folded into a failure `Report`.

pub mod report;

pub use report::{DownloadReport, FailureReport, InfoReport, Report};

use crate::extractor::{ExtractOptions, Extractor};
use crate::selector::OutputFormat;
use crate::utils::config::AppSettings;
use crate::utils::error::BridgeError;
use crate::utils::locate::locate_download;
use anyhow::Result;
use tracing::{debug, info, warn};

pub const DEFAULT_QUALITY: &str = "best";
pub const DEFAULT_FORMAT: &str = "mp4";

/// Fetch metadata for `url`
pub async fn fetch_info(extractor: &dyn Extractor, url: &str, settings: &AppSettings) -> Report {
    match try_fetch_info(extractor, url, settings).await {
        Ok(report) => report,
        Err(e) => {
            warn!("info failed for {}: {:#}", url, e);
            Report::failure("Failed to get video info", e)
        }
    }
}

async fn try_fetch_info(
    extractor: &dyn Extractor,
    url: &str,
    settings: &AppSettings,
) -> Result<Report> {
    let opts = ExtractOptions::for_info(settings);
    let video = extractor.probe(url, &opts).await?;
    debug!("Probed {:?} via {}", video.title, extractor.id());
    Ok(Report::info(&video))
}

/// Download `url` at `quality` into `settings.output_dir`
pub async fn download(
    extractor: &dyn Extractor,
    url: &str,
    quality: &str,
    format: &str,
    settings: &AppSettings,
) -> Report {
    match try_download(extractor, url, quality, format, settings).await {
        Ok(report) => report,
        Err(e) => {
            warn!("download failed for {}: {:#}", url, e);
            Report::failure("Download failed", e)
        }
    }
}

async fn try_download(
    extractor: &dyn Extractor,
    url: &str,
    quality: &str,
    format: &str,
    settings: &AppSettings,
) -> Result<Report> {
    tokio::fs::create_dir_all(&settings.output_dir)
        .await
        .map_err(BridgeError::from)?;

    let output_format = OutputFormat::parse(format);
    let opts = ExtractOptions::for_download(quality, &output_format, settings);
    debug!("Format selector: {:?}", opts.format_selector);

    let video = extractor.probe(url, &opts).await?;
    let title = video.title.clone().unwrap_or_else(|| "Unknown".to_string());
    let duration = video.duration_secs();

    info!("Downloading {:?} ({}s) as {} {}", title, duration, quality, format);
    let reported = extractor.download(url, &opts).await?;

    let path = locate_download(&settings.output_dir, &title, &reported)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Report::Download(DownloadReport {
        success: true,
        filename,
        filepath: path.to_string_lossy().into_owned(),
        title,
        duration,
        format: format.to_string(),
        quality: quality.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::VideoInfo;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Scripted extractor that records the options it was given
    struct FakeExtractor {
        video: Option<VideoInfo>,
        write_file: Option<String>,
        report_path: bool,
        fail_download: Option<String>,
        seen: Mutex<Vec<ExtractOptions>>,
    }

    impl FakeExtractor {
        fn new(title: &str) -> Self {
            Self {
                video: Some(VideoInfo {
                    title: Some(title.to_string()),
                    duration: Some(125.0),
                    ..Default::default()
                }),
                write_file: Some(format!("{}.mp4", title.replace('/', "_"))),
                report_path: true,
                fail_download: None,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Extractor for FakeExtractor {
        fn id(&self) -> &'static str {
            "fake"
        }

        async fn probe(&self, _url: &str, opts: &ExtractOptions) -> Result<VideoInfo> {
            self.seen.lock().unwrap().push(opts.clone());
            self.video
                .clone()
                .ok_or_else(|| BridgeError::ExtractionFailed("Private video".to_string()).into())
        }

        async fn download(&self, _url: &str, opts: &ExtractOptions) -> Result<Vec<PathBuf>> {
            if let Some(msg) = &self.fail_download {
                return Err(BridgeError::DownloadFailed(msg.clone()).into());
            }
            let template = PathBuf::from(opts.output_template.clone().unwrap());
            let dir = template.parent().unwrap().to_path_buf();
            let mut reported = Vec::new();
            if let Some(name) = &self.write_file {
                let path = dir.join(name);
                std::fs::write(&path, b"data")?;
                if self.report_path {
                    reported.push(path);
                }
            }
            Ok(reported)
        }
    }

    fn settings_in(dir: &std::path::Path) -> AppSettings {
        AppSettings {
            output_dir: dir.join("out"),
            ..Default::default()
        }
    }

    fn json(report: &Report) -> Value {
        serde_json::from_str(&report.to_json()).unwrap()
    }

    #[tokio::test]
    async fn test_info_success() {
        let extractor = FakeExtractor::new("Clip");
        let report = fetch_info(&extractor, "https://example.com/v", &AppSettings::default()).await;
        let value = json(&report);
        assert_eq!(value["success"], true);
        assert_eq!(value["title"], "Clip");
        assert_eq!(value["duration"], 125);

        let seen = extractor.seen.lock().unwrap();
        assert_eq!(seen[0].socket_timeout, Some(15));
        assert!(seen[0].format_selector.is_none());
    }

    #[tokio::test]
    async fn test_info_failure_is_reported() {
        let mut extractor = FakeExtractor::new("Clip");
        extractor.video = None;
        let report = fetch_info(&extractor, "https://example.com/v", &AppSettings::default()).await;
        let value = json(&report);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Private video");
        assert_eq!(value["message"], "Failed to get video info: Private video");
    }

    #[tokio::test]
    async fn test_download_uses_reported_path() {
        let tmp = tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let extractor = FakeExtractor::new("Clip");

        let report = download(&extractor, "https://example.com/v", "1080p", "mp4", &settings).await;
        let value = json(&report);
        assert_eq!(value["success"], true, "{}", value);
        assert_eq!(value["filename"], "Clip.mp4");
        assert_eq!(
            value["filepath"],
            settings.output_dir.join("Clip.mp4").to_string_lossy().to_string()
        );
        assert_eq!(value["quality"], "1080p");
        assert_eq!(value["format"], "mp4");
        assert_eq!(value["duration"], 125);

        let seen = extractor.seen.lock().unwrap();
        assert!(seen[0]
            .format_selector
            .as_deref()
            .unwrap()
            .starts_with("bestvideo[height<=1080][vcodec^=avc1]"));
    }

    #[tokio::test]
    async fn test_download_falls_back_to_title_match() {
        let tmp = tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let mut extractor = FakeExtractor::new("AC/DC Live");
        extractor.report_path = false;

        let report = download(&extractor, "https://example.com/v", "best", "mp4", &settings).await;
        assert_eq!(json(&report)["filename"], "AC_DC Live.mp4");
    }

    #[tokio::test]
    async fn test_download_with_no_file_fails() {
        let tmp = tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let mut extractor = FakeExtractor::new("Clip");
        extractor.write_file = None;

        let report = download(&extractor, "https://example.com/v", "best", "mp4", &settings).await;
        let value = json(&report);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Downloaded file not found");
        assert_eq!(value["message"], "Download failed: Downloaded file not found");
    }

    #[tokio::test]
    async fn test_download_error_is_reported() {
        let tmp = tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let mut extractor = FakeExtractor::new("Clip");
        extractor.fail_download = Some("HTTP Error 403: Forbidden".to_string());

        let report = download(&extractor, "https://example.com/v", "720p", "webm", &settings).await;
        assert_eq!(json(&report)["message"], "Download failed: HTTP Error 403: Forbidden");
    }

    #[tokio::test]
    async fn test_download_audio_switches_selector() {
        let tmp = tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let extractor = FakeExtractor::new("Song");

        let report = download(&extractor, "https://example.com/v", "720p", "m4a", &settings).await;
        assert!(report.is_success());
        let seen = extractor.seen.lock().unwrap();
        assert_eq!(seen[0].format_selector.as_deref(), Some("bestaudio/best"));
    }
}
