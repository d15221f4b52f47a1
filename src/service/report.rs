//! JSON result shapes
//!
//! Every invocation prints exactly one of these objects on stdout. Field names
//! are part of the interface consumed by callers; do not rename them.

use crate::extractor::models::VideoInfo;
use serde::Serialize;

const UNKNOWN: &str = "Unknown";

/// Result of `info`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoReport {
    pub success: bool,
    pub title: String,
    pub thumbnail: String,
    pub duration: u64,
    pub views: u64,
    pub channel: String,
    pub upload_date: String,
    pub available_qualities: Vec<String>,
    pub available_formats: Vec<String>,
}

/// Result of `download`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadReport {
    pub success: bool,
    pub filename: String,
    pub filepath: String,
    pub title: String,
    pub duration: u64,
    pub format: String,
    pub quality: String,
}

/// Any failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Info(InfoReport),
    Download(DownloadReport),
    Failure(FailureReport),
}

impl Report {
    pub fn info(video: &VideoInfo) -> Self {
        Report::Info(InfoReport {
            success: true,
            title: video.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            thumbnail: video.thumbnail.clone().unwrap_or_default(),
            duration: video.duration_secs(),
            views: video.view_count.unwrap_or(0),
            channel: video.uploader.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            upload_date: video
                .upload_date
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            available_qualities: video.available_qualities(),
            available_formats: video.available_formats(),
        })
    }

    /// Failure of an action; `context` prefixes the human-readable message
    pub fn failure(context: &str, error: impl ToString) -> Self {
        let error = error.to_string();
        Report::Failure(FailureReport {
            success: false,
            message: Some(format!("{}: {}", context, error)),
            error,
        })
    }

    /// Failure before any action ran (bad command line)
    pub fn usage_error(error: impl ToString) -> Self {
        Report::Failure(FailureReport {
            success: false,
            error: error.to_string(),
            message: None,
        })
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Report::Failure(_))
    }

    /// Single-line JSON for stdout
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // keep stdout parseable
            Err(e) => format!(
                r#"{{"success":false,"error":{}}}"#,
                serde_json::Value::String(e.to_string())
            ),
        }
    }
}
