//! yt-dlp configuration record
//!
//! `ExtractOptions` collects everything ytbridge tells yt-dlp for a single
//! action and renders it as command-line arguments.

use crate::selector::{build_format_selector, OutputFormat, AUDIO_SELECTOR};
use crate::utils::config::AppSettings;

/// Post-processing step requested from yt-dlp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessor {
    /// Extract the audio track and convert it with ffmpeg
    ExtractAudio { codec: String, quality: String },
}

/// Options for one yt-dlp invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    pub format_selector: Option<String>,
    pub output_template: Option<String>,
    pub http_headers: Vec<(String, String)>,
    pub retries: Option<u32>,
    pub socket_timeout: Option<u32>,
    pub sleep_interval: Option<u32>,
    pub max_sleep_interval: Option<u32>,
    pub extractor_args: Vec<String>,
    pub postprocessors: Vec<PostProcessor>,
    pub merge_output_format: Option<String>,
    pub postprocessor_args: Vec<String>,
}

impl ExtractOptions {
    /// Options for a metadata probe
    pub fn for_info(settings: &AppSettings) -> Self {
        Self {
            http_headers: vec![("User-Agent".to_string(), settings.user_agent.clone())],
            socket_timeout: Some(settings.info_socket_timeout),
            ..Default::default()
        }
    }

    /// Options for downloading `quality`/`format` into `settings.output_dir`
    pub fn for_download(quality: &str, format: &OutputFormat, settings: &AppSettings) -> Self {
        let template = settings.output_dir.join("%(title)s.%(ext)s");

        let mut opts = Self {
            format_selector: Some(build_format_selector(quality, format, settings.strategy)),
            output_template: Some(template.to_string_lossy().into_owned()),
            http_headers: browser_headers(&settings.user_agent),
            retries: Some(settings.retries),
            socket_timeout: Some(settings.socket_timeout),
            sleep_interval: Some(settings.sleep_interval),
            max_sleep_interval: Some(settings.max_sleep_interval),
            extractor_args: vec![format!(
                "youtube:player_client={}",
                settings.player_clients.join(",")
            )],
            ..Default::default()
        };

        if format.is_audio() {
            opts.format_selector = Some(AUDIO_SELECTOR.to_string());
            opts.postprocessors.push(PostProcessor::ExtractAudio {
                codec: format.as_str().to_string(),
                quality: settings.audio_quality.clone(),
            });
        } else if *format == OutputFormat::Mp4 {
            opts.merge_output_format = Some("mp4".to_string());
            opts.postprocessor_args = vec!["-movflags".to_string(), "+faststart".to_string()];
        }

        opts
    }

    /// Render as yt-dlp arguments (URL not included)
    pub fn to_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec!["--quiet".into(), "--no-warnings".into()];

        if let Some(selector) = &self.format_selector {
            args.extend(["-f".into(), selector.clone()]);
        }
        if let Some(template) = &self.output_template {
            args.extend(["-o".into(), template.clone()]);
        }
        for (name, value) in &self.http_headers {
            args.extend(["--add-header".into(), format!("{}:{}", name, value)]);
        }
        if let Some(retries) = self.retries {
            args.extend(["--retries".into(), retries.to_string()]);
        }
        if let Some(timeout) = self.socket_timeout {
            args.extend(["--socket-timeout".into(), timeout.to_string()]);
        }
        if let Some(sleep) = self.sleep_interval {
            args.extend(["--sleep-interval".into(), sleep.to_string()]);
        }
        if let Some(max_sleep) = self.max_sleep_interval {
            args.extend(["--max-sleep-interval".into(), max_sleep.to_string()]);
        }
        for extractor_arg in &self.extractor_args {
            args.extend(["--extractor-args".into(), extractor_arg.clone()]);
        }
        for pp in &self.postprocessors {
            match pp {
                PostProcessor::ExtractAudio { codec, quality } => {
                    args.extend([
                        "-x".into(),
                        "--audio-format".into(),
                        codec.clone(),
                        "--audio-quality".into(),
                        format!("{}K", quality),
                    ]);
                }
            }
        }
        if let Some(container) = &self.merge_output_format {
            args.extend(["--merge-output-format".into(), container.clone()]);
        }
        if !self.postprocessor_args.is_empty() {
            args.extend([
                "--postprocessor-args".into(),
                format!("ffmpeg:{}", self.postprocessor_args.join(" ")),
            ]);
        }

        args
    }
}

fn browser_headers(user_agent: &str) -> Vec<(String, String)> {
    [
        ("User-Agent", user_agent),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Accept-Encoding", "gzip, deflate"),
        ("DNT", "1"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
