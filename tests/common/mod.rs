//! Shared helpers: a scripted stand-in for the yt-dlp executable.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Script creation and execution are serialized to avoid ETXTBSY when a
/// sibling test forks while a freshly written script is still open.
static SCRIPT_LOCK: Mutex<()> = Mutex::new(());

pub fn lock() -> MutexGuard<'static, ()> {
    SCRIPT_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub const SAMPLE_DUMP: &str = r#"{
  "id": "abc123",
  "title": "Sample Video",
  "webpage_url": "https://www.youtube.com/watch?v=abc123",
  "thumbnail": "https://i.ytimg.com/vi/abc123/maxresdefault.jpg",
  "duration": 95.4,
  "view_count": 1234,
  "uploader": "Sample Channel",
  "upload_date": "20240315",
  "extractor": "youtube",
  "formats": [
    {"format_id": "140", "ext": "m4a", "vcodec": "none", "acodec": "mp4a.40.2"},
    {"format_id": "18", "ext": "mp4", "height": 360, "width": 640},
    {"format_id": "247", "ext": "webm", "height": 720, "width": 1280},
    {"format_id": "137", "ext": "mp4", "height": 1080, "width": 1920}
  ]
}"#;

/// yt-dlp stand-in that answers probes with `SAMPLE_DUMP`, and on download
/// writes `<dir of -o>/Sample Video.mp4`. Every invocation's arguments are
/// appended to `args.log` next to the script.
///
/// With `print_path` unset the script stays silent on download, like a
/// yt-dlp build that ignores `--print`.
#[cfg(unix)]
pub fn fake_ytdlp(dir: &Path, print_path: bool) -> PathBuf {
    let log = dir.join("args.log");
    let print_line = if print_path {
        r#"echo "$outdir/Sample Video.mp4""#
    } else {
        ":"
    };
    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" >> "{log}"
echo "----" >> "{log}"
for a in "$@"; do
  if [ "$a" = "--dump-single-json" ]; then
    cat <<'JSON'
{dump}
JSON
    exit 0
  fi
done
prev=""
out=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
done
outdir=$(dirname "$out")
printf 'data' > "$outdir/Sample Video.mp4"
{print_line}
"#,
        log = log.display(),
        dump = SAMPLE_DUMP,
        print_line = print_line,
    );
    write_script(dir, "yt-dlp", &script)
}

/// yt-dlp stand-in that always fails the way yt-dlp does
#[cfg(unix)]
pub fn failing_ytdlp(dir: &Path) -> PathBuf {
    let script = r#"#!/bin/sh
echo "WARNING: [youtube] falling back to web client" >&2
echo "ERROR: [youtube] abc123: Video unavailable. This video is private" >&2
exit 1
"#;
    write_script(dir, "yt-dlp-failing", script)
}

/// yt-dlp stand-in that exits 0 with `stdout` as its only output, logging
/// its arguments like `fake_ytdlp`
#[cfg(unix)]
pub fn silent_ytdlp(dir: &Path, stdout: &str) -> PathBuf {
    let log = dir.join("args.log");
    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" >> "{log}"
echo "----" >> "{log}"
printf '%s' '{stdout}'
"#,
        log = log.display(),
        stdout = stdout,
    );
    write_script(dir, "yt-dlp-silent", &script)
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

/// Argument lists of every recorded invocation
pub fn recorded_invocations(dir: &Path) -> Vec<Vec<String>> {
    let log = fs::read_to_string(dir.join("args.log")).unwrap_or_default();
    log.split("----\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| chunk.lines().map(str::to_string).collect())
        .collect()
}
