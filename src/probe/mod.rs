//! Source duration probing via FFmpeg diagnostic output
//!
//! FFmpeg prints container metadata on stderr when invoked with an input and
//! no output, then exits non-zero. The prober runs it exactly that way,
//! ignores the exit status, and scans the text for the `Duration:` marker.
//! Probing never fails hard: any spawn or parse problem yields `None`, and
//! the range resolver decides whether absence is fatal.

use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Duration:\s*(\d+):(\d+):(\d+(?:\.\d+)?)").expect("invalid duration regex")
});

/// Scan FFmpeg diagnostic text for the first `Duration: H:MM:SS(.frac)`
/// marker and convert it to seconds.
pub fn parse_duration_output(text: &str) -> Option<f64> {
    let caps = DURATION_RE.captures(text)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Run FFmpeg in inspect mode against `input` and extract the total
/// duration in seconds. Returns `None` if the process could not be spawned
/// or its output carries no duration marker.
pub fn probe_duration(ffmpeg: &Path, input: &Path) -> Option<f64> {
    debug!("Probing duration: {}", input.display());

    let output = Command::new(ffmpeg)
        .arg("-hide_banner")
        .arg("-i")
        .arg(input)
        .output()
        .ok()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let duration = parse_duration_output(&stderr);

    match duration {
        Some(seconds) => debug!("Probed duration: {seconds:.3}s"),
        None => debug!("No duration marker in FFmpeg output for {}", input.display()),
    }

    duration
}
