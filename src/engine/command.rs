//! FFmpeg command synthesis
//!
//! Two pure builders over one shared parameter record. The fast variant
//! seeks before the demuxer opens the input (`-ss` ahead of `-i`), which is
//! quick but lands on keyframe boundaries; the accurate variant seeks after
//! (`-ss` behind `-i`), forcing a decode-based, frame-accurate cut at
//! re-encoding cost.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{is_faststart_container, EncodeSettings, Stage};
use crate::utils::time::format_time;

/// One fully-specified FFmpeg invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub stage: Stage,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandDescriptor {
    /// Render as a single shell-like line for dry runs and logging.
    pub fn display_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Parameters shared by both builders.
#[derive(Debug, Clone)]
pub struct CommandSpec<'a> {
    pub ffmpeg: &'a Path,
    pub input: &'a Path,
    pub output: &'a Path,
    /// Effective start; `None` omits the seek entirely
    pub start: Option<f64>,
    /// Duration to keep; `None` cuts to the end of the source
    pub duration: Option<f64>,
    pub overwrite: bool,
    pub encode: &'a EncodeSettings,
}

impl CommandSpec<'_> {
    fn overwrite_flag(&self) -> &'static str {
        if self.overwrite {
            "-y"
        } else {
            "-n"
        }
    }
}

/// Build the fast stream-copy invocation: seek before input, copy every
/// stream, restart timestamps at zero.
pub fn build_fast(spec: &CommandSpec) -> CommandDescriptor {
    let mut args = vec![
        "-hide_banner".to_string(),
        spec.overwrite_flag().to_string(),
    ];

    if let Some(start) = spec.start {
        args.push("-ss".to_string());
        args.push(format_time(start));
    }

    args.push("-i".to_string());
    args.push(spec.input.display().to_string());

    if let Some(duration) = spec.duration {
        args.push("-t".to_string());
        args.push(format_time(duration.max(0.0)));
    }

    args.extend(
        ["-map", "0", "-c", "copy", "-avoid_negative_ts", "make_zero"]
            .iter()
            .map(|s| s.to_string()),
    );

    if is_faststart_container(spec.output) {
        args.push("-movflags".to_string());
        args.push("+faststart".to_string());
    }

    args.push(spec.output.display().to_string());

    debug!("Fast command: {}", args.join(" "));
    CommandDescriptor {
        stage: Stage::Fast,
        program: spec.ffmpeg.to_path_buf(),
        args,
    }
}

/// Build the accurate invocation: seek after input, re-encode video at the
/// configured preset/CRF, copy audio.
pub fn build_accurate(spec: &CommandSpec) -> CommandDescriptor {
    let mut args = vec![
        "-hide_banner".to_string(),
        spec.overwrite_flag().to_string(),
        "-i".to_string(),
        spec.input.display().to_string(),
    ];

    if let Some(start) = spec.start {
        args.push("-ss".to_string());
        args.push(format_time(start));
    }

    if let Some(duration) = spec.duration {
        args.push("-t".to_string());
        args.push(format_time(duration.max(0.0)));
    }

    args.extend(
        ["-map", "0", "-c:v", "libx264", "-preset"]
            .iter()
            .map(|s| s.to_string()),
    );
    args.push(spec.encode.preset.clone());
    args.push("-crf".to_string());
    args.push(spec.encode.crf.to_string());
    args.push("-c:a".to_string());
    args.push("copy".to_string());

    if is_faststart_container(spec.output) {
        args.push("-movflags".to_string());
        args.push("+faststart".to_string());
    }

    args.push(spec.output.display().to_string());

    debug!("Accurate command: {}", args.join(" "));
    CommandDescriptor {
        stage: Stage::Accurate,
        program: spec.ffmpeg.to_path_buf(),
        args,
    }
}
