//! Core cutting engine module

use std::fmt;
use std::path::Path;

use crate::error::VidcutError;

pub mod clipper;
pub mod command;
pub mod runner;

pub use clipper::Clipper;
pub use command::{build_accurate, build_fast, CommandDescriptor, CommandSpec};
pub use runner::{CommandRunner, ProcessRunner, NOT_FOUND_EXIT_CODE};

/// Which of the two alternative invocations a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Lossless stream copy with fast keyframe seeking
    Fast,
    /// Frame-accurate cut with video re-encoding
    Accurate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fast => write!(f, "fast"),
            Stage::Accurate => write!(f, "accurate"),
        }
    }
}

/// Encoding parameters for the accurate (re-encode) path.
#[derive(Debug, Clone)]
pub struct EncodeSettings {
    /// x264 encoding preset
    pub preset: String,
    /// Constant Rate Factor (0-51)
    pub crf: u8,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            preset: "veryfast".to_string(),
            crf: 18,
        }
    }
}

/// Result of processing one input file.
#[derive(Debug)]
pub enum CutOutcome {
    /// The cut was written, via the given stage
    Succeeded { via: Stage },
    /// The cut failed; batch processing continues with the next input
    Failed { error: VidcutError },
    /// Nothing was executed (missing input, dry run)
    Skipped { reason: String },
}

impl CutOutcome {
    /// True for outcomes that should count against the overall exit status.
    pub fn is_failure(&self) -> bool {
        matches!(self, CutOutcome::Failed { .. })
    }
}

/// Check whether an output extension belongs to the MP4 family, where the
/// index should be relocated for fast-start playback.
pub(crate) fn is_faststart_container(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            matches!(
                ext.to_string_lossy().to_lowercase().as_str(),
                "mp4" | "m4v" | "mov"
            )
        })
        .unwrap_or(false)
}
