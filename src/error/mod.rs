//! Error handling module for vidcut

use thiserror::Error;

use crate::engine::Stage;

/// Main error type for vidcut operations
#[derive(Error, Debug)]
pub enum VidcutError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    /// Invalid time format
    #[error("Invalid time format: '{text}'. Expected seconds, '<n>s', '<n>ms', or [HH:]MM:SS")]
    InvalidTimeFormat { text: String },

    /// Time range validation error
    #[error("Invalid cut range: start ({start}) is past the end of the kept region ({end})")]
    InvalidRange { start: String, end: String },

    /// Tail trim requested but the source duration could not be determined
    #[error("Cannot detect duration for: {path}")]
    ProbeUnavailable { path: String },

    /// External tool returned a non-zero exit code
    #[error("{stage} cut failed (exit code {code})")]
    ExecutionFailed { stage: Stage, code: i32 },

    /// FFmpeg binary could not be located
    #[error("FFmpeg not found: {message}")]
    FfmpegNotFound { message: String },

    /// Configuration file error
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vidcut operations
pub type VidcutResult<T> = std::result::Result<T, VidcutError>;
