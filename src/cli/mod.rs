//! CLI module for vidcut
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// vidcut - fast & accurate video trimming powered by FFmpeg
///
/// The default mode performs a lossless stream copy for speed; if that
/// fails, vidcut automatically falls back to a frame-accurate cut with
/// video re-encoding.
#[derive(Parser)]
#[command(name = "vidcut")]
#[command(about = "Fast & accurate video trimming powered by FFmpeg")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Cut a time range out of one or more video files
    Cut(args::CutArgs),
    /// Probe a video file and print its duration
    Inspect(args::InspectArgs),
    /// Show which FFmpeg binary vidcut will use
    Doctor(args::DoctorArgs),
}
