//! vidcut CLI
//!
//! Fast & accurate video trimming powered by FFmpeg. The default mode
//! performs a lossless stream copy for speed; if that fails, vidcut
//! automatically falls back to a frame-accurate cut with video re-encoding.
//!
//! # Usage
//!
//! ```bash
//! vidcut cut input.mp4 --from 00:00:05 --to 00:00:12 --overwrite
//! vidcut cut input.mp4 --from 45.5 --duration 10s -o out.mp4 --overwrite
//! vidcut cut input.mp4 --trim-end 3s --overwrite
//! vidcut inspect input.mp4
//! vidcut doctor
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vidcut_cli::cli::{commands, Cli, Commands};

/// Main entry point for the vidcut CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, --log-level otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Cut(args) => commands::cut(args),
        Commands::Inspect(args) => commands::inspect(args),
        Commands::Doctor(args) => commands::doctor(args),
    }
}
