//! Command-line argument definitions

use clap::Args;

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Input video file(s)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output file (single input only; default: input name + suffix)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Suffix for derived output names (default: _cut)
    #[arg(long, env = "VIDCUT_SUFFIX")]
    pub suffix: Option<String>,

    /// Start time (e.g. 5, 00:00:05.200, 90s)
    #[arg(long = "from", value_name = "TIME")]
    pub start: Option<String>,

    /// End time (absolute), e.g. 00:00:10.000
    #[arg(long = "to", value_name = "TIME")]
    pub end: Option<String>,

    /// Duration to keep, e.g. 5s or 00:00:05
    #[arg(short = 't', long, value_name = "TIME")]
    pub duration: Option<String>,

    /// Trim N seconds from the start, e.g. 4s
    #[arg(long, value_name = "TIME")]
    pub trim_start: Option<String>,

    /// Trim N seconds from the end (keeps the rest)
    #[arg(long, value_name = "TIME")]
    pub trim_end: Option<String>,

    /// Frame-accurate cut (re-encode video, copy audio)
    #[arg(long)]
    pub accurate: bool,

    /// Overwrite outputs if they exist
    #[arg(long)]
    pub overwrite: bool,

    /// Print the FFmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// x264 preset for accurate cuts (default: veryfast)
    #[arg(long)]
    pub preset: Option<String>,

    /// Constant Rate Factor for accurate cuts, 0-51 (default: 18)
    #[arg(long)]
    pub crf: Option<u8>,

    /// Override the FFmpeg binary path or name
    #[arg(long, env = "VIDCUT_FFMPEG")]
    pub ffmpeg: Option<String>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    pub input: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Override the FFmpeg binary path or name
    #[arg(long, env = "VIDCUT_FFMPEG")]
    pub ffmpeg: Option<String>,
}

/// Arguments for the doctor command
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Override the FFmpeg binary path or name
    #[arg(long, env = "VIDCUT_FFMPEG")]
    pub ffmpeg: Option<String>,
}
