//! FFmpeg binary resolution
//!
//! Resolution order: explicit path or name (flag, environment, or config
//! file) first, then `ffmpeg` on PATH, then a short list of conventional
//! install locations. A dangling explicit value falls through with a
//! warning rather than failing outright.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{VidcutError, VidcutResult};

#[cfg(windows)]
const FFMPEG_BINARY: &str = "ffmpeg.exe";
#[cfg(not(windows))]
const FFMPEG_BINARY: &str = "ffmpeg";

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn common_paths() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        vec![
            PathBuf::from("/opt/homebrew/bin/ffmpeg"),
            PathBuf::from("/usr/local/bin/ffmpeg"),
            PathBuf::from("/opt/local/bin/ffmpeg"),
        ]
    }

    #[cfg(target_os = "windows")]
    {
        vec![
            PathBuf::from("C:\\ffmpeg\\bin\\ffmpeg.exe"),
            PathBuf::from("C:\\Program Files\\ffmpeg\\bin\\ffmpeg.exe"),
        ]
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        vec![
            PathBuf::from("/usr/bin/ffmpeg"),
            PathBuf::from("/usr/local/bin/ffmpeg"),
        ]
    }

    #[cfg(not(any(unix, windows)))]
    {
        vec![]
    }
}

/// Resolve the FFmpeg binary to invoke.
///
/// `explicit` is the merged flag/environment/config override; an existing
/// path is used as-is and a bare name is searched on PATH.
pub fn resolve_ffmpeg(explicit: Option<&str>) -> VidcutResult<PathBuf> {
    if let Some(given) = explicit {
        let candidate = Path::new(given);
        if candidate.is_file() {
            debug!("Using explicit FFmpeg binary: {given}");
            return Ok(candidate.to_path_buf());
        }
        if let Some(found) = find_in_path(given) {
            debug!("Resolved explicit FFmpeg name '{given}' to {}", found.display());
            return Ok(found);
        }
        warn!("Configured FFmpeg '{given}' not found, falling back to discovery");
    }

    if let Some(found) = find_in_path(FFMPEG_BINARY) {
        debug!("Found FFmpeg on PATH: {}", found.display());
        return Ok(found);
    }

    if let Some(found) = common_paths().into_iter().find(|p| p.is_file()) {
        debug!("Found FFmpeg at conventional location: {}", found.display());
        return Ok(found);
    }

    Err(VidcutError::FfmpegNotFound {
        message: "install FFmpeg system-wide, or point --ffmpeg or VIDCUT_FFMPEG at the binary"
            .to_string(),
    })
}

/// Run `ffmpeg -version` and return the first line of its banner.
pub fn version_banner(ffmpeg: &Path) -> VidcutResult<String> {
    let output = Command::new(ffmpeg).arg("-version").output()?;

    if !output.status.success() {
        return Err(VidcutError::FfmpegNotFound {
            message: format!("{} exists but cannot report a version", ffmpeg.display()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or_default().to_string())
}
