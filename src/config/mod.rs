//! Optional file-backed defaults
//!
//! Settings follow the precedence CLI > environment > config file >
//! built-in defaults. This module supplies the third tier: a `[vidcut]`
//! table in `vidcut.toml`, searched in the working directory and then in
//! the per-user config directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{VidcutError, VidcutResult};

/// Defaults loadable from `vidcut.toml`. Every field is optional; absent
/// fields fall back to built-in defaults at the point of use.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix for derived output names
    pub suffix: Option<String>,
    /// x264 preset for accurate cuts
    pub preset: Option<String>,
    /// Constant Rate Factor for accurate cuts
    pub crf: Option<u8>,
    /// FFmpeg binary path or name
    pub ffmpeg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    vidcut: Config,
}

fn user_config_path() -> Option<PathBuf> {
    if cfg!(windows) {
        env::var_os("APPDATA").map(|base| PathBuf::from(base).join("vidcut").join("config.toml"))
    } else {
        let base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("vidcut").join("config.toml"))
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("vidcut.toml")];
    if let Some(user) = user_config_path() {
        candidates.push(user);
    }
    candidates
}

impl Config {
    /// Load the first config file found, or defaults when none exists.
    /// A file that exists but does not parse is an error; silently ignoring
    /// it would make its settings appear to have no effect.
    pub fn load() -> VidcutResult<Config> {
        for path in candidate_paths() {
            if !path.is_file() {
                continue;
            }
            info!("Loading configuration from: {}", path.display());
            let content = fs::read_to_string(&path)?;
            let parsed: ConfigFile =
                toml::from_str(&content).map_err(|e| VidcutError::InvalidConfig {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            return Ok(parsed.vidcut);
        }

        debug!("No config file found, using built-in defaults");
        Ok(Config::default())
    }

    /// Parse a config document (split out of `load` for tests).
    fn from_toml(content: &str, origin: &str) -> VidcutResult<Config> {
        let parsed: ConfigFile = toml::from_str(content).map_err(|e| VidcutError::InvalidConfig {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(parsed.vidcut)
    }
}
