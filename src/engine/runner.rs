//! Blocking child-process execution

use std::io;
use std::process::Command;

use tracing::{error, info};

use super::CommandDescriptor;

/// Exit code reported when the external binary cannot be spawned.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Seam between the execution strategy and the operating system, so the
/// fallback policy is testable with a scripted runner.
pub trait CommandRunner {
    /// Execute the command and block until it exits, returning the exit
    /// code. Spawn failures map to [`NOT_FOUND_EXIT_CODE`].
    fn run(&self, command: &CommandDescriptor) -> i32;
}

/// Runs commands as real child processes. Stdio is inherited so FFmpeg's
/// own progress output reaches the terminal; the call blocks with no
/// timeout until the child exits.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandDescriptor) -> i32 {
        info!("Running {} command: {}", command.stage, command.display_line());

        match Command::new(&command.program).args(&command.args).status() {
            Ok(status) => status.code().unwrap_or(-1),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("Cannot spawn {}: not found", command.program.display());
                NOT_FOUND_EXIT_CODE
            }
            Err(e) => {
                error!("Cannot spawn {}: {e}", command.program.display());
                -1
            }
        }
    }
}
