//! Execution strategy: fast attempt with accurate fallback
//!
//! A small explicit state machine. The fast stream copy runs first and its
//! exit code decides everything: zero is terminal success, non-zero hands
//! the same cut to the accurate re-encoding command. Forcing accurate mode
//! skips the fast state entirely, and a dry run terminates before any state
//! that would spawn a process. No state runs more than once.

use tracing::warn;

use super::runner::{CommandRunner, ProcessRunner};
use super::{CommandDescriptor, CutOutcome, Stage};
use crate::error::VidcutError;

/// Execution modifiers for one cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionOptions {
    /// Skip the fast attempt and go straight to the accurate cut
    pub force_accurate: bool,
    /// Print the planned command instead of executing anything
    pub dry_run: bool,
}

enum State {
    Start,
    RunFast,
    RunAccurate,
    Done(CutOutcome),
}

/// Drives the fast/accurate fallback over a [`CommandRunner`].
pub struct Clipper<R: CommandRunner> {
    runner: R,
}

impl Clipper<ProcessRunner> {
    /// Clipper backed by real child processes.
    pub fn new() -> Self {
        Self {
            runner: ProcessRunner,
        }
    }
}

impl Default for Clipper<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Clipper<R> {
    /// Clipper over a custom runner (used by tests to script exit codes).
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Access the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute the cut described by the two descriptors.
    pub fn execute(
        &self,
        fast: &CommandDescriptor,
        accurate: &CommandDescriptor,
        options: ExecutionOptions,
    ) -> CutOutcome {
        let mut state = State::Start;
        loop {
            state = match state {
                State::Start => {
                    if options.dry_run {
                        let planned = if options.force_accurate { accurate } else { fast };
                        println!("{}", planned.display_line());
                        State::Done(CutOutcome::Skipped {
                            reason: "dry run".to_string(),
                        })
                    } else if options.force_accurate {
                        State::RunAccurate
                    } else {
                        State::RunFast
                    }
                }
                State::RunFast => {
                    let code = self.runner.run(fast);
                    if code == 0 {
                        State::Done(CutOutcome::Succeeded { via: Stage::Fast })
                    } else {
                        warn!("Fast copy failed (exit code {code}), falling back to accurate cut");
                        State::RunAccurate
                    }
                }
                State::RunAccurate => {
                    let code = self.runner.run(accurate);
                    if code == 0 {
                        State::Done(CutOutcome::Succeeded {
                            via: Stage::Accurate,
                        })
                    } else {
                        State::Done(CutOutcome::Failed {
                            error: VidcutError::ExecutionFailed {
                                stage: Stage::Accurate,
                                code,
                            },
                        })
                    }
                }
                State::Done(outcome) => return outcome,
            };
        }
    }
}
