// src/launch/mod.rs

//! Launch orchestration.
//!
//! - [`plan`] resolves a [`ConfigFile`] into a [`LaunchPlan`]: entry point,
//!   filtered classpath, JVM and application arguments, environment.
//! - [`command`] turns a plan into the argument vector of a forked JVM.
//! - [`forked`] runs that command as a child process.
//! - [`isolated`] and [`inline`] run a registered entry point on its own
//!   thread group, capturing the first uncaught failure.
//! - [`discovery`] (backed by [`class_file`]) finds the entry point in the
//!   compiled classes when none is configured.
//! - [`orchestrator`] drives one invocation through these steps.
//!
//! [`ConfigFile`]: crate::config::ConfigFile

pub mod class_file;
pub mod command;
pub mod discovery;
pub mod forked;
pub mod inline;
pub mod isolated;
pub mod orchestrator;
pub mod plan;

use std::fmt;

use thiserror::Error;

pub use command::ForkedCommand;
pub use inline::{EntryPoint, EntryPointRegistry, InlineContext};
pub use isolated::{CapturedFailure, FailureCause, IsolatedGroup};
pub use orchestrator::Launcher;
pub use plan::LaunchPlan;

use crate::errors::{BootrunError, Result};

/// Why a launch attempt failed once the target program was started (or
/// could not be started).
#[derive(Debug, Error)]
pub enum LaunchFailure {
    #[error("Application finished with exit code: {0}")]
    ExitCode(i32),

    #[error("Could not start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child started, but its exit status could not be collected.
    #[error("Lost track of '{program}' while waiting for it to exit: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("An exception occurred while running. {0}")]
    Uncaught(CapturedFailure),
}

/// Terminal state of a launch attempt.
#[derive(Debug)]
pub enum LaunchOutcome {
    Succeeded,
    Failed(LaunchFailure),
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Succeeded)
    }

    /// Exit code of a forked process that exited unsuccessfully.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchOutcome::Failed(LaunchFailure::ExitCode(code)) => Some(*code),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            LaunchOutcome::Succeeded => Ok(()),
            LaunchOutcome::Failed(failure) => Err(BootrunError::LaunchError(failure)),
        }
    }
}

/// Per-invocation state machine:
/// `Idle → ArgumentsBuilt → {InlineRunning | ForkedRunning} → {Succeeded | Failed}`.
///
/// A skipped invocation goes straight from `Idle` to `Succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Idle,
    ArgumentsBuilt,
    InlineRunning,
    ForkedRunning,
    Succeeded,
    Failed,
}

impl fmt::Display for LaunchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LaunchState::Idle => "idle",
            LaunchState::ArgumentsBuilt => "arguments-built",
            LaunchState::InlineRunning => "inline-running",
            LaunchState::ForkedRunning => "forked-running",
            LaunchState::Succeeded => "succeeded",
            LaunchState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a single invocation produced.
#[derive(Debug)]
pub struct LaunchReport {
    pub outcome: LaunchOutcome,
    /// Whether the run used a forked JVM; `None` when the run was skipped.
    pub fork_enabled: Option<bool>,
    /// The forked command, when one was started.
    pub command: Option<ForkedCommand>,
}

impl LaunchReport {
    pub fn skipped() -> Self {
        Self {
            outcome: LaunchOutcome::Succeeded,
            fork_enabled: None,
            command: None,
        }
    }

    pub fn into_result(self) -> Result<()> {
        self.outcome.into_result()
    }
}
