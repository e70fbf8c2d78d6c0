// src/launch/forked.rs

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, error, info};

use crate::launch::command::ForkedCommand;
use crate::launch::{LaunchFailure, LaunchOutcome};

/// Start `cmd` as a child process and wait for it to exit.
///
/// The child inherits this process's stdio and environment; the command's
/// environment is layered on top. There is no timeout.
pub async fn run_forked(cmd: &ForkedCommand) -> LaunchOutcome {
    let program = cmd.program.display().to_string();
    info!(
        program = %program,
        cwd = %cmd.working_directory.display(),
        "starting forked process"
    );
    debug!("{cmd}");

    let mut child = Command::new(&cmd.program);
    child
        .args(&cmd.args)
        .current_dir(&cmd.working_directory)
        .envs(cmd.environment.as_map())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = match child.spawn() {
        Ok(child) => child,
        Err(source) => {
            error!(program = %program, error = %source, "could not start forked process");
            return LaunchOutcome::Failed(LaunchFailure::Spawn { program, source });
        }
    };

    outcome_from_wait(program, child.wait().await)
}

/// Map the result of waiting on a child to an outcome. A child killed by a
/// signal has no exit code and reports `-1`.
pub fn outcome_from_wait(program: String, waited: io::Result<ExitStatus>) -> LaunchOutcome {
    let status = match waited {
        Ok(status) => status,
        Err(source) => {
            error!(program = %program, error = %source, "waiting for forked process failed");
            return LaunchOutcome::Failed(LaunchFailure::Wait { program, source });
        }
    };

    let code = status.code().unwrap_or(-1);
    info!(exit_code = code, success = status.success(), "forked process exited");

    if status.success() {
        LaunchOutcome::Succeeded
    } else {
        LaunchOutcome::Failed(LaunchFailure::ExitCode(code))
    }
}
