// src/launch/orchestrator.rs

//! Drives a single invocation: skip check, plan resolution, then either a
//! forked JVM or an inline run of a registered entry point.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::launch::forked::run_forked;
use crate::launch::inline::{EntryPointRegistry, run_inline};
use crate::launch::plan::LaunchPlan;
use crate::launch::{LaunchReport, LaunchState};

#[derive(Debug)]
pub struct Launcher {
    config: ConfigFile,
    fs: Arc<dyn FileSystem>,
    state: LaunchState,
}

impl Launcher {
    pub fn new(config: ConfigFile) -> Self {
        Self::with_file_system(config, Arc::new(RealFileSystem))
    }

    pub fn with_file_system(config: ConfigFile, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            state: LaunchState::Idle,
        }
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    fn transition(&mut self, next: LaunchState) {
        debug!(from = %self.state, to = %next, "launch state");
        self.state = next;
    }

    /// Run the configured program once.
    ///
    /// Errors raised before the program starts (configuration, classpath,
    /// entry point) are returned as `Err`; failures of the program itself
    /// come back in the report's outcome.
    pub async fn launch(&mut self, registry: &EntryPointRegistry) -> Result<LaunchReport> {
        if self.config.run.skip {
            debug!("skipping run as per configuration.");
            self.transition(LaunchState::Succeeded);
            return Ok(LaunchReport::skipped());
        }

        let plan = match LaunchPlan::resolve(&self.config, self.fs.as_ref(), true) {
            Ok(plan) => plan,
            Err(err) => {
                self.transition(LaunchState::Failed);
                return Err(err);
            }
        };
        self.transition(LaunchState::ArgumentsBuilt);

        let fork = self.config.run.fork;
        let (outcome, command) = if fork {
            let command = plan.forked_command();
            if !plan.agents.is_empty() {
                let agents = plan
                    .agents
                    .iter()
                    .map(|a| a.display().to_string())
                    .collect::<Vec<_>>();
                info!("Attaching agents: {}", agents.join(", "));
            }
            self.transition(LaunchState::ForkedRunning);
            (run_forked(&command).await, Some(command))
        } else {
            self.log_disabled_fork(&plan);
            let entry = match registry.resolve(&plan.main_class) {
                Ok(entry) => entry,
                Err(err) => {
                    self.transition(LaunchState::Failed);
                    return Err(err);
                }
            };
            self.transition(LaunchState::InlineRunning);
            let outcome = run_inline(
                entry,
                plan.application_arguments.as_array(),
                plan.classpath.clone(),
            )
            .await;
            match outcome {
                Ok(outcome) => (outcome, None),
                Err(err) => {
                    self.transition(LaunchState::Failed);
                    return Err(err);
                }
            }
        };

        self.transition(if outcome.is_success() {
            LaunchState::Succeeded
        } else {
            LaunchState::Failed
        });

        Ok(LaunchReport {
            outcome,
            fork_enabled: Some(fork),
            command,
        })
    }

    /// Advisory only: settings a forked JVM would honour but an inline run
    /// cannot.
    fn log_disabled_fork(&self, plan: &LaunchPlan) {
        let run = &self.config.run;
        if run.has_agent() {
            warn!("Fork mode disabled, ignoring agent");
        }
        if run.has_jvm_args() {
            let jvm = plan.jvm_arguments.iter().collect::<Vec<_>>().join(" ");
            warn!("Fork mode disabled, ignoring JVM argument(s) [{jvm}]");
        }
        if run.has_working_directory_set() {
            warn!("Fork mode disabled, ignoring working directory configuration");
        }
        if run.has_env_variables() {
            warn!("Fork mode disabled, ignoring environment variables");
        }
    }
}
