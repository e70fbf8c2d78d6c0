// src/launch/inline.rs

//! Inline launches: call a registered entry point on an isolated thread
//! group inside this process, instead of forking a JVM.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::classpath::Classpath;
use crate::errors::{BootrunError, Result};
use crate::launch::isolated::IsolatedGroup;
use crate::launch::{LaunchFailure, LaunchOutcome};

type EntryPointFn = dyn Fn(InlineContext) -> anyhow::Result<()> + Send + Sync;

/// A named callable standing in for a program's `main`.
#[derive(Clone)]
pub struct EntryPoint {
    name: String,
    func: Arc<EntryPointFn>,
}

impl EntryPoint {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(InlineContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Entry points available for inline launches, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct EntryPointRegistry {
    entries: BTreeMap<String, EntryPoint>,
}

impl EntryPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(InlineContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let entry = EntryPoint::new(name, func);
        self.entries.insert(entry.name.clone(), entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&EntryPoint> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up `name`, failing with `EntryPointNotFound`. The error lists
    /// what is registered.
    pub fn resolve(&self, name: &str) -> Result<EntryPoint> {
        self.get(name).cloned().ok_or_else(|| {
            let known: Vec<&str> = self.names().collect();
            let known = if known.is_empty() {
                "none".to_string()
            } else {
                known.join(", ")
            };
            BootrunError::EntryPointNotFound(format!(
                "No inline entry point registered for '{name}' (registered: {known}); enable `run.fork` to launch it in a JVM"
            ))
        })
    }
}

/// What an inline entry point receives.
#[derive(Debug, Clone)]
pub struct InlineContext {
    args: Vec<String>,
    classpath: Classpath,
    group: IsolatedGroup,
}

impl InlineContext {
    /// Application arguments, active-profiles argument first when set.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    /// Start another thread in the same isolated group. Its failure is
    /// captured like the entry point's own.
    pub fn spawn<F>(&self, name: &str, f: F) -> std::io::Result<()>
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        self.group.spawn(name, f)
    }
}

/// Run `entry` on a fresh isolated group and wait for every thread of the
/// group to finish.
pub async fn run_inline(
    entry: EntryPoint,
    args: Vec<String>,
    classpath: Classpath,
) -> Result<LaunchOutcome> {
    info!(main_class = %entry.name, "running entry point inline");

    let group = IsolatedGroup::new(entry.name.clone());
    let ctx = InlineContext {
        args,
        classpath,
        group: group.clone(),
    };

    let name = entry.name.clone();
    let failure = tokio::task::spawn_blocking(move || {
        let func = Arc::clone(&entry.func);
        group.spawn("main", move || func(ctx))?;
        group.join();
        debug!(group = group.name(), "isolated group drained");
        Ok::<_, std::io::Error>(group.take_failure())
    })
    .await
    .map_err(anyhow::Error::from)?;

    let outcome = match failure {
        Ok(None) => LaunchOutcome::Succeeded,
        Ok(Some(captured)) => LaunchOutcome::Failed(LaunchFailure::Uncaught(captured)),
        Err(source) => LaunchOutcome::Failed(LaunchFailure::Spawn {
            program: name.clone(),
            source,
        }),
    };
    debug!(main_class = %name, success = outcome.is_success(), "inline run finished");
    Ok(outcome)
}
