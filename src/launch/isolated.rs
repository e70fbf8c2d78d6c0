// src/launch/isolated.rs

//! Isolated thread group for inline launches.
//!
//! Every thread started through an [`IsolatedGroup`] runs under
//! `catch_unwind`; a returned error or a panic is recorded as the group's
//! uncaught failure. Only the first failure is retained, later ones are
//! logged and dropped. The caller joins the whole group and then drains the
//! slot.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, warn};

/// What went wrong on a group thread.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("{0:#}")]
    Error(anyhow::Error),

    #[error("panicked: {0}")]
    Panic(String),
}

/// A failure captured on one of the group's threads.
#[derive(Debug, Error)]
#[error("{cause} (thread '{thread}')")]
pub struct CapturedFailure {
    pub thread: String,
    pub cause: FailureCause,
}

#[derive(Debug, Default)]
struct GroupState {
    failure: Mutex<Option<CapturedFailure>>,
    threads: Mutex<Vec<JoinHandle<()>>>,
}

/// A named set of threads sharing one first-failure-wins slot.
#[derive(Debug, Clone)]
pub struct IsolatedGroup {
    name: String,
    state: Arc<GroupState>,
}

impl IsolatedGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(GroupState::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start `f` on a new thread of this group.
    ///
    /// The thread is named `<group>-<name>`.
    pub fn spawn<F>(&self, name: &str, f: F) -> std::io::Result<()>
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        let thread_name = format!("{}-{}", self.name, name);
        let group = self.clone();
        let recorded_name = thread_name.clone();

        let handle = thread::Builder::new().name(thread_name).spawn(move || {
            let cause = match panic::catch_unwind(AssertUnwindSafe(f)) {
                Ok(Ok(())) => return,
                Ok(Err(err)) => FailureCause::Error(err),
                Err(payload) => FailureCause::Panic(panic_message(payload.as_ref())),
            };
            group.uncaught(CapturedFailure {
                thread: recorded_name,
                cause,
            });
        })?;

        lock(&self.state.threads).push(handle);
        Ok(())
    }

    /// Record an uncaught failure, keeping only the first one.
    pub fn uncaught(&self, failure: CapturedFailure) {
        warn!(group = %self.name, thread = %failure.thread, error = %failure.cause, "uncaught failure");
        let mut slot = lock(&self.state.failure);
        if slot.is_none() {
            *slot = Some(failure);
        } else {
            debug!(group = %self.name, "a failure was already captured; not retaining this one");
        }
    }

    /// Block until every thread of the group, including threads started
    /// while joining, has finished.
    pub fn join(&self) {
        loop {
            let next = lock(&self.state.threads).pop();
            let Some(handle) = next else {
                break;
            };
            let thread = handle.thread().name().unwrap_or("<unnamed>").to_string();
            if let Err(payload) = handle.join() {
                self.uncaught(CapturedFailure {
                    thread,
                    cause: FailureCause::Panic(panic_message(payload.as_ref())),
                });
            }
        }
    }

    pub fn has_failure(&self) -> bool {
        lock(&self.state.failure).is_some()
    }

    /// Drain the captured failure, if any.
    pub fn take_failure(&self) -> Option<CapturedFailure> {
        lock(&self.state.failure).take()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
