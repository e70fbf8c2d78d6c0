// src/logging.rs

//! Logging setup for `bootrun` using `tracing` + `tracing-subscriber`.
//!
//! Filter priority:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `BOOTRUN_LOG` environment variable, either a bare level ("debug") or
//!    full `EnvFilter` directives ("bootrun::launch=debug,info")
//! 3. default to `info`
//!
//! Logs are sent to STDERR; the launched application owns STDOUT.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable consulted when no CLI level is given.
pub const LOG_ENV: &str = "BOOTRUN_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(lvl.as_directive()),
        None => filter_from_env(std::env::var(LOG_ENV).ok().as_deref()),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("initialising logging: {e}"))
}

/// Build a filter from the raw `BOOTRUN_LOG` value, falling back to `info`
/// when it is unset, blank or not a valid directive list.
pub fn filter_from_env(raw: Option<&str>) -> EnvFilter {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => {
            EnvFilter::try_new(s).unwrap_or_else(|_| EnvFilter::new("info"))
        }
        _ => EnvFilter::new("info"),
    }
}
