// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `bootrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bootrun",
    version,
    about = "Run a compiled JVM application straight from its build output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the launch config file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BOOTRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the launch plan without running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the execution entirely.
    #[arg(long)]
    pub skip: bool,

    /// Run inline instead of forking a JVM, overriding `run.fork`.
    #[arg(long)]
    pub no_fork: bool,

    /// Entry point to launch, overriding `run.main_class`.
    #[arg(long, value_name = "NAME")]
    pub main_class: Option<String>,

    /// Comma-separated profiles to activate, overriding `run.profiles`.
    #[arg(long, value_name = "CSV", value_delimiter = ',')]
    pub profiles: Option<Vec<String>>,

    /// Application arguments; replaces `run.arguments` when present.
    #[arg(last = true, value_name = "ARGS")]
    pub arguments: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
