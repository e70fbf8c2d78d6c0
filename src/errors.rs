// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::launch::LaunchFailure;

#[derive(Error, Debug)]
pub enum BootrunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse arguments [{input}]: {reason}")]
    ParseError { input: String, reason: String },

    #[error("Unable to build classpath: {0}")]
    ClasspathError(String),

    #[error("{0}")]
    EntryPointNotFound(String),

    #[error(transparent)]
    LaunchError(#[from] LaunchFailure),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BootrunError>;
