// src/config/mod.rs

//! Launch configuration for bootrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate filter entries, artifacts and run options (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{
    ArtifactConfig, ConfigFile, FilterSection, ProjectSection, RawConfigFile, RunSection,
};
