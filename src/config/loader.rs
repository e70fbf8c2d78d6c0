// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Makes `project.base_dir` absolute: unset means the directory holding
///   the config file, a relative value is taken relative to that directory.
///   Every other relative path resolves against it, and the forked JVM runs
///   in another directory, so it must not stay relative.
/// - Checks filter entries, artifacts and run options.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;
    let root = config_root_dir(path)?;
    raw_config.project.base_dir = Some(match raw_config.project.base_dir.take() {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => root.join(dir),
        None => root,
    });
    ConfigFile::try_from(raw_config)
}

/// Default config path: `Bootrun.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Bootrun.toml")
}

/// Absolute directory holding the config file.
///
/// A bare filename like "Bootrun.toml" (parent = "") is the current working
/// directory.
fn config_root_dir(config_path: &Path) -> Result<PathBuf> {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::path::absolute(parent)?),
        _ => Ok(std::env::current_dir()?),
    }
}
