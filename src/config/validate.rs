// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dependency::FilterableDependency;
use crate::errors::{BootrunError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::BootrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_artifacts(cfg)?;
    validate_filters(cfg)?;
    validate_run(cfg)?;
    Ok(())
}

fn validate_artifacts(cfg: &RawConfigFile) -> Result<()> {
    for (idx, artifact) in cfg.artifact.iter().enumerate() {
        if artifact.group_id.trim().is_empty() || artifact.artifact_id.trim().is_empty() {
            return Err(BootrunError::ConfigError(format!(
                "[[artifact]] #{} must define both group_id and artifact_id",
                idx + 1
            )));
        }
        if artifact.scope.trim().is_empty() {
            return Err(BootrunError::ConfigError(format!(
                "[[artifact]] {}:{} has a blank scope",
                artifact.group_id, artifact.artifact_id
            )));
        }
    }
    Ok(())
}

fn validate_filters(cfg: &RawConfigFile) -> Result<()> {
    let lists: [(&str, &[FilterableDependency]); 3] = [
        ("includes", &cfg.filter.includes),
        ("excludes", &cfg.filter.excludes),
        ("scope_overrides", &cfg.filter.scope_overrides),
    ];
    for (name, entries) in lists {
        for entry in entries {
            entry.validate().map_err(|e| {
                BootrunError::ConfigError(format!("[filter].{name}: {e}"))
            })?;
        }
    }
    Ok(())
}

fn validate_run(cfg: &RawConfigFile) -> Result<()> {
    let run = &cfg.run;

    if run.folders.iter().any(|f| f.trim().is_empty()) {
        return Err(BootrunError::ConfigError(
            "[run].folders must not contain blank entries".to_string(),
        ));
    }

    if run.profiles.iter().any(|p| p.trim().is_empty()) {
        return Err(BootrunError::ConfigError(
            "[run].profiles must not contain blank entries".to_string(),
        ));
    }

    if run.profiles_argument.trim().is_empty() {
        return Err(BootrunError::ConfigError(
            "[run].profiles_argument must not be blank".to_string(),
        ));
    }

    if let Some(main_class) = &run.main_class {
        if main_class.trim().is_empty() {
            return Err(BootrunError::ConfigError(
                "[run].main_class must not be blank; omit it to discover the entry point"
                    .to_string(),
            ));
        }
    }

    if run.system_properties.keys().any(|k| k.trim().is_empty()) {
        return Err(BootrunError::ConfigError(
            "[run].system_properties must not contain blank keys".to_string(),
        ));
    }

    Ok(())
}
