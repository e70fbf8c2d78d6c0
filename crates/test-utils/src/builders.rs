#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bootrun::config::{ArtifactConfig, ConfigFile, RawConfigFile};
use bootrun::dependency::{Artifact, DependencySet, FilterableDependency};

/// Shorthand for an artifact with a resolved file.
pub fn artifact(group_id: &str, artifact_id: &str, scope: &str) -> Artifact {
    Artifact::new(group_id, artifact_id)
        .with_scope(scope)
        .with_file(format!("/repo/{group_id}/{artifact_id}.jar"))
}

pub fn dependency_set<I: IntoIterator<Item = Artifact>>(artifacts: I) -> DependencySet {
    artifacts.into_iter().collect()
}

pub fn identity(group_id: &str, artifact_id: &str) -> FilterableDependency {
    FilterableDependency::new(group_id, artifact_id)
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.project.base_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn classes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.project.classes_dir = dir.into();
        self
    }

    pub fn resources(mut self, dirs: &[&str]) -> Self {
        self.config.project.resources = dirs.iter().map(PathBuf::from).collect();
        self
    }

    pub fn with_artifact(mut self, group_id: &str, artifact_id: &str, scope: &str, file: &str) -> Self {
        self.config.artifact.push(ArtifactConfig {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            classifier: None,
            scope: scope.to_string(),
            file: Some(PathBuf::from(file)),
        });
        self
    }

    pub fn exclude(mut self, group_id: &str, artifact_id: &str) -> Self {
        self.config.filter.excludes.push(identity(group_id, artifact_id));
        self
    }

    pub fn include(mut self, group_id: &str, artifact_id: &str) -> Self {
        self.config.filter.includes.push(identity(group_id, artifact_id));
        self
    }

    pub fn exclude_group_ids(mut self, csv: &str) -> Self {
        self.config.filter.exclude_group_ids = csv.to_string();
        self
    }

    pub fn main_class(mut self, name: &str) -> Self {
        self.config.run.main_class = Some(name.to_string());
        self
    }

    pub fn fork(mut self, fork: bool) -> Self {
        self.config.run.fork = fork;
        self
    }

    pub fn skip(mut self, skip: bool) -> Self {
        self.config.run.skip = skip;
        self
    }

    pub fn add_resources(mut self, enabled: bool) -> Self {
        self.config.run.add_resources = enabled;
        self
    }

    pub fn agents(mut self, agents: &[&str]) -> Self {
        self.config.run.agents = Some(agents.iter().map(PathBuf::from).collect());
        self
    }

    pub fn noverify(mut self, noverify: bool) -> Self {
        self.config.run.noverify = noverify;
        self
    }

    pub fn jvm_arguments(mut self, raw: &str) -> Self {
        self.config.run.jvm_arguments = Some(raw.to_string());
        self
    }

    pub fn system_property(mut self, key: &str, value: &str) -> Self {
        self.config
            .run
            .system_properties
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.config
            .run
            .environment_variables
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn environment(mut self, vars: BTreeMap<String, String>) -> Self {
        self.config.run.environment_variables = vars;
        self
    }

    pub fn arguments(mut self, args: &[&str]) -> Self {
        self.config.run.arguments = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn profiles(mut self, profiles: &[&str]) -> Self {
        self.config.run.profiles = profiles.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.run.working_directory = Some(dir.into());
        self
    }

    pub fn java_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.run.java_executable = Some(path.into());
        self
    }

    pub fn folders(mut self, folders: &[&str]) -> Self {
        self.config.run.folders = folders.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn raw(&self) -> &RawConfigFile {
        &self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
