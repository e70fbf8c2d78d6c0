// src/dependency/artifact.rs

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{BootrunError, Result};

pub const SCOPE_COMPILE: &str = "compile";
pub const SCOPE_PROVIDED: &str = "provided";
pub const SCOPE_RUNTIME: &str = "runtime";
pub const SCOPE_TEST: &str = "test";

/// Identity of an artifact: `groupId:artifactId[:classifier]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub classifier: Option<String>,
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// A resolved dependency as supplied by the build tool.
///
/// Read-only once built; the launcher never mutates artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    key: ArtifactKey,
    scope: String,
    file: Option<PathBuf>,
}

impl Artifact {
    /// A `compile`-scoped artifact without classifier or resolved file.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            key: ArtifactKey {
                group_id: group_id.into(),
                artifact_id: artifact_id.into(),
                classifier: None,
            },
            scope: SCOPE_COMPILE.to_string(),
            file: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.key.classifier = Some(classifier.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn key(&self) -> &ArtifactKey {
        &self.key
    }

    pub fn group_id(&self) -> &str {
        &self.key.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.key.artifact_id
    }

    pub fn classifier(&self) -> Option<&str> {
        self.key.classifier.as_deref()
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Resolved file, if the build tool produced one.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.scope)
    }
}

/// Identity used purely for matching against an [`Artifact`].
///
/// Used both for include entries (artifact must match one to be kept) and
/// exclude entries (artifact is removed when it matches one).
///
/// A `None` classifier matches any artifact classifier; a `Some` classifier
/// requires the artifact to carry exactly that classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterableDependency {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl FilterableDependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn matches(&self, artifact: &Artifact) -> bool {
        if self.group_id != artifact.group_id() || self.artifact_id != artifact.artifact_id() {
            return false;
        }
        match &self.classifier {
            None => true,
            Some(wanted) => artifact.classifier() == Some(wanted.as_str()),
        }
    }

    /// Both `group_id` and `artifact_id` are mandatory.
    pub fn validate(&self) -> Result<()> {
        if self.group_id.trim().is_empty() {
            return Err(BootrunError::ConfigError(format!(
                "dependency filter entry {self} is missing a group_id"
            )));
        }
        if self.artifact_id.trim().is_empty() {
            return Err(BootrunError::ConfigError(format!(
                "dependency filter entry {self} is missing an artifact_id"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for FilterableDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}:{}", self.group_id, self.artifact_id)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, "'")
    }
}

/// Resolved artifacts in the order the build tool reported them.
///
/// Artifacts are unique by [`ArtifactKey`]; inserting a duplicate identity
/// keeps the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    artifacts: Vec<Artifact>,
    keys: HashSet<ArtifactKey>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an artifact with the same identity is already present.
    pub fn insert(&mut self, artifact: Artifact) -> bool {
        if !self.keys.insert(artifact.key().clone()) {
            return false;
        }
        self.artifacts.push(artifact);
        true
    }

    pub fn contains(&self, key: &ArtifactKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn as_slice(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl FromIterator<Artifact> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut set = DependencySet::new();
        for artifact in iter {
            set.insert(artifact);
        }
        set
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

impl IntoIterator for DependencySet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}
