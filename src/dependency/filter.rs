// src/dependency/filter.rs

//! Exclusion predicates.
//!
//! Every predicate answers a single question: should this artifact be kept
//! off the runtime classpath? They are plain data so that a [`FilterChain`]
//! can hold them in an ordered list and OR their answers together.
//!
//! [`FilterChain`]: crate::dependency::FilterChain

use crate::dependency::artifact::{Artifact, FilterableDependency, SCOPE_TEST};
use crate::errors::{BootrunError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactFilter {
    /// Exclude artifacts whose groupId exactly equals one of these.
    MatchingGroupId(Vec<String>),
    /// Exclude every artifact that matches none of these entries.
    Include(Vec<FilterableDependency>),
    /// Exclude every artifact that matches one of these entries.
    Exclude(Vec<FilterableDependency>),
    /// Exclude artifacts by scope.
    Scope(ScopeFilter),
}

impl ArtifactFilter {
    /// Build a groupId filter from a comma-separated list such as `"a, b ,c"`.
    pub fn matching_group_ids(csv: &str) -> Self {
        ArtifactFilter::MatchingGroupId(clean_filter_config(csv))
    }

    pub fn excludes(&self, artifact: &Artifact) -> bool {
        match self {
            ArtifactFilter::MatchingGroupId(group_ids) => {
                group_ids.iter().any(|g| g == artifact.group_id())
            }
            ArtifactFilter::Include(includes) => !includes.iter().any(|d| d.matches(artifact)),
            ArtifactFilter::Exclude(excludes) => excludes.iter().any(|d| d.matches(artifact)),
            ArtifactFilter::Scope(scope) => scope.excludes(artifact),
        }
    }

    /// Check the filter's own configuration.
    pub fn validate(&self) -> Result<()> {
        match self {
            ArtifactFilter::MatchingGroupId(group_ids) => {
                let malformed = |g: &&String| g.is_empty() || g.chars().any(char::is_whitespace);
                if let Some(bad) = group_ids.iter().find(malformed) {
                    return Err(BootrunError::ConfigError(format!(
                        "invalid groupId '{bad}' in exclude_group_ids"
                    )));
                }
                Ok(())
            }
            ArtifactFilter::Include(entries) | ArtifactFilter::Exclude(entries) => {
                entries.iter().try_for_each(FilterableDependency::validate)
            }
            ArtifactFilter::Scope(scope) => scope.validate(),
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactFilter::MatchingGroupId(_) => "group-id",
            ArtifactFilter::Include(_) => "include",
            ArtifactFilter::Exclude(_) => "exclude",
            ArtifactFilter::Scope(_) => "scope",
        }
    }
}

/// Scope-based exclusion with per-artifact overrides.
///
/// An artifact whose scope is one of `excluded_scopes` is excluded, unless it
/// matches one of the `overrides`, which are checked first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    excluded_scopes: Vec<String>,
    overrides: Vec<FilterableDependency>,
}

impl ScopeFilter {
    pub fn excluding<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_scopes: scopes.into_iter().map(Into::into).collect(),
            overrides: Vec::new(),
        }
    }

    /// Keep `test`-scoped artifacts off the classpath.
    pub fn test_scope() -> Self {
        Self::excluding([SCOPE_TEST])
    }

    pub fn with_overrides(mut self, overrides: Vec<FilterableDependency>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn excluded_scopes(&self) -> &[String] {
        &self.excluded_scopes
    }

    pub fn excludes(&self, artifact: &Artifact) -> bool {
        if self.overrides.iter().any(|o| o.matches(artifact)) {
            return false;
        }
        self.excluded_scopes.iter().any(|s| s == artifact.scope())
    }

    fn validate(&self) -> Result<()> {
        if self.excluded_scopes.iter().any(|s| s.trim().is_empty()) {
            return Err(BootrunError::ConfigError(
                "scope filter contains a blank scope".to_string(),
            ));
        }
        self.overrides.iter().try_for_each(FilterableDependency::validate)
    }
}

/// Split a comma-separated filter value, trimming each item and dropping
/// empty ones.
pub fn clean_filter_config(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
