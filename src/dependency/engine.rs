// src/dependency/engine.rs

//! Ordered filter pipeline.
//!
//! An artifact survives [`FilterChain::filter`] iff no predicate in the chain
//! excludes it. The result is computed as "original set minus the union of
//! all exclusions" instead of removing artifacts filter by filter, so the
//! outcome never depends on predicate order and survivors keep the relative
//! order of the input set.

use std::collections::HashSet;

use tracing::debug;

use crate::config::model::FilterSection;
use crate::dependency::artifact::{ArtifactKey, DependencySet};
use crate::dependency::filter::{ArtifactFilter, ScopeFilter};
use crate::errors::{BootrunError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: Vec<ArtifactFilter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the end of the chain.
    pub fn with(mut self, filter: ArtifactFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn push(&mut self, filter: ArtifactFilter) {
        self.filters.push(filter);
    }

    pub fn filters(&self) -> &[ArtifactFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Build the chain configured by `[filter]`.
    ///
    /// Order: scope filter (unless the test classpath is requested), groupId
    /// filter, include filter (only when includes are configured), exclude
    /// filter (only when excludes are configured).
    pub fn from_config(section: &FilterSection, use_test_classpath: bool) -> Result<Self> {
        let mut chain = FilterChain::new();

        if !use_test_classpath {
            chain.push(ArtifactFilter::Scope(
                ScopeFilter::test_scope().with_overrides(section.scope_overrides.clone()),
            ));
        }

        chain.push(ArtifactFilter::matching_group_ids(&section.exclude_group_ids));

        if !section.includes.is_empty() {
            chain.push(ArtifactFilter::Include(section.includes.clone()));
        }
        if !section.excludes.is_empty() {
            chain.push(ArtifactFilter::Exclude(section.excludes.clone()));
        }

        chain.validate()?;
        Ok(chain)
    }

    /// Validate every predicate; fails on the first malformed one.
    pub fn validate(&self) -> Result<()> {
        for filter in &self.filters {
            filter.validate().map_err(|cause| {
                BootrunError::ConfigError(format!(
                    "invalid {} filter: {}",
                    filter.label(),
                    cause
                ))
            })?;
        }
        Ok(())
    }

    /// Reduce `dependencies` to the artifacts no predicate excludes.
    ///
    /// All predicates are validated before any of them is applied, so a
    /// malformed chain never yields a partially filtered set.
    pub fn filter(&self, dependencies: &DependencySet) -> Result<DependencySet> {
        self.validate()?;

        let mut excluded: HashSet<&ArtifactKey> = HashSet::new();
        for filter in &self.filters {
            let mut removed = 0usize;
            for artifact in dependencies {
                if filter.excludes(artifact) {
                    excluded.insert(artifact.key());
                    removed += 1;
                }
            }
            debug!(filter = filter.label(), removed, "applied dependency filter");
        }

        let filtered: DependencySet = dependencies
            .iter()
            .filter(|a| !excluded.contains(a.key()))
            .cloned()
            .collect();

        debug!(
            total = dependencies.len(),
            kept = filtered.len(),
            "filtered project dependencies"
        );
        Ok(filtered)
    }
}
