// src/dependency/mod.rs

//! Runtime dependency model and filtering.
//!
//! - [`artifact`] holds the resolved artifacts handed to us by the build tool
//!   and the identities used to match against them.
//! - [`filter`] defines the individual exclusion predicates.
//! - [`engine`] composes predicates into an ordered [`FilterChain`] and
//!   reduces a [`DependencySet`] to the artifacts that belong on the runtime
//!   classpath.
//!
//! Resolution already happened upstream; nothing here computes transitive
//! closures.

pub mod artifact;
pub mod engine;
pub mod filter;

pub use artifact::{
    Artifact, ArtifactKey, DependencySet, FilterableDependency, SCOPE_COMPILE, SCOPE_PROVIDED,
    SCOPE_RUNTIME, SCOPE_TEST,
};
pub use engine::FilterChain;
pub use filter::{ArtifactFilter, ScopeFilter, clean_filter_config};
