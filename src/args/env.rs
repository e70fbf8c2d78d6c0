// src/args/env.rs

use std::collections::BTreeMap;

/// Environment variables for the forked process.
///
/// Keys are unique and kept sorted so that both projections are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVariables {
    vars: BTreeMap<String, String>,
}

impl EnvVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent configuration yields an empty set.
    pub fn from_map(vars: Option<&BTreeMap<String, String>>) -> Self {
        Self {
            vars: vars.cloned().unwrap_or_default(),
        }
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// `KEY=value` strings, sorted by key.
    pub fn as_array(&self) -> Vec<String> {
        self.vars.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
