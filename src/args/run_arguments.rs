// src/args/run_arguments.rs

use std::collections::VecDeque;

use crate::args::tokenizer::tokenize;
use crate::errors::Result;

/// Ordered argument list with front insertion.
///
/// Built once per launch and treated as read-only after it is handed to the
/// launch step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArguments {
    args: VecDeque<String>,
}

impl RunArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a raw argument string; `None` or blank input is empty.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(raw) => Ok(tokenize(raw)?.into_iter().collect()),
            None => Ok(Self::new()),
        }
    }

    /// Build from a pre-split list, dropping missing entries.
    pub fn from_optional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        args.into_iter().flatten().map(Into::into).collect()
    }

    pub fn prepend(&mut self, arg: impl Into<String>) {
        self.args.push_front(arg.into());
    }

    pub fn append(&mut self, arg: impl Into<String>) {
        self.args.push_back(arg.into());
    }

    /// Prepend `<flag>=<p1>,<p2>,...` when at least one profile is given.
    ///
    /// Returns whether an argument was added.
    pub fn add_active_profiles(&mut self, flag: &str, profiles: &[String]) -> bool {
        if profiles.is_empty() {
            return false;
        }
        self.prepend(format!("{flag}={}", profiles.join(",")));
        true
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    pub fn as_array(&self) -> Vec<String> {
        self.args.iter().cloned().collect()
    }
}

impl FromIterator<String> for RunArguments {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<String>> for RunArguments {
    fn from(args: Vec<String>) -> Self {
        Self { args: args.into() }
    }
}
