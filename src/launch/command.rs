// src/launch/command.rs

//! Argument vector for a forked JVM.
//!
//! Fixed order:
//! 1. `-javaagent:<path>` per agent;
//! 2. `-noverify` when requested;
//! 3. JVM arguments (system properties first, then free-form arguments);
//! 4. `-cp <classpath>`;
//! 5. the main class;
//! 6. application arguments.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::args::EnvVariables;
use crate::launch::plan::LaunchPlan;

/// A child process to start: program, arguments, directory, environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkedCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_directory: PathBuf,
    /// Merged over the inherited environment.
    pub environment: EnvVariables,
}

impl ForkedCommand {
    pub fn from_plan(plan: &LaunchPlan) -> Self {
        let mut args = Vec::new();

        for agent in &plan.agents {
            args.push(format!("-javaagent:{}", agent.display()));
        }
        if plan.noverify {
            args.push("-noverify".to_string());
        }
        args.extend(plan.jvm_arguments.iter().map(str::to_string));
        args.push("-cp".to_string());
        args.push(plan.classpath.to_arg_string());
        args.push(plan.main_class.clone());
        args.extend(plan.application_arguments.iter().map(str::to_string));

        Self {
            program: plan.java_executable.clone(),
            args,
            working_directory: plan.working_directory.clone(),
            environment: plan.environment.clone(),
        }
    }
}

impl fmt::Display for ForkedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// `-Dkey` for an empty value, `-Dkey="value"` otherwise; blank keys yield
/// an empty string.
pub fn format_system_property(key: &str, value: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    if value.is_empty() {
        format!("-D{key}")
    } else {
        format!("-D{key}=\"{value}\"")
    }
}

/// System properties joined by single spaces, in key order.
pub fn format_system_properties(properties: &BTreeMap<String, String>) -> String {
    properties
        .iter()
        .map(|(k, v)| format_system_property(k, v))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `java` binary: explicit override, then `$JAVA_HOME/bin/java`, then
/// `java` from `PATH`.
pub fn resolve_java_executable(configured: Option<&Path>, java_home: Option<OsString>) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }
    let binary = if cfg!(target_os = "windows") { "java.exe" } else { "java" };
    match java_home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join("bin").join(binary),
        _ => PathBuf::from(binary),
    }
}
