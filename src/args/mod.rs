// src/args/mod.rs

//! Argument and environment collections handed to the launch step.
//!
//! - [`tokenizer`] splits a free-form string (e.g. `jvm_arguments`) into
//!   shell-like tokens.
//! - [`run_arguments`] holds an ordered argument list (JVM or application).
//! - [`env`] holds the environment variables for a forked process.

pub mod env;
pub mod run_arguments;
pub mod tokenizer;

pub use env::EnvVariables;
pub use run_arguments::RunArguments;
pub use tokenizer::tokenize;
