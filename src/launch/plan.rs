// src/launch/plan.rs

use std::path::PathBuf;

use tracing::debug;

use crate::args::{EnvVariables, RunArguments};
use crate::classpath::{Classpath, ClasspathBuilder};
use crate::config::ConfigFile;
use crate::dependency::FilterChain;
use crate::errors::{BootrunError, Result};
use crate::fs::FileSystem;
use crate::launch::command::{self, ForkedCommand};
use crate::launch::discovery;

/// Everything needed to start the target program, resolved from a
/// [`ConfigFile`] once per invocation and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub main_class: String,
    pub classpath: Classpath,
    /// System properties followed by the free-form JVM arguments.
    pub jvm_arguments: RunArguments,
    /// Application arguments, active-profiles flag first when set.
    pub application_arguments: RunArguments,
    pub agents: Vec<PathBuf>,
    pub noverify: bool,
    pub working_directory: PathBuf,
    pub environment: EnvVariables,
    pub java_executable: PathBuf,
}

impl LaunchPlan {
    /// Resolve the entry point, filter dependencies, assemble the classpath
    /// and build both argument lists.
    ///
    /// With `remove_duplicates` set and `run.add_resources` on, files
    /// duplicated between the resource directories and the classes
    /// directory are deleted from the classes directory.
    pub fn resolve(
        config: &ConfigFile,
        fs: &dyn FileSystem,
        remove_duplicates: bool,
    ) -> Result<Self> {
        let main_class = resolve_main_class(config, fs)?;

        let chain = FilterChain::from_config(&config.filter, config.run.use_test_classpath)?;
        let dependencies = chain.filter(&config.dependency_set())?;

        let classpath = ClasspathBuilder::new(fs, config.classes_dir())
            .folders(config.run.folders.iter().cloned())
            .resources(config.resource_dirs(), config.run.add_resources)
            .remove_duplicates(remove_duplicates)
            .build(&dependencies)?;
        debug!("Classpath for forked process: {classpath}");

        let jvm_arguments = resolve_jvm_arguments(config)?;
        let application_arguments = resolve_application_arguments(config);
        let environment = EnvVariables::from_map(Some(&config.run.environment_variables));

        log_arguments("JVM argument(s)", jvm_arguments.iter());
        log_arguments("Application argument(s)", application_arguments.iter());
        let env_pairs = environment.as_array();
        log_arguments("Environment variable(s)", env_pairs.iter().map(String::as_str));

        let java_executable = command::resolve_java_executable(
            config.run.java_executable.as_deref(),
            std::env::var_os("JAVA_HOME"),
        );

        Ok(Self {
            main_class,
            classpath,
            jvm_arguments,
            application_arguments,
            agents: config.run.determine_agents().to_vec(),
            noverify: config.run.noverify,
            working_directory: config.working_directory(),
            environment,
            java_executable,
        })
    }

    pub fn forked_command(&self) -> ForkedCommand {
        ForkedCommand::from_plan(self)
    }
}

fn resolve_main_class(config: &ConfigFile, fs: &dyn FileSystem) -> Result<String> {
    if let Some(name) = &config.run.main_class {
        return Ok(name.clone());
    }
    let classes_dir = config.classes_dir();
    let found = discovery::find_single_main_class(
        fs,
        &classes_dir,
        config.run.main_class_annotation.as_deref(),
    )?;
    match found {
        Some(name) => {
            debug!(main_class = %name, "discovered main class");
            Ok(name)
        }
        None => Err(BootrunError::EntryPointNotFound(
            "Unable to find a suitable main class, please add a 'main_class' property".into(),
        )),
    }
}

/// System properties (`-Dk` / `-Dk="v"`) then `run.jvm_arguments`, joined
/// into one string and tokenized.
pub fn resolve_jvm_arguments(config: &ConfigFile) -> Result<RunArguments> {
    let mut raw = command::format_system_properties(&config.run.system_properties);
    if let Some(extra) = config.run.jvm_arguments.as_deref() {
        if !extra.trim().is_empty() {
            if !raw.is_empty() {
                raw.push(' ');
            }
            raw.push_str(extra);
        }
    }
    RunArguments::parse(Some(&raw))
}

/// Configured arguments, with `<profiles_argument>=a,b` prepended when
/// profiles are set.
pub fn resolve_application_arguments(config: &ConfigFile) -> RunArguments {
    let mut arguments: RunArguments = config.run.arguments.clone().into();
    let flag = &config.run.profiles_argument;
    if arguments.add_active_profiles(flag, &config.run.profiles) {
        debug!("Active profile(s): {}", config.run.profiles.join(","));
    }
    arguments
}

fn log_arguments<'a>(label: &str, args: impl Iterator<Item = &'a str>) {
    let joined = args.collect::<Vec<_>>().join(" ");
    debug!("{label}: {joined}");
}
