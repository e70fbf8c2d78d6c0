// src/lib.rs

pub mod args;
pub mod classpath;
pub mod cli;
pub mod config;
pub mod dependency;
pub mod errors;
pub mod fs;
pub mod launch;
pub mod logging;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::errors::Result;
use crate::fs::RealFileSystem;
use crate::launch::{EntryPointRegistry, LaunchPlan, Launcher};

/// High-level entry point used by `main.rs`.
///
/// Loads the config, applies CLI overrides, then either prints the launch
/// plan (`--dry-run`) or launches the program once. No inline entry points
/// are registered here, so `--no-fork` only works for embedders going
/// through [`run_with_registry`].
pub async fn run(args: CliArgs) -> Result<()> {
    run_with_registry(args, &EntryPointRegistry::new()).await
}

/// Same as [`run`], with entry points available for inline launches.
pub async fn run_with_registry(args: CliArgs, registry: &EntryPointRegistry) -> Result<()> {
    let mut cfg = load_and_validate(&args.config)?;
    apply_overrides(&mut cfg, &args);

    if args.dry_run {
        return print_dry_run(&cfg);
    }

    let mut launcher = Launcher::new(cfg);
    let report = launcher.launch(registry).await?;
    if let Some(fork) = report.fork_enabled {
        info!(fork_enabled = fork, state = %launcher.state(), "run finished");
    }
    report.into_result()
}

/// Layer command-line flags over the loaded configuration.
pub fn apply_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if args.skip {
        cfg.run.skip = true;
    }
    if args.no_fork {
        cfg.run.fork = false;
    }
    if let Some(main_class) = &args.main_class {
        cfg.run.main_class = Some(main_class.clone());
    }
    if let Some(profiles) = &args.profiles {
        cfg.run.profiles = profiles
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }
    if !args.arguments.is_empty() {
        cfg.run.arguments = args.arguments.clone();
    }
}

/// Resolve and print the plan without deleting or launching anything.
fn print_dry_run(cfg: &ConfigFile) -> Result<()> {
    println!("bootrun dry-run");
    if cfg.run.skip {
        println!("  skip = true (nothing would run)");
        return Ok(());
    }

    let plan = LaunchPlan::resolve(cfg, &RealFileSystem, false)?;
    println!("  main_class: {}", plan.main_class);
    println!("  fork: {}", cfg.run.fork);
    println!("  classpath ({}):", plan.classpath.len());
    for entry in plan.classpath.entries() {
        println!("    - {}", entry.display());
    }
    if cfg.run.fork {
        let command = plan.forked_command();
        println!("  working_directory: {}", command.working_directory.display());
        if !command.environment.is_empty() {
            println!("  environment: {:?}", command.environment.as_array());
        }
        println!("  command: {command}");
    } else {
        println!("  arguments: {:?}", plan.application_arguments.as_array());
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
