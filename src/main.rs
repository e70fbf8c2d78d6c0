// src/main.rs

use bootrun::errors::BootrunError;
use bootrun::launch::LaunchFailure;
use bootrun::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("bootrun error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        eprintln!("bootrun error: {err}");
        std::process::exit(exit_code_for(&err));
    }
}

/// Mirror the application's own exit code when the forked JVM failed.
fn exit_code_for(err: &BootrunError) -> i32 {
    match err {
        BootrunError::LaunchError(LaunchFailure::ExitCode(code)) if *code > 0 => *code,
        _ => 1,
    }
}
