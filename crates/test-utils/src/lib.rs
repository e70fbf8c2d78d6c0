pub mod builders;
pub mod class_bytes;
pub mod fake_java;

use std::sync::Once;

use bootrun::logging::{LOG_ENV, filter_from_env};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Output goes through the test writer, so it only shows for failing tests
/// (or with `--nocapture`). The filter comes from `BOOTRUN_LOG`, same as
/// the binary, e.g. `BOOTRUN_LOG=bootrun::launch=debug cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = filter_from_env(std::env::var(LOG_ENV).ok().as_deref());
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_thread_names(true)
            .try_init();
    });
}

/// Run a future with a 10-second timeout.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(10), f)
        .await
        .expect("Test timed out after 10 seconds")
}
