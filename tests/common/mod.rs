#![allow(dead_code)]

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub use bootrun_test_utils::builders::{self, ConfigFileBuilder};
pub use bootrun_test_utils::class_bytes::ClassFileBuilder;
pub use bootrun_test_utils::fake_java;
pub use bootrun_test_utils::{init_tracing, with_timeout};

use bootrun::fs::mock::MockFileSystem;

/// Mock filesystem with `target/classes/<path>.class` entries for each
/// `(binary name, bytes)` pair, rooted at `base`.
pub fn mock_classes(base: &Path, classes: &[(&str, Vec<u8>)]) -> MockFileSystem {
    let fs = MockFileSystem::new();
    let classes_dir = base.join("target/classes");
    fs.add_dir(&classes_dir);
    for (name, bytes) in classes {
        let path = classes_dir.join(format!("{}.class", name.replace('.', "/")));
        fs.add_file(path, bytes.clone());
    }
    fs
}

/// Log lines written while a [`capture_logs`] guard is alive.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `warn` and above on the current thread into a buffer until the
/// guard drops. Use with a current-thread runtime so async code logs here too.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
