//! Stand-ins for the `java` binary in forked-launch tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script named `java` into `dir`.
///
/// `body` runs after `#!/bin/sh`; `$@` holds the forked argument vector.
pub fn write_fake_java(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("java");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake java");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stat fake java").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod fake java");
    }

    path
}

/// A fake `java` that records its arguments (one per line), working
/// directory and the `BOOTRUN_TEST_MARKER` variable into `record`, then
/// exits with `exit_code`.
pub fn recording_java(dir: &Path, record: &Path, exit_code: i32) -> PathBuf {
    let record = record.display();
    write_fake_java(
        dir,
        &format!(
            r#"for arg in "$@"; do printf '%s\n' "$arg" >> "{record}"; done
printf 'cwd=%s\n' "$(pwd -P)" >> "{record}"
printf 'marker=%s\n' "$BOOTRUN_TEST_MARKER" >> "{record}"
exit {exit_code}"#
        ),
    )
}
