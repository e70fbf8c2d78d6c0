// src/classpath.rs

//! Classpath assembly.
//!
//! Entry order, earliest first (earlier entries win during class loading):
//! 1. user-declared folders, verbatim, in configured order;
//! 2. resource directories, when resource inlining is enabled;
//! 3. the compiled-classes directory;
//! 4. filtered dependency artifacts that have a resolved file.
//!
//! Resource inlining deletes, from the classes directory, every file that
//! also exists (by relative path) in a resource directory. This is the only
//! place the launcher mutates the build output.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dependency::DependencySet;
use crate::errors::{BootrunError, Result};
use crate::fs::FileSystem;

/// Separator between classpath entries on this platform.
pub fn classpath_separator() -> &'static str {
    if cfg!(target_os = "windows") { ";" } else { ":" }
}

/// Ordered classpath entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined with the platform separator, as passed to `-cp`.
    pub fn to_arg_string(&self) -> String {
        self.entries
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(classpath_separator())
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_arg_string())
    }
}

/// Builder for a [`Classpath`].
pub struct ClasspathBuilder<'a> {
    fs: &'a dyn FileSystem,
    classes_dir: PathBuf,
    folders: Vec<String>,
    resources: Vec<PathBuf>,
    add_resources: bool,
    remove_duplicates: bool,
}

impl<'a> ClasspathBuilder<'a> {
    pub fn new(fs: &'a dyn FileSystem, classes_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            classes_dir: classes_dir.into(),
            folders: Vec::new(),
            resources: Vec::new(),
            add_resources: false,
            remove_duplicates: true,
        }
    }

    pub fn folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Resource directories; only used when `enabled` is true.
    pub fn resources<I, P>(mut self, resources: I, enabled: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self.add_resources = enabled;
        self
    }

    /// Whether inlined resources delete their duplicates from the classes
    /// directory. On by default; dry runs turn it off.
    pub fn remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    /// Validate every entry, then (and only then) delete resources
    /// duplicated in the classes directory. A bad entry leaves the build
    /// output untouched.
    pub fn build(&self, dependencies: &DependencySet) -> Result<Classpath> {
        let mut entries = Vec::new();

        for folder in &self.folders {
            entries.push(to_location(Path::new(folder))?);
        }

        let resources: &[PathBuf] = if self.add_resources {
            &self.resources
        } else {
            &[]
        };
        for resource_dir in resources {
            entries.push(to_location(resource_dir)?);
        }

        entries.push(to_location(&self.classes_dir)?);

        for artifact in dependencies {
            match artifact.file() {
                Some(file) => entries.push(to_location(file)?),
                None => debug!(artifact = %artifact, "artifact has no resolved file; skipping"),
            }
        }

        if self.remove_duplicates {
            for resource_dir in resources {
                let removed =
                    remove_duplicates_from_output_directory(self.fs, &self.classes_dir, resource_dir)?;
                if removed > 0 {
                    info!(
                        resources = %resource_dir.display(),
                        classes = %self.classes_dir.display(),
                        removed,
                        "removed resources duplicated in the classes directory"
                    );
                }
            }
        }

        let classpath = Classpath { entries };
        debug!(classpath = %classpath, "assembled classpath");
        Ok(classpath)
    }
}

/// Check that `path` can stand as a classpath entry.
fn to_location(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    if raw.trim().is_empty() {
        return Err(BootrunError::ClasspathError(
            "empty classpath entry".to_string(),
        ));
    }
    if raw.contains('\0') {
        return Err(BootrunError::ClasspathError(format!(
            "classpath entry {raw:?} contains a NUL byte"
        )));
    }
    if raw.contains(classpath_separator()) {
        return Err(BootrunError::ClasspathError(format!(
            "classpath entry {raw:?} contains the path separator '{}'",
            classpath_separator()
        )));
    }
    Ok(path.to_path_buf())
}

/// Delete from `output_dir` every file that also exists under `origin_dir`
/// at the same relative path. Directories present on both sides are
/// recursed. Returns the number of deleted files.
pub fn remove_duplicates_from_output_directory(
    fs: &dyn FileSystem,
    output_dir: &Path,
    origin_dir: &Path,
) -> Result<usize> {
    if !fs.is_dir(output_dir) || !fs.is_dir(origin_dir) {
        return Ok(0);
    }

    let mut removed = 0;
    for origin in fs.read_dir(origin_dir)? {
        let Some(name) = origin.file_name() else {
            continue;
        };
        let target = output_dir.join(name);
        if fs.is_dir(&target) {
            removed += remove_duplicates_from_output_directory(fs, &target, &origin)?;
        } else if fs.is_file(&target) {
            fs.remove_file(&target)?;
            info!(file = %target.display(), "deleted duplicate of resource");
            removed += 1;
        }
    }
    Ok(removed)
}
