// src/launch/discovery.rs

//! Entry-point discovery in the compiled classes directory.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{BootrunError, Result};
use crate::fs::FileSystem;
use crate::launch::class_file::ClassInfo;

/// Find the single class declaring `public static void main(String[])`.
///
/// The directory is walked breadth-first; within a directory, files come
/// in sorted order before subdirectories. When `annotation` is given and
/// at least one candidate carries it, only annotated candidates count.
///
/// Returns `Ok(None)` when there is no candidate (or no such directory)
/// and `EntryPointNotFound` when several candidates remain.
pub fn find_single_main_class(
    fs: &dyn FileSystem,
    root: &Path,
    annotation: Option<&str>,
) -> Result<Option<String>> {
    if !fs.is_dir(root) {
        debug!(dir = %root.display(), "classes directory missing; nothing to discover");
        return Ok(None);
    }

    let mut candidates: Vec<ClassInfo> = Vec::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let mut subdirs = Vec::new();
        for entry in fs.read_dir(&dir)? {
            if fs.is_dir(&entry) {
                subdirs.push(entry);
                continue;
            }
            if entry.extension().and_then(|e| e.to_str()) != Some("class") {
                continue;
            }
            let bytes = fs.read(&entry)?;
            let info = ClassInfo::parse(&bytes).map_err(|e| {
                anyhow::anyhow!("malformed class file {}: {e}", entry.display())
            })?;
            if info.has_main_method() {
                debug!(class = %info.name, "found main class candidate");
                candidates.push(info);
            }
        }
        queue.extend(subdirs);
    }

    if let Some(annotation) = annotation {
        if candidates.iter().any(|c| c.is_annotated_with(annotation)) {
            candidates.retain(|c| c.is_annotated_with(annotation));
        }
    }

    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.pop().map(|c| c.name)),
        _ => {
            let names: Vec<String> = candidates.into_iter().map(|c| c.name).collect();
            Err(BootrunError::EntryPointNotFound(format!(
                "Unable to find a single main class from the following candidates {names:?}, please add a 'main_class' property"
            )))
        }
    }
}
