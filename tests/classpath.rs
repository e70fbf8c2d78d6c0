// tests/classpath.rs

use std::fs;
use std::path::PathBuf;

use bootrun::classpath::{
    ClasspathBuilder, classpath_separator, remove_duplicates_from_output_directory,
};
use bootrun::dependency::{Artifact, DependencySet};
use bootrun::errors::BootrunError;
use bootrun::fs::mock::MockFileSystem;
use bootrun::fs::{FileSystem, RealFileSystem};
use tempfile::tempdir;

mod common;

fn deps() -> DependencySet {
    [
        Artifact::new("g", "a").with_file("a.jar"),
        Artifact::new("g", "unresolved"),
        Artifact::new("g", "b").with_file("b.jar"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn entries_follow_folders_resources_classes_artifacts() {
    common::init_tracing();
    let fs = MockFileSystem::new();

    let classpath = ClasspathBuilder::new(&fs, "/out")
        .folders(["/f1"])
        .resources(["/r1"], true)
        .build(&deps())
        .unwrap();

    let expected: Vec<PathBuf> = ["/f1", "/r1", "/out", "a.jar", "b.jar"]
        .iter()
        .map(PathBuf::from)
        .collect();
    assert_eq!(classpath.entries(), expected.as_slice());
}

#[test]
fn resources_are_left_out_unless_enabled() {
    let fs = MockFileSystem::new();
    let classpath = ClasspathBuilder::new(&fs, "/out")
        .resources(["/r1"], false)
        .build(&DependencySet::new())
        .unwrap();
    assert_eq!(classpath.entries(), [PathBuf::from("/out")]);
}

#[test]
fn arg_string_uses_platform_separator() {
    let fs = MockFileSystem::new();
    let classpath = ClasspathBuilder::new(&fs, "/out").build(&deps()).unwrap();
    let sep = classpath_separator();
    assert_eq!(classpath.to_arg_string(), format!("/out{sep}a.jar{sep}b.jar"));
    assert_eq!(classpath.len(), 3);
}

#[test]
fn malformed_folder_is_a_classpath_error() {
    let fs = MockFileSystem::new();
    let bad = format!("/a{}/b", classpath_separator());
    let result = ClasspathBuilder::new(&fs, "/out").folders([bad]).build(&deps());
    assert!(matches!(result, Err(BootrunError::ClasspathError(_))));

    let result = ClasspathBuilder::new(&fs, "/out").folders(["  "]).build(&deps());
    assert!(matches!(result, Err(BootrunError::ClasspathError(_))));
}

#[test]
fn inlined_resources_delete_duplicates_from_classes() {
    let fs = MockFileSystem::new();
    fs.add_file("/res/application.properties", "a=1");
    fs.add_file("/res/static/index.html", "<html/>");
    fs.add_file("/res/only-in-resources.txt", "x");
    fs.add_file("/out/application.properties", "a=1");
    fs.add_file("/out/static/index.html", "<html/>");
    fs.add_file("/out/static/app.js", "js");
    fs.add_file("/out/com/example/App.class", [0xCA, 0xFE]);

    ClasspathBuilder::new(&fs, "/out")
        .resources(["/res"], true)
        .build(&DependencySet::new())
        .unwrap();

    let remaining: Vec<PathBuf> = fs
        .files()
        .into_iter()
        .filter(|p| p.starts_with("/out"))
        .collect();
    assert_eq!(
        remaining,
        vec![
            PathBuf::from("/out/com/example/App.class"),
            PathBuf::from("/out/static/app.js"),
        ]
    );
    // Resource originals are never touched.
    assert!(fs.is_file(std::path::Path::new("/res/static/index.html")));
}

#[test]
fn bad_entry_leaves_the_classes_directory_untouched() {
    let fs = MockFileSystem::new();
    fs.add_file("/res/application.properties", "a=1");
    fs.add_file("/out/application.properties", "a=1");
    let duplicate = std::path::Path::new("/out/application.properties");

    // Invalid artifact file, listed after the resources.
    let bad_jar = format!("/repo/a{}b.jar", classpath_separator());
    let deps: DependencySet = [Artifact::new("g", "a").with_file(bad_jar)]
        .into_iter()
        .collect();
    let result = ClasspathBuilder::new(&fs, "/out")
        .resources(["/res"], true)
        .build(&deps);
    assert!(matches!(result, Err(BootrunError::ClasspathError(_))));
    assert!(fs.is_file(duplicate));

    // Invalid second resource directory.
    let result = ClasspathBuilder::new(&fs, "/out")
        .resources(["/res", " "], true)
        .build(&DependencySet::new());
    assert!(matches!(result, Err(BootrunError::ClasspathError(_))));
    assert!(fs.is_file(duplicate));
}

#[test]
fn duplicates_survive_when_removal_is_disabled() {
    let fs = MockFileSystem::new();
    fs.add_file("/res/application.properties", "a=1");
    fs.add_file("/out/application.properties", "a=1");

    ClasspathBuilder::new(&fs, "/out")
        .resources(["/res"], true)
        .remove_duplicates(false)
        .build(&DependencySet::new())
        .unwrap();

    assert!(fs.is_file(std::path::Path::new("/out/application.properties")));
}

#[test]
fn dedupe_on_real_directories() {
    let dir = tempdir().unwrap();
    let res = dir.path().join("resources");
    let out = dir.path().join("classes");
    fs::create_dir_all(res.join("templates")).unwrap();
    fs::create_dir_all(out.join("templates")).unwrap();
    fs::write(res.join("templates/home.html"), "home").unwrap();
    fs::write(out.join("templates/home.html"), "home").unwrap();
    fs::write(out.join("templates/other.html"), "other").unwrap();

    let removed = remove_duplicates_from_output_directory(&RealFileSystem, &out, &res).unwrap();

    assert_eq!(removed, 1);
    assert!(!out.join("templates/home.html").exists());
    assert!(out.join("templates/other.html").exists());
    assert!(res.join("templates/home.html").exists());
}

#[test]
fn dedupe_with_missing_directories_is_a_noop() {
    let fs = MockFileSystem::new();
    fs.add_file("/out/a.txt", "a");
    let removed =
        remove_duplicates_from_output_directory(&fs, "/out".as_ref(), "/missing".as_ref())
            .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(fs.files(), vec![PathBuf::from("/out/a.txt")]);
}
