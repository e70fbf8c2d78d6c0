// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use bootrun::config::load_and_validate;
use bootrun::config::model::DEFAULT_PROFILES_ARGUMENT;
use bootrun::errors::BootrunError;
use tempfile::{NamedTempFile, tempdir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn defaults_apply_to_an_empty_file() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();

    let base = file.path().parent().unwrap().to_path_buf();
    assert_eq!(cfg.base_dir(), base);
    assert_eq!(cfg.classes_dir(), base.join("target/classes"));
    assert_eq!(cfg.resource_dirs(), vec![base.join("src/main/resources")]);
    assert_eq!(cfg.working_directory(), base);
    assert!(cfg.run.fork);
    assert!(!cfg.run.skip);
    assert!(!cfg.run.use_test_classpath);
    assert_eq!(cfg.run.profiles_argument, DEFAULT_PROFILES_ARGUMENT);
    assert!(cfg.dependency_set().is_empty());
}

#[test]
fn full_config_round_trips_into_the_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Bootrun.toml");
    std::fs::write(
        &path,
        r#"
[project]
classes_dir = "build/classes"
resources = ["src/main/resources", "extra"]

[[artifact]]
group_id = "org.slf4j"
artifact_id = "slf4j-api"
file = "libs/slf4j-api.jar"

[[artifact]]
group_id = "org.junit"
artifact_id = "junit"
scope = "test"
file = "/abs/junit.jar"

[filter]
exclude_group_ids = "org.projectlombok"
excludes = [{ group_id = "com.example", artifact_id = "tools" }]
scope_overrides = [{ group_id = "org.junit", artifact_id = "junit" }]

[run]
main_class = "com.example.App"
profiles = ["dev", "local"]
arguments = ["--server.port=0"]
jvm_arguments = "-Xmx256m"
system_properties = { "app.name" = "demo" }
environment_variables = { SPRING_OUTPUT_ANSI_ENABLED = "always" }
agents = ["agent.jar"]
working_directory = "run"
fork = false
"#,
    )
    .unwrap();

    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.classes_dir(), dir.path().join("build/classes"));
    assert_eq!(cfg.resource_dirs().len(), 2);
    assert_eq!(cfg.working_directory(), dir.path().join("run"));

    let deps = cfg.dependency_set();
    let files: Vec<Option<PathBuf>> = deps
        .iter()
        .map(|a| a.file().map(|p| p.to_path_buf()))
        .collect();
    assert_eq!(
        files,
        vec![
            Some(dir.path().join("libs/slf4j-api.jar")),
            Some(PathBuf::from("/abs/junit.jar")),
        ]
    );
    assert_eq!(deps.as_slice()[1].scope(), "test");

    assert_eq!(cfg.filter.excludes.len(), 1);
    assert_eq!(cfg.filter.scope_overrides.len(), 1);
    assert!(!cfg.run.fork);
    assert!(cfg.run.has_agent());
    assert!(cfg.run.has_jvm_args());
    assert!(cfg.run.has_env_variables());
    assert!(cfg.run.has_working_directory_set());
}

#[test]
fn legacy_agent_is_used_only_without_agents() {
    let file = write_config(
        r#"
[run]
agent = ["legacy.jar"]
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.run.determine_agents(), [PathBuf::from("legacy.jar")]);

    let file = write_config(
        r#"
[run]
agent = ["legacy.jar"]
agents = ["new.jar"]
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.run.determine_agents(), [PathBuf::from("new.jar")]);
}

#[test]
fn blank_exclude_group_is_a_config_error() {
    let file = write_config(
        r#"
[filter]
excludes = [{ artifact_id = "tools" }]
"#,
    );
    match load_and_validate(file.path()) {
        Err(BootrunError::ConfigError(msg)) => {
            assert!(msg.contains("[filter].excludes"));
            assert!(msg.contains("group_id"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn blank_folder_is_a_config_error() {
    let file = write_config(
        r#"
[run]
folders = ["/ok", " "]
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(BootrunError::ConfigError(_))
    ));
}

#[test]
fn artifact_without_id_is_a_config_error() {
    let file = write_config(
        r#"
[[artifact]]
group_id = "g"
artifact_id = ""
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(BootrunError::ConfigError(_))
    ));
}

#[test]
fn invalid_toml_is_a_toml_error() {
    let file = write_config("[run\nfork = ");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(BootrunError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_and_validate(dir.path().join("nope.toml")),
        Err(BootrunError::IoError(_))
    ));
}

#[test]
fn relative_base_dir_resolves_against_the_config_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Bootrun.toml");
    std::fs::write(&path, "[project]\nbase_dir = \"module\"\n").unwrap();

    let cfg = load_and_validate(&path).unwrap();

    assert_eq!(cfg.base_dir(), dir.path().join("module"));
    assert_eq!(cfg.classes_dir(), dir.path().join("module/target/classes"));
}

#[test]
fn absolute_base_dir_is_kept() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let path = dir.path().join("Bootrun.toml");
    std::fs::write(
        &path,
        format!("[project]\nbase_dir = \"{}\"\n", elsewhere.path().display()),
    )
    .unwrap();

    let cfg = load_and_validate(&path).unwrap();

    assert_eq!(cfg.base_dir(), elsewhere.path());
}
