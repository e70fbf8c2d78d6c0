// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dependency::{Artifact, DependencySet, FilterableDependency, SCOPE_COMPILE};

/// Default flag used to pass active profiles to the application.
pub const DEFAULT_PROFILES_ARGUMENT: &str = "--active-profiles";

/// Annotation that marks the preferred entry point during discovery.
pub const DEFAULT_MAIN_CLASS_ANNOTATION: &str =
    "org.springframework.boot.autoconfigure.SpringBootApplication";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [project]
/// classes_dir = "target/classes"
/// resources = ["src/main/resources"]
///
/// [[artifact]]
/// group_id = "org.slf4j"
/// artifact_id = "slf4j-api"
/// file = "/home/me/.m2/repository/org/slf4j/slf4j-api/2.0.9/slf4j-api-2.0.9.jar"
///
/// [filter]
/// exclude_group_ids = "org.projectlombok"
///
/// [run]
/// main_class = "com.example.App"
/// profiles = ["dev"]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub project: ProjectSection,

    /// Resolved dependencies, in resolution order.
    #[serde(default)]
    pub artifact: Vec<ArtifactConfig>,

    #[serde(default)]
    pub filter: FilterSection,

    #[serde(default)]
    pub run: RunSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub project: ProjectSection,
    pub artifact: Vec<ArtifactConfig>,
    pub filter: FilterSection,
    pub run: RunSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            project: raw.project,
            artifact: raw.artifact,
            filter: raw.filter,
            run: raw.run,
        }
    }

    /// Project base directory (defaults to the current directory).
    pub fn base_dir(&self) -> PathBuf {
        self.project
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.resolve(&self.project.classes_dir)
    }

    pub fn resource_dirs(&self) -> Vec<PathBuf> {
        self.project.resources.iter().map(|r| self.resolve(r)).collect()
    }

    /// Working directory for a forked process: the override, or the base dir.
    pub fn working_directory(&self) -> PathBuf {
        match &self.run.working_directory {
            Some(dir) => self.resolve(dir),
            None => self.base_dir(),
        }
    }

    /// The resolved dependencies as a [`DependencySet`].
    pub fn dependency_set(&self) -> DependencySet {
        self.artifact
            .iter()
            .map(|a| a.to_artifact(&self.base_dir()))
            .collect()
    }

    /// Resolve a possibly relative path against the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }
}

/// `[project]` section: the build layout.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Project base directory. When omitted, the loader uses the directory
    /// containing the config file.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Compiled classes output directory.
    #[serde(default = "default_classes_dir")]
    pub classes_dir: PathBuf,

    /// Resource directories.
    #[serde(default = "default_resources")]
    pub resources: Vec<PathBuf>,
}

fn default_classes_dir() -> PathBuf {
    PathBuf::from("target/classes")
}

fn default_resources() -> Vec<PathBuf> {
    vec![PathBuf::from("src/main/resources")]
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            base_dir: None,
            classes_dir: default_classes_dir(),
            resources: default_resources(),
        }
    }
}

/// `[[artifact]]` entry: one resolved dependency.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Resolved file; relative paths resolve against the base directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_scope() -> String {
    SCOPE_COMPILE.to_string()
}

impl ArtifactConfig {
    pub fn to_artifact(&self, base_dir: &Path) -> Artifact {
        let mut artifact =
            Artifact::new(&self.group_id, &self.artifact_id).with_scope(&self.scope);
        if let Some(classifier) = &self.classifier {
            artifact = artifact.with_classifier(classifier);
        }
        if let Some(file) = &self.file {
            let file = if file.is_absolute() {
                file.clone()
            } else {
                base_dir.join(file)
            };
            artifact = artifact.with_file(file);
        }
        artifact
    }
}

/// `[filter]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSection {
    /// Only artifacts matching one of these are kept (ignored when empty).
    #[serde(default)]
    pub includes: Vec<FilterableDependency>,

    /// Artifacts matching one of these are removed.
    #[serde(default)]
    pub excludes: Vec<FilterableDependency>,

    /// Comma-separated groupIds to exclude (exact match).
    #[serde(default)]
    pub exclude_group_ids: String,

    /// Artifacts kept even when their scope is filtered out.
    #[serde(default)]
    pub scope_overrides: Vec<FilterableDependency>,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Put resource directories on the classpath ahead of the classes
    /// directory, deleting their duplicates from the classes directory.
    #[serde(default)]
    pub add_resources: bool,

    /// Agent jars. Forked launches only.
    #[serde(default)]
    pub agents: Option<Vec<PathBuf>>,

    /// Legacy single-agent setting, used only when `agents` is absent.
    #[serde(default)]
    pub agent: Option<Vec<PathBuf>>,

    /// Disable bytecode verification (`-noverify`).
    #[serde(default)]
    pub noverify: bool,

    /// Working directory of the forked process; defaults to the base dir.
    #[serde(default)]
    pub working_directory: Option<PathBuf>,

    /// Free-form JVM arguments, quote-aware.
    #[serde(default)]
    pub jvm_arguments: Option<String>,

    /// System properties passed as `-D` flags.
    #[serde(default)]
    pub system_properties: BTreeMap<String, String>,

    /// Environment variables merged over the inherited environment.
    #[serde(default)]
    pub environment_variables: BTreeMap<String, String>,

    /// Application arguments.
    #[serde(default)]
    pub arguments: Vec<String>,

    /// Profiles to activate.
    #[serde(default)]
    pub profiles: Vec<String>,

    /// Flag used to pass `profiles` to the application.
    #[serde(default = "default_profiles_argument")]
    pub profiles_argument: String,

    /// Entry point. Discovered from the classes directory when omitted.
    #[serde(default)]
    pub main_class: Option<String>,

    /// Annotation preferred during entry-point discovery.
    #[serde(default = "default_main_class_annotation")]
    pub main_class_annotation: Option<String>,

    /// `java` binary for forked launches.
    #[serde(default)]
    pub java_executable: Option<PathBuf>,

    /// Extra classpath folders, placed first and verbatim.
    #[serde(default)]
    pub folders: Vec<String>,

    /// Fork a JVM (default) or run the registered entry point inline.
    #[serde(default = "default_fork")]
    pub fork: bool,

    /// Keep `test`-scoped dependencies on the classpath.
    #[serde(default)]
    pub use_test_classpath: bool,

    /// Skip the execution entirely.
    #[serde(default)]
    pub skip: bool,
}

fn default_profiles_argument() -> String {
    DEFAULT_PROFILES_ARGUMENT.to_string()
}

fn default_main_class_annotation() -> Option<String> {
    Some(DEFAULT_MAIN_CLASS_ANNOTATION.to_string())
}

fn default_fork() -> bool {
    true
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            add_resources: false,
            agents: None,
            agent: None,
            noverify: false,
            working_directory: None,
            jvm_arguments: None,
            system_properties: BTreeMap::new(),
            environment_variables: BTreeMap::new(),
            arguments: Vec::new(),
            profiles: Vec::new(),
            profiles_argument: default_profiles_argument(),
            main_class: None,
            main_class_annotation: default_main_class_annotation(),
            java_executable: None,
            folders: Vec::new(),
            fork: default_fork(),
            use_test_classpath: false,
            skip: false,
        }
    }
}

impl RunSection {
    /// Configured agents: `agents` when present, else the legacy `agent`.
    pub fn determine_agents(&self) -> &[PathBuf] {
        self.agents
            .as_deref()
            .or(self.agent.as_deref())
            .unwrap_or_default()
    }

    pub fn has_agent(&self) -> bool {
        !self.determine_agents().is_empty()
    }

    pub fn has_jvm_args(&self) -> bool {
        self.jvm_arguments.as_deref().is_some_and(|s| !s.is_empty())
            || !self.system_properties.is_empty()
    }

    pub fn has_env_variables(&self) -> bool {
        !self.environment_variables.is_empty()
    }

    pub fn has_working_directory_set(&self) -> bool {
        self.working_directory.is_some()
    }
}
