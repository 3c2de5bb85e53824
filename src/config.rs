use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ModuleId, ModuleSet};
use crate::error::{Result, VersioningError};

/// File names tried at the repository root when no versioning file is given.
pub const DEFAULT_VERSIONING_FILES: [&str; 3] = ["versions.yaml", "versions.yml", "versions.toml"];

/// Represents the complete versioning declaration of a repository.
///
/// Contains the module sets in declaration order, the modules excluded from
/// versioning, and behavior options for index construction.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct VersioningConfig {
    #[serde(default)]
    pub module_sets: IndexMap<String, ModuleSet>,

    #[serde(default)]
    pub excluded_modules: Vec<ModuleId>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// What to do when two manifests declare the same module.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePathPolicy {
    /// Abort index construction
    #[default]
    Fail,
    /// Keep the manifest found last in traversal order
    KeepLast,
}

/// Configuration for behavior customization.
///
/// Controls how the indices are built without affecting the declared sets.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct BehaviorConfig {
    #[serde(default)]
    pub duplicate_module_paths: DuplicatePathPolicy,
}

/// Set of module identifiers excluded from versioning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcludedModules(HashSet<ModuleId>);

impl ExcludedModules {
    pub fn contains(&self, module: &ModuleId) -> bool {
        self.0.contains(module)
    }
}

impl VersioningConfig {
    /// Builds the exclusion set from `excluded_modules`.
    pub fn excluded_set(&self) -> ExcludedModules {
        ExcludedModules(self.excluded_modules.iter().cloned().collect())
    }
}

/// Anything that can yield a parsed versioning configuration.
pub trait ConfigSource {
    fn load(&self) -> Result<VersioningConfig>;
}

/// An already-parsed configuration is its own source.
impl ConfigSource for VersioningConfig {
    fn load(&self) -> Result<VersioningConfig> {
        Ok(self.clone())
    }
}

/// Versioning file on disk; the format is chosen by extension.
#[derive(Debug, Clone, PartialEq)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileConfigSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locates the versioning file for a repository.
    ///
    /// Attempts in the following order:
    /// 1. Explicit path provided as parameter
    /// 2. `versions.yaml`, `versions.yml`, `versions.toml` at `repo_root`
    ///
    /// # Returns
    /// * `Ok(FileConfigSource)` - Source pointing at the file to load
    /// * `Err` - If no explicit path was given and none of the defaults exist
    pub fn discover(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(FileConfigSource::new(path));
        }

        DEFAULT_VERSIONING_FILES
            .iter()
            .map(|name| repo_root.join(name))
            .find(|candidate| candidate.is_file())
            .map(FileConfigSource::new)
            .ok_or_else(|| {
                VersioningError::config(format!(
                    "no versioning file found in {} (tried {})",
                    repo_root.display(),
                    DEFAULT_VERSIONING_FILES.join(", ")
                ))
            })
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<VersioningConfig> {
        load_config(&self.path)
    }
}

/// Reads and parses a versioning file.
///
/// `.yaml`/`.yml` files are parsed as YAML and `.toml` files as TOML.
///
/// # Returns
/// * `Ok(VersioningConfig)` - Parsed configuration
/// * `Err` - If the file cannot be read, has an unsupported extension, or fails to parse
pub fn load_config(path: &Path) -> Result<VersioningConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        VersioningError::config(format!(
            "error reading versioning file {}: {}",
            path.display(),
            e
        ))
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
            VersioningError::config(format!("unable to parse {}: {}", path.display(), e))
        }),
        "toml" => toml::from_str(&contents).map_err(|e| {
            VersioningError::config(format!("unable to parse {}: {}", path.display(), e))
        }),
        other => Err(VersioningError::config(format!(
            "unsupported versioning file format '{}' for {}",
            other,
            path.display()
        ))),
    }
}
