//! Versioning facade - the single entry point for release tooling
//!
//! [`ModuleVersioning`] is built once per release action from a
//! configuration source and a repository root, and is read-only afterwards.
//!
//! ```text
//! ConfigSource ──> VersioningConfig ──┬──> ModuleSetIndex
//!                                     ├──> ModuleInfoIndex   (validated)
//! repo root ── walk ──────────────────┴──> ModulePathIndex   (+ warnings)
//! ```

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::ConfigSource;
use crate::domain::{self, ModuleId, ModuleSet, ModuleTagName};
use crate::error::{Result, VersioningError};
use crate::index::{
    build_module_info_index, build_module_path_index, build_module_set_index, ModuleInfoIndex,
    ModulePathIndex, ModuleSetIndex,
};
use crate::manifest::{GoModParser, ManifestParser};
use crate::warning::WalkWarning;

/// Module sets, module info and module paths of one repository snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleVersioning {
    repo_root: PathBuf,
    manifest_name: String,
    module_sets: ModuleSetIndex,
    module_info: ModuleInfoIndex,
    module_paths: ModulePathIndex,
    walk_warnings: Vec<WalkWarning>,
}

impl ModuleVersioning {
    /// Builds the versioning indices for a Go multi-module repository.
    pub fn new(source: &dyn ConfigSource, repo_root: impl Into<PathBuf>) -> Result<Self> {
        let parser = GoModParser::new()?;
        Self::with_parser(source, repo_root, &parser)
    }

    /// Builds the versioning indices using `parser` to read manifests.
    ///
    /// Fails without returning a partial value if the configuration cannot
    /// be loaded, violates set uniqueness or exclusions, or the repository
    /// cannot be walked.
    pub fn with_parser(
        source: &dyn ConfigSource,
        repo_root: impl Into<PathBuf>,
        parser: &dyn ManifestParser,
    ) -> Result<Self> {
        let repo_root = repo_root.into();
        let config = source.load()?;

        let module_sets = build_module_set_index(&config);
        let module_info = build_module_info_index(&config)?;
        let scan = build_module_path_index(&config, &repo_root, parser)?;

        debug!(
            "Versioning ready for {}: {} sets, {} versioned modules, {} manifests",
            repo_root.display(),
            module_sets.len(),
            module_info.len(),
            scan.paths.len()
        );

        Ok(ModuleVersioning {
            repo_root,
            manifest_name: parser.manifest_name().to_string(),
            module_sets,
            module_info,
            module_paths: scan.paths,
            walk_warnings: scan.warnings,
        })
    }

    /// Fetches the module set with the given name.
    pub fn get_module_set(&self, name: &str) -> Result<&ModuleSet> {
        self.module_sets
            .get(name)
            .ok_or_else(|| VersioningError::unknown_set(name))
    }

    /// Converts module identifiers into the tag names of their manifests.
    pub fn module_paths_to_tag_names(&self, modules: &[ModuleId]) -> Result<Vec<ModuleTagName>> {
        let paths = domain::paths_for(modules, &self.module_paths)?;
        domain::tag_names_for(&paths, &self.repo_root, &self.manifest_name)
    }

    /// Full Git tags every module of the set receives at the set's version.
    ///
    /// Example: set "stable" at "v1.2.0" with modules at the root and in
    /// `sdk/` yields `["v1.2.0", "sdk/v1.2.0"]`.
    pub fn tags_for_set(&self, name: &str) -> Result<Vec<String>> {
        let module_set = self.get_module_set(name)?;
        let tag_names = self.module_paths_to_tag_names(&module_set.modules)?;
        Ok(domain::combine_tags_with_version(
            &tag_names,
            &module_set.version,
        ))
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn module_sets(&self) -> &ModuleSetIndex {
        &self.module_sets
    }

    pub fn module_info(&self) -> &ModuleInfoIndex {
        &self.module_info
    }

    pub fn module_paths(&self) -> &ModulePathIndex {
        &self.module_paths
    }

    /// Entries skipped while walking the repository
    pub fn walk_warnings(&self) -> &[WalkWarning] {
        &self.walk_warnings
    }
}
