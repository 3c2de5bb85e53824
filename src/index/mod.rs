//! Index builders - the lookup tables the versioning facade is composed of
//!
//! - `module_info` - module -> (set, version), validated against the configuration
//! - `module_path` - module -> manifest path, discovered by walking the repository

pub mod module_info;
pub mod module_path;

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::VersioningConfig;
use crate::domain::{ModuleId, ModuleInfo, ModuleSet};

pub use module_info::build_module_info_index;
pub use module_path::{build_module_path_index, ModulePathScan};

/// Module sets keyed by set name, in declaration order
pub type ModuleSetIndex = IndexMap<String, ModuleSet>;

/// Set membership and version keyed by module
pub type ModuleInfoIndex = BTreeMap<ModuleId, ModuleInfo>;

/// Manifest file path keyed by module
pub type ModulePathIndex = BTreeMap<ModuleId, PathBuf>;

/// Exposes the configuration's module sets for lookup by name.
pub fn build_module_set_index(config: &VersioningConfig) -> ModuleSetIndex {
    config.module_sets.clone()
}
