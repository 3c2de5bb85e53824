use log::debug;

use super::ModuleInfoIndex;
use crate::config::VersioningConfig;
use crate::domain::ModuleInfo;
use crate::error::{Result, VersioningError};

/// Builds the module -> set/version index by reversing the module sets.
///
/// Sets and their modules are visited in declaration order; the first
/// violation aborts the build:
/// - a module already assigned to a set yields `DuplicateModule`
/// - an excluded module yields `ExcludedModuleConflict`
pub fn build_module_info_index(config: &VersioningConfig) -> Result<ModuleInfoIndex> {
    let excluded = config.excluded_set();
    let mut index = ModuleInfoIndex::new();

    for (set_name, module_set) in &config.module_sets {
        for module in &module_set.modules {
            if let Some(existing) = index.get(module) {
                return Err(VersioningError::DuplicateModule {
                    module: module.clone(),
                    first_set: existing.set_name.clone(),
                    second_set: set_name.clone(),
                });
            }

            if excluded.contains(module) {
                return Err(VersioningError::ExcludedModuleConflict {
                    module: module.clone(),
                    set_name: set_name.clone(),
                });
            }

            index.insert(
                module.clone(),
                ModuleInfo::new(set_name.as_str(), module_set.version.as_str()),
            );
        }
    }

    debug!(
        "Built module info index: {} modules in {} sets",
        index.len(),
        config.module_sets.len()
    );
    Ok(index)
}
