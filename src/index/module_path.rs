use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::ModulePathIndex;
use crate::config::{DuplicatePathPolicy, VersioningConfig};
use crate::error::{Result, VersioningError};
use crate::manifest::ManifestParser;
use crate::warning::WalkWarning;

/// Result of walking a repository for manifests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModulePathScan {
    /// Manifest path of every non-excluded module found
    pub paths: ModulePathIndex,
    /// Entries skipped during the walk
    pub warnings: Vec<WalkWarning>,
}

/// Walks `root` and maps every declared module to its manifest path.
///
/// Entries are visited in file-name order without following symlinks, and
/// the `.git` directory is skipped. Unreadable entries and manifests that
/// cannot be read or parsed become warnings; only a root that cannot be
/// enumerated at all is an error. Excluded modules are never recorded.
///
/// Two manifests declaring the same module either fail the build or keep
/// the later one, per `behavior.duplicate-module-paths`.
pub fn build_module_path_index(
    config: &VersioningConfig,
    root: &Path,
    parser: &dyn ManifestParser,
) -> Result<ModulePathScan> {
    let metadata = fs::metadata(root).map_err(|source| VersioningError::TreeWalk {
        root: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(VersioningError::TreeWalk {
            root: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        });
    }

    let excluded = config.excluded_set();
    let policy = config.behavior.duplicate_module_paths;
    let manifest_name = parser.manifest_name();
    let mut scan = ModulePathScan::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != ".git");

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(VersioningError::TreeWalk {
                    root: root.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                record(&mut scan.warnings, WalkWarning::UnreadableEntry {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() || entry.file_name() != manifest_name {
            continue;
        }

        let path = entry.path();
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) => {
                record(&mut scan.warnings, WalkWarning::UnreadableManifest {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let module = match parser.module_id(&contents) {
            Ok(module) => module,
            Err(e) => {
                record(&mut scan.warnings, WalkWarning::MalformedManifest {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if excluded.contains(&module) {
            debug!("Skipping excluded module {} at {}", module, path.display());
            continue;
        }

        if let Some(previous) = scan.paths.get(&module) {
            match policy {
                DuplicatePathPolicy::Fail => {
                    return Err(VersioningError::DuplicateModulePath {
                        module,
                        first: previous.clone(),
                        second: path.to_path_buf(),
                    });
                }
                DuplicatePathPolicy::KeepLast => {
                    warn!(
                        "Module {} declared again at {}, replacing {}",
                        module,
                        path.display(),
                        previous.display()
                    );
                }
            }
        }

        debug!("Found module {} at {}", module, path.display());
        scan.paths.insert(module, path.to_path_buf());
    }

    debug!(
        "Built module path index: {} modules, {} warnings",
        scan.paths.len(),
        scan.warnings.len()
    );
    Ok(scan)
}

fn record(warnings: &mut Vec<WalkWarning>, warning: WalkWarning) {
    debug!("Walk warning: {}", warning);
    warnings.push(warning);
}
