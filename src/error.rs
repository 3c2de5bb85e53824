use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ModuleId;

/// Unified error type for module versioning operations
#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("Module {module} exists more than once: found in sets {first_set} and {second_set}")]
    DuplicateModule {
        module: ModuleId,
        first_set: String,
        second_set: String,
    },

    #[error("Module {module} in set {set_name} is an excluded module and should not be versioned")]
    ExcludedModuleConflict { module: ModuleId, set_name: String },

    #[error("Could not find module {0} in the module path index")]
    UnknownModule(ModuleId),

    #[error("Could not find module set {0} in the versioning configuration")]
    UnknownSet(String),

    #[error(
        "Manifest path {} is not contained in repository with root {}",
        .path.display(),
        .root.display()
    )]
    PathOutsideRepo { path: PathBuf, root: PathBuf },

    #[error("Manifest path {} does not end with '{manifest_name}'", .path.display())]
    InvalidManifestPath {
        path: PathBuf,
        manifest_name: String,
    },

    #[error(
        "Module {module} is declared by more than one manifest: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateModulePath {
        module: ModuleId,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to walk repository tree at {}: {source}", .root.display())]
    TreeWalk {
        root: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to find git repository enclosing {}", .start.display())]
    RepoRootNotFound { start: PathBuf },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in modver
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }

    /// Create an unknown module error
    pub fn unknown_module(module: impl Into<ModuleId>) -> Self {
        VersioningError::UnknownModule(module.into())
    }

    /// Create an unknown module set error
    pub fn unknown_set(name: impl Into<String>) -> Self {
        VersioningError::UnknownSet(name.into())
    }
}
