use std::fmt;
use std::path::PathBuf;

/// Warnings that occur while walking the repository for manifests.
/// These are non-fatal: the entry is skipped and the walk continues.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkWarning {
    /// A directory entry could not be enumerated
    UnreadableEntry { path: PathBuf, reason: String },
    /// A manifest was found but could not be read
    UnreadableManifest { path: PathBuf, reason: String },
    /// A manifest was read but declares no usable module identifier
    MalformedManifest { path: PathBuf, reason: String },
}

impl fmt::Display for WalkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkWarning::UnreadableEntry { path, reason } => {
                write!(f, "Cannot read '{}' during walk: {}", path.display(), reason)
            }
            WalkWarning::UnreadableManifest { path, reason } => {
                write!(f, "Cannot read manifest '{}': {}", path.display(), reason)
            }
            WalkWarning::MalformedManifest { path, reason } => {
                write!(f, "Malformed manifest '{}': {}", path.display(), reason)
            }
        }
    }
}
