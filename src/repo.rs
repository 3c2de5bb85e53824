use git2::{ErrorCode, Repository};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, VersioningError};

/// Finds the working directory of the git repository enclosing `start`.
///
/// Discovers the repository in `start` or its parent directories, stopping
/// at the file-system root.
///
/// # Returns
/// * `Ok(PathBuf)` - Root of the repository's working tree
/// * `Err(RepoRootNotFound)` - If no repository encloses `start`, or it is bare
/// * `Err(Git)` - If a repository was found but could not be opened
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => {
            return Err(VersioningError::RepoRootNotFound {
                start: start.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let workdir = repo.workdir().ok_or_else(|| VersioningError::RepoRootNotFound {
        start: start.to_path_buf(),
    })?;

    // git2 reports the working directory with a trailing separator
    Ok(workdir.components().collect())
}

/// Finds the repository enclosing the current working directory.
pub fn find_repo_root_from_cwd() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    find_repo_root(&cwd)
}
