use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::ModuleId;
use crate::error::{Result, VersioningError};
use crate::index::ModulePathIndex;

/// Tag scope of a module, derived from where its manifest lives.
///
/// The manifest at the repository root maps to [`ModuleTagName::Root`];
/// any other manifest maps to its directory relative to the root, e.g.
/// `<root>/sdk/metric/go.mod` becomes `Named("sdk/metric")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleTagName {
    Root,
    Named(String),
}

impl ModuleTagName {
    /// Create a named tag
    pub fn named(name: impl Into<String>) -> Self {
        ModuleTagName::Named(name.into())
    }

    /// Full Git tag for this module at `version`
    /// Example: Named("sdk/metric"), "v1.2.3" -> "sdk/metric/v1.2.3"
    pub fn with_version(&self, version: &str) -> String {
        match self {
            ModuleTagName::Root => version.to_string(),
            ModuleTagName::Named(name) => format!("{}/{}", name, version),
        }
    }
}

impl fmt::Display for ModuleTagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleTagName::Root => write!(f, "(repository root)"),
            ModuleTagName::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Looks up the manifest path of every module, in input order.
///
/// Fails on the first module missing from the index; never returns a
/// partial list.
pub fn paths_for(modules: &[ModuleId], index: &ModulePathIndex) -> Result<Vec<PathBuf>> {
    modules
        .iter()
        .map(|module| {
            index
                .get(module)
                .cloned()
                .ok_or_else(|| VersioningError::unknown_module(module.clone()))
        })
        .collect()
}

/// Converts a manifest path into the tag name of its module.
///
/// `path` must lie strictly under `repo_root` and its file name must be
/// `manifest_name`. `.` and `..` segments below the root are resolved
/// lexically; a `..` that climbs above the root is outside the repository.
pub fn tag_name_for(path: &Path, repo_root: &Path, manifest_name: &str) -> Result<ModuleTagName> {
    let outside = || VersioningError::PathOutsideRepo {
        path: path.to_path_buf(),
        root: repo_root.to_path_buf(),
    };

    let relative = path.strip_prefix(repo_root).map_err(|_| outside())?;

    let mut parts: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop().ok_or_else(outside)?;
            }
            Component::RootDir | Component::Prefix(_) => return Err(outside()),
        }
    }

    let file_name = parts.pop().ok_or_else(outside)?;
    if file_name != manifest_name {
        return Err(VersioningError::InvalidManifestPath {
            path: path.to_path_buf(),
            manifest_name: manifest_name.to_string(),
        });
    }

    if parts.is_empty() {
        Ok(ModuleTagName::Root)
    } else {
        Ok(ModuleTagName::Named(parts.join("/")))
    }
}

/// Converts manifest paths into tag names, failing on the first bad path.
pub fn tag_names_for(
    paths: &[PathBuf],
    repo_root: &Path,
    manifest_name: &str,
) -> Result<Vec<ModuleTagName>> {
    paths
        .iter()
        .map(|path| tag_name_for(path, repo_root, manifest_name))
        .collect()
}

/// Combines tag names with a version into full Git tags, preserving order.
///
/// # Example
/// ```
/// use modver::domain::{combine_tags_with_version, ModuleTagName};
///
/// let tags = combine_tags_with_version(
///     &[ModuleTagName::Root, ModuleTagName::named("sdk/metric")],
///     "v1.2.3",
/// );
/// assert_eq!(tags, vec!["v1.2.3", "sdk/metric/v1.2.3"]);
/// ```
pub fn combine_tags_with_version(tag_names: &[ModuleTagName], version: &str) -> Vec<String> {
    tag_names
        .iter()
        .map(|tag_name| tag_name.with_version(version))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_MOD: &str = "go.mod";

    fn index(entries: &[(&str, &str)]) -> ModulePathIndex {
        entries
            .iter()
            .map(|(id, path)| (ModuleId::from(*id), PathBuf::from(path)))
            .collect()
    }

    #[test]
    fn test_tag_name_for_nested_manifest() {
        let tag = tag_name_for(Path::new("/repo/sdk/metric/go.mod"), Path::new("/repo"), GO_MOD);
        assert_eq!(tag.unwrap(), ModuleTagName::named("sdk/metric"));
    }

    #[test]
    fn test_tag_name_for_single_level() {
        let tag = tag_name_for(Path::new("/repo/bridge/go.mod"), Path::new("/repo"), GO_MOD);
        assert_eq!(tag.unwrap(), ModuleTagName::named("bridge"));
    }

    #[test]
    fn test_tag_name_for_root_manifest() {
        let tag = tag_name_for(Path::new("/repo/go.mod"), Path::new("/repo"), GO_MOD);
        assert_eq!(tag.unwrap(), ModuleTagName::Root);
    }

    #[test]
    fn test_tag_name_for_root_with_trailing_separator() {
        let tag = tag_name_for(Path::new("/repo/exporters/go.mod"), Path::new("/repo/"), GO_MOD);
        assert_eq!(tag.unwrap(), ModuleTagName::named("exporters"));
    }

    #[test]
    fn test_tag_name_for_path_outside_repo() {
        let err = tag_name_for(Path::new("/other/sdk/go.mod"), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));
    }

    #[test]
    fn test_tag_name_for_sibling_with_shared_prefix() {
        // "/repository" starts with "/repo" as a string but is not under it
        let err = tag_name_for(Path::new("/repository/go.mod"), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));
    }

    #[test]
    fn test_tag_name_for_repo_root_itself() {
        let err = tag_name_for(Path::new("/repo"), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));
    }

    #[test]
    fn test_tag_name_for_parent_segment_leaving_repo() {
        let err = tag_name_for(Path::new("/repo/../other/go.mod"), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));

        let err = tag_name_for(Path::new("/repo/sdk/../../go.mod"), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));
    }

    #[test]
    fn test_tag_name_for_parent_segment_back_to_root() {
        let tag = tag_name_for(Path::new("/repo/sdk/../go.mod"), Path::new("/repo"), GO_MOD);
        assert_eq!(tag.unwrap(), ModuleTagName::Root);
    }

    #[test]
    fn test_tag_name_for_resolves_dot_segments() {
        let tag = tag_name_for(
            Path::new("/repo/./sdk/trace/../metric/go.mod"),
            Path::new("/repo"),
            GO_MOD,
        );
        assert_eq!(tag.unwrap(), ModuleTagName::named("sdk/metric"));
    }

    #[test]
    fn test_tag_name_for_parent_segment_ending_at_root_dir() {
        let err = tag_name_for(Path::new("/repo/sdk/.."), Path::new("/repo"), GO_MOD);
        assert!(matches!(err, Err(VersioningError::PathOutsideRepo { .. })));
    }

    #[test]
    fn test_tag_name_for_wrong_file_name() {
        let err = tag_name_for(Path::new("/repo/sdk/Cargo.toml"), Path::new("/repo"), GO_MOD);
        assert!(matches!(
            err,
            Err(VersioningError::InvalidManifestPath { .. })
        ));

        let err = tag_name_for(Path::new("/repo/sdk/notgo.mod"), Path::new("/repo"), GO_MOD);
        assert!(matches!(
            err,
            Err(VersioningError::InvalidManifestPath { .. })
        ));
    }

    #[test]
    fn test_tag_name_round_trip() {
        let root = Path::new("/work/repo");
        for dir in ["a", "sdk/metric", "exporters/otlp/otlptrace"] {
            let path = root.join(dir).join(GO_MOD);
            assert_eq!(
                tag_name_for(&path, root, GO_MOD).unwrap(),
                ModuleTagName::named(dir)
            );
        }
        assert_eq!(
            tag_name_for(&root.join(GO_MOD), root, GO_MOD).unwrap(),
            ModuleTagName::Root
        );
    }

    #[test]
    fn test_paths_for_preserves_order() {
        let idx = index(&[("a", "/repo/a/go.mod"), ("b", "/repo/b/go.mod")]);
        let paths = paths_for(&[ModuleId::from("b"), ModuleId::from("a")], &idx).unwrap();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/repo/b/go.mod"),
                PathBuf::from("/repo/a/go.mod")
            ]
        );
    }

    #[test]
    fn test_paths_for_fails_fast_on_missing_module() {
        let idx = index(&[("a", "/repo/a/go.mod"), ("b", "/repo/b/go.mod")]);
        let modules = vec![
            ModuleId::from("a"),
            ModuleId::from("missing"),
            ModuleId::from("b"),
        ];

        match paths_for(&modules, &idx) {
            Err(VersioningError::UnknownModule(module)) => assert_eq!(module.as_str(), "missing"),
            other => panic!("expected UnknownModule, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_names_for_fails_on_first_bad_path() {
        let paths = vec![
            PathBuf::from("/repo/go.mod"),
            PathBuf::from("/other/go.mod"),
        ];
        assert!(tag_names_for(&paths, Path::new("/repo"), GO_MOD).is_err());
    }

    #[test]
    fn test_combine_tags_with_version() {
        let tags = combine_tags_with_version(
            &[ModuleTagName::Root, ModuleTagName::named("sdk/metric")],
            "v1.2.3",
        );
        assert_eq!(tags, vec!["v1.2.3", "sdk/metric/v1.2.3"]);
    }

    #[test]
    fn test_combine_tags_keeps_input_order() {
        let tags = combine_tags_with_version(
            &[
                ModuleTagName::named("zpages"),
                ModuleTagName::named("bridge"),
                ModuleTagName::Root,
            ],
            "v0.4.0",
        );
        assert_eq!(tags, vec!["zpages/v0.4.0", "bridge/v0.4.0", "v0.4.0"]);
    }

    #[test]
    fn test_combine_tags_empty() {
        assert!(combine_tags_with_version(&[], "v1.0.0").is_empty());
    }

    #[test]
    fn test_tag_name_display() {
        assert_eq!(ModuleTagName::named("sdk").to_string(), "sdk");
        assert_eq!(ModuleTagName::Root.to_string(), "(repository root)");
    }
}
