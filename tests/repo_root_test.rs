// tests/repo_root_test.rs
use git2::Repository;
use modver::repo::{find_repo_root, find_repo_root_from_cwd};
use modver::VersioningError;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).expect("Failed to init repository");
    temp
}

#[test]
fn test_root_found_from_root() {
    let temp = init_repo();
    let root = find_repo_root(temp.path()).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn test_root_found_from_nested_directory() {
    let temp = init_repo();
    let nested = temp.path().join("sdk/metric/internal");
    fs::create_dir_all(&nested).unwrap();

    let root = find_repo_root(&nested).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn test_root_has_no_trailing_separator() {
    let temp = init_repo();
    let root = find_repo_root(temp.path()).unwrap();
    assert!(!root.to_string_lossy().ends_with('/'));
}

#[test]
fn test_bare_repository_has_no_root() {
    let temp = TempDir::new().unwrap();
    Repository::init_bare(temp.path()).unwrap();

    assert!(matches!(
        find_repo_root(temp.path()),
        Err(VersioningError::RepoRootNotFound { .. })
    ));
}

#[test]
#[serial]
fn test_root_found_from_cwd() {
    let temp = init_repo();
    let nested = temp.path().join("exporters");
    fs::create_dir_all(&nested).unwrap();

    let original = env::current_dir().unwrap();
    env::set_current_dir(&nested).unwrap();
    let result = find_repo_root_from_cwd();
    env::set_current_dir(original).unwrap();

    assert_eq!(
        result.unwrap().canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}
