use std::fs::{self, File};
use std::path::Path;

use crate::fsutil::find_file;
use crate::util::errors::AppError;

use tempfile::tempdir;

/// Lays out the fixture tree shared by most tests:
/// file1.txt, dir1/file2.txt, dir1/subdir1/file3.txt, dir2/File4.txt
fn create_fixture_tree(root: &Path) {
    fs::create_dir_all(root.join("dir1").join("subdir1")).unwrap();
    fs::create_dir(root.join("dir2")).unwrap();

    File::create(root.join("file1.txt")).unwrap();
    File::create(root.join("dir1").join("file2.txt")).unwrap();
    File::create(root.join("dir1").join("subdir1").join("file3.txt")).unwrap();
    File::create(root.join("dir2").join("File4.txt")).unwrap();
}

#[test]
fn test_nonexistent_root() {
    let result = find_file(Path::new("nonexistent_path"), "file.txt", true);
    assert!(matches!(result, Err(AppError::DirectoryNotFound(_))));
}

#[test]
fn test_root_is_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    File::create(&file_path).unwrap();

    let result = find_file(&file_path, "file.txt", true);
    assert!(matches!(result, Err(AppError::DirectoryNotFound(_))));
}

#[test]
fn test_empty_directory() {
    let dir = tempdir().unwrap();

    let found = find_file(dir.path(), "file.txt", true).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_file_found_in_root() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "file1.txt", true).unwrap();
    assert_eq!(found, vec![dir.path().join("file1.txt")]);
}

#[test]
fn test_file_found_in_subdirectory() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "file2.txt", true).unwrap();
    assert_eq!(found, vec![dir.path().join("dir1").join("file2.txt")]);
}

#[test]
fn test_file_found_in_nested_subdirectory() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "file3.txt", true).unwrap();
    assert_eq!(
        found,
        vec![dir.path().join("dir1").join("subdir1").join("file3.txt")]
    );
}

#[test]
fn test_case_insensitive_search() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "file4.txt", false).unwrap();
    assert_eq!(found, vec![dir.path().join("dir2").join("File4.txt")]);
}

#[test]
fn test_case_sensitive_misses_other_case() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "file4.txt", true).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_file_not_found() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    let found = find_file(dir.path(), "non_existent_file.txt", true).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_multiple_occurrences() {
    let dir = tempdir().unwrap();
    create_fixture_tree(dir.path());

    File::create(dir.path().join("dir1").join("subdir1").join("file1.txt")).unwrap();

    let mut found = find_file(dir.path(), "file1.txt", true).unwrap();
    found.sort();

    let mut expected = vec![
        dir.path().join("file1.txt"),
        dir.path().join("dir1").join("subdir1").join("file1.txt"),
    ];
    expected.sort();

    assert_eq!(found, expected);
}

#[test]
fn test_directory_with_matching_name_is_not_reported() {
    let dir = tempdir().unwrap();

    // A directory that shares the target name must not count as a hit
    fs::create_dir(dir.path().join("file5.txt")).unwrap();
    File::create(dir.path().join("file5.txt").join("file5.txt")).unwrap();

    let found = find_file(dir.path(), "file5.txt", true).unwrap();
    assert_eq!(
        found,
        vec![dir.path().join("file5.txt").join("file5.txt")]
    );
}
