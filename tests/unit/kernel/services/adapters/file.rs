use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_read_write_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.txt");

    let provider = LocalFileProvider::new();
    assert_eq!(provider.scheme(), "file");

    provider.write_file(&file_path, "Hello, World!").unwrap();
    let content = provider.read_file(&file_path).unwrap();
    assert_eq!(content, "Hello, World!");

    provider.write_file(&file_path, "short").unwrap();
    assert_eq!(provider.read_file(&file_path).unwrap(), "short");
}

#[test]
fn test_read_dir() {
    let dir = tempdir().unwrap();

    fs::create_dir(dir.path().join("subdir")).unwrap();
    File::create(dir.path().join("b.txt")).unwrap();
    File::create(dir.path().join("A.md")).unwrap();

    let provider = LocalFileProvider::new();
    let entries = provider.read_dir(dir.path()).unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["subdir", "A.md", "b.txt"]);
    assert!(entries[0].is_dir);
    assert_eq!(entries[1].extension().as_deref(), Some("md"));
}

#[test]
fn read_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = LocalFileProvider::new().read_file(&path).unwrap_err();
    assert!(matches!(err, FileError::NotFound(_)));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn read_directory_is_rejected() {
    let dir = tempdir().unwrap();
    let err = LocalFileProvider::new().read_file(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("out.txt");

    let err = LocalFileProvider::new().write_file(&path, "x").unwrap_err();
    assert_eq!(err.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.txt");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let err = LocalFileProvider::new().read_file(&path).unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
}

#[test]
fn is_file_only_for_regular_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    File::create(dir.path().join("a.txt")).unwrap();

    let provider = LocalFileProvider::new();
    assert!(provider.is_file(&dir.path().join("a.txt")));
    assert!(!provider.is_file(&dir.path().join("sub")));
    assert!(!provider.is_file(&dir.path().join("missing.txt")));
}
