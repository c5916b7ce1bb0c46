//! Tests for sync module - safe reads and atomic writes.

use std::io::Write;

use tempfile::TempDir;

use nblink_io::{IoError, read_text_safe, write_text_atomic};

#[test]
fn test_read_binary_rejected() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("binary.ipynb");
    let mut file = std::fs::File::create(&p).unwrap();
    file.write_all(b"\x00\x01\x02\x03").unwrap();
    assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
}

#[test]
fn test_read_too_large() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("large.ipynb");
    std::fs::write(&p, "12345678901234567890").unwrap();
    assert!(matches!(
        read_text_safe(&p, 10),
        Err(IoError::TooLarge(20, 10))
    ));
}

#[test]
fn test_read_not_found() {
    let result = read_text_safe("/nonexistent/file.ipynb", 1024);
    assert!(matches!(result, Err(IoError::NotFound(_))));
}

#[test]
fn test_write_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("out").join("ja").join("nb.ipynb");
    write_text_atomic(&p, "{}\n").unwrap();
    assert_eq!(std::fs::read_to_string(&p).unwrap(), "{}\n");
}

#[test]
fn test_write_under_file_parent_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();

    let result = write_text_atomic(blocker.join("nb.ipynb"), "{}");
    assert!(matches!(result, Err(IoError::System(_))));
}
