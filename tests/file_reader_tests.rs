use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use teller_core::core::reader::{read_lines, LOCKED_RETRY_DELAY};
use teller_core::errors::FileError;

#[test]
fn file_contents_come_back_as_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha").unwrap();
    writeln!(file, "beta").unwrap();

    let lines = read_lines(file.path()).unwrap();

    assert_eq!(lines, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn empty_files_read_as_no_lines() {
    let file = tempfile::NamedTempFile::new().unwrap();

    assert!(read_lines(file.path()).unwrap().is_empty());
}

#[test]
fn missing_files_are_not_retryable() {
    let err = read_lines(Path::new("/no/such/file.txt")).unwrap_err();

    assert!(matches!(err, FileError::NotFound(_)));
    assert!(!err.is_retryable());
}

#[test]
fn reading_a_directory_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let err = read_lines(dir.path()).unwrap_err();

    assert!(matches!(err, FileError::Io { .. }));
    assert!(!err.is_retryable());
}

#[test]
fn only_locked_files_are_retryable() {
    assert!(FileError::Locked(PathBuf::from("busy.txt")).is_retryable());
    assert!(!FileError::PermissionDenied(PathBuf::from("busy.txt")).is_retryable());
}

#[test]
fn locked_retry_delay_is_five_seconds() {
    assert_eq!(LOCKED_RETRY_DELAY, Duration::from_secs(5));
}
