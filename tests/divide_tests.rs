use std::io::Write;
use std::path::Path;

use teller_core::core::divide::{divide, load_operands, parse_operands};
use teller_core::errors::{DivideError, FileError};

fn file_with(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn operands_load_from_the_first_two_lines() {
    let file = file_with("10\n4\n");

    assert_eq!(load_operands(file.path()).unwrap(), (10.0, 4.0));
}

#[test]
fn extra_lines_are_ignored() {
    let file = file_with("10\n4\n99\nnot a number\n");

    assert_eq!(load_operands(file.path()).unwrap(), (10.0, 4.0));
}

#[test]
fn short_files_are_rejected() {
    let file = file_with("10\n");

    let err = load_operands(file.path()).unwrap_err();

    assert!(matches!(err, DivideError::MissingOperands(1)));
}

#[test]
fn malformed_numbers_name_the_line() {
    let file = file_with("ten\n4\n");

    let err = load_operands(file.path()).unwrap_err();

    assert!(matches!(err, DivideError::MalformedNumber { line: 1, .. }));
}

#[test]
fn missing_files_surface_as_file_errors() {
    let err = load_operands(Path::new("/no/such/numbers.txt")).unwrap_err();

    assert!(matches!(err, DivideError::File(FileError::NotFound(_))));
}

#[test]
fn division_works_on_loaded_operands() {
    let lines = vec!["7.5".to_string(), "2.5".to_string()];
    let (dividend, divisor) = parse_operands(&lines).unwrap();

    assert_eq!(divide(dividend, divisor).unwrap(), 3.0);
}

#[test]
fn zero_divisor_is_rejected() {
    assert!(matches!(divide(10.0, 0.0), Err(DivideError::DivideByZero)));
}

#[test]
fn negative_numbers_divide() {
    assert_eq!(divide(-9.0, 3.0).unwrap(), -3.0);
}
