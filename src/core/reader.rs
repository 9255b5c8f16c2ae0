//! Text-file reading with classified, retryable failures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::errors::FileError;

/// Fixed backoff applied by callers before retrying a locked file.
pub const LOCKED_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Reads the file as UTF-8 text and returns its lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FileError> {
    let contents = fs::read_to_string(path).map_err(|err| FileError::classify(path, err))?;
    Ok(contents.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn lines_are_returned_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();

        let lines = read_lines(file.path()).unwrap();

        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn missing_files_are_classified() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();

        assert!(matches!(err, FileError::NotFound(_)));
        assert!(!err.is_retryable());
    }
}
