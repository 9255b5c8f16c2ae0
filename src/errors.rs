//! Error taxonomy for the account ledger and the file-driven utilities.
//!
//! Every failure here is recoverable: the operation that produced it is an
//! atomic no-op, and callers are expected to report the message and retry.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures produced by account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(f64),
    #[error("insufficient balance: requested {requested:.2}, available {available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },
    #[error("savings withdrawal limit reached: one withdrawal per month (last on {})", .last.date_naive())]
    WithdrawalLimitExceeded { last: DateTime<Utc> },
}

/// Failures produced by the in-memory account registry.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("an account numbered {0} already exists")]
    DuplicateNumber(String),
    #[error("no account numbered {0}")]
    AccountNotFound(String),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Failures produced while dividing two numbers read from a file.
#[derive(Debug, Error)]
pub enum DivideError {
    #[error(transparent)]
    File(#[from] FileError),
    #[error("the file must contain at least two numbers, found {0}")]
    MissingOperands(usize),
    #[error("line {line} is not a number: `{text}`")]
    MalformedNumber { line: usize, text: String },
    #[error("division by zero")]
    DivideByZero,
}

/// Classified file-access failures. Only [`FileError::Locked`] is worth
/// retrying after a delay; the others need a different path or permissions.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("access denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("file is locked by another process: {}", .0.display())]
    Locked(PathBuf),
    #[error("could not read {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    pub(crate) fn classify(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::ResourceBusy | io::ErrorKind::WouldBlock => {
                FileError::Locked(path.to_path_buf())
            }
            _ => FileError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Whether waiting and trying the same path again can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FileError::Locked(_))
    }
}
