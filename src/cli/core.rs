//! Error and control-flow types shared by the shell and its commands.

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::{AccountError, BankError, DivideError, FileError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command; the shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Divide(#[from] DivideError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Fatal shell error that terminates the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
