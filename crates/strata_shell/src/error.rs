//! # Shell Error Types

use strata_core::ArenaError;
use thiserror::Error;

/// Errors that stop the shell.
///
/// A full arena is not one of them: allocation failures are reported to
/// the user and the menu loop carries on.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Arena construction failed.
    #[error(transparent)]
    Arena(#[from] ArenaError),

    /// Bad command-line arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// The log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
