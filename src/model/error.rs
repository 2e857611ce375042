//! Error types for the tabview shell.
//!
//! The table core (filter, sort, paginate, view state) is made of total
//! functions and has no error type. Everything that touches the outside world
//! reports through the hierarchy below, composed with `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary's main logic
//!   - [`InputError`] - Reading or decoding the record source
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup
//!   - `std::io::Error` - Terminal failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load records.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Invalid configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl From<crate::view::TuiError> for AppError {
    fn from(err: crate::view::TuiError) -> Self {
        match err {
            crate::view::TuiError::Io(e) => AppError::Terminal(e),
            crate::view::TuiError::Input(e) => AppError::Input(e),
        }
    }
}

/// Errors encountered while loading records from a file or stdin.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tabview::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The given file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given by the user.
        path: PathBuf,
    },

    /// No file was given and stdin is a terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// A JSON array document failed to parse.
    #[error("Invalid JSON: {reason}")]
    InvalidJson {
        /// Decoder message.
        reason: String,
    },

    /// A JSON Lines record failed to parse.
    #[error("Invalid JSON on line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Decoder message.
        reason: String,
    },

    /// The document is valid JSON but not an array of records.
    #[error("Expected a JSON array of objects or JSON Lines")]
    NotAnArray,

    /// A record is not a JSON object.
    #[error("Record {index} is not a JSON object")]
    NotAnObject {
        /// 0-based record index.
        index: usize,
    },

    /// The background loader stopped without delivering records.
    #[error("Record loader stopped unexpectedly")]
    LoaderDisconnected,

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
