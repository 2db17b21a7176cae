//! Error types for the antimat library.
//!
//! The text transforms themselves are total: detection and masking never fail
//! on well-formed input. Errors come from the edges of the system, namely
//! pattern compilation, lexicon providers, configuration files and the CLI.
//! All of them are represented by the [`AntimatError`] enum.
//!
//! # Examples
//!
//! ```
//! use antimat::error::{AntimatError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(AntimatError::lexicon("word contains whitespace"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for antimat operations.
#[derive(Error, Debug)]
pub enum AntimatError {
    /// I/O errors (lexicon files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pattern compilation or evaluation errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Invalid lexicon words or provider failures
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors from third-party builders, such as substitution automata
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AntimatError.
pub type Result<T> = std::result::Result<T, AntimatError>;

impl AntimatError {
    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        AntimatError::Pattern(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        AntimatError::Lexicon(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AntimatError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AntimatError::InvalidArgument(msg.into())
    }
}

impl From<fancy_regex::Error> for AntimatError {
    fn from(err: fancy_regex::Error) -> Self {
        AntimatError::Pattern(err.to_string())
    }
}
