//! Error types for the Tongyi library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TongyiError`] enum. Errors only arise while loading a vocabulary or
//! compiling it into a dictionary; replacing text never fails.
//!
//! # Examples
//!
//! ```
//! use tongyi::error::{Result, TongyiError};
//!
//! fn load() -> Result<()> {
//!     Err(TongyiError::vocabulary("missing canonical column '名词'"))
//! }
//!
//! assert!(load().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tongyi operations.
#[derive(Error, Debug)]
pub enum TongyiError {
    /// I/O errors (reading vocabulary or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The vocabulary source is unusable (e.g. the canonical-term column is missing)
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// The pattern automaton could not be built
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TongyiError.
pub type Result<T> = std::result::Result<T, TongyiError>;

impl TongyiError {
    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        TongyiError::Vocabulary(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TongyiError::Config(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        TongyiError::Pattern(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TongyiError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TongyiError::vocabulary("no canonical column");
        assert_eq!(error.to_string(), "Vocabulary error: no canonical column");

        let error = TongyiError::config("bad brand list");
        assert_eq!(error.to_string(), "Config error: bad brand list");

        let error = TongyiError::invalid_argument("empty template");
        assert_eq!(error.to_string(), "Error: Invalid argument: empty template");
    }

    #[test]
    fn test_anyhow_conversion() {
        let error = TongyiError::from(anyhow::anyhow!("cannot open input"));
        assert!(matches!(error, TongyiError::Anyhow(_)));
        assert_eq!(error.to_string(), "Anyhow error: cannot open input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TongyiError::from(io_error);

        match error {
            TongyiError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
