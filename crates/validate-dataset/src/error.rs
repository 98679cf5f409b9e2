//! Error types for dataset validation
//!
//! Covers local file access, HTTP transport, and response decoding failures.
//! A validator verdict of `FAILURE` is not an error; see
//! [`ValidationOutcome`](crate::validation::ValidationOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for validation operations
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The metadata file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The metadata file exists but could not be read as text
    #[error("File error: {0}")]
    FileError(String),

    /// The validation service could not be reached or answered with a non-2xx status
    #[error("Could not reach validation service: {0}")]
    Transport(String),

    /// The validation service answered with a body that is not JSON
    #[error("Invalid response from validation service: {0}")]
    InvalidResponse(String),

    /// The report could not be written to the console
    #[error("Output error: {0}")]
    Output(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    ClientSetup(String),
}

impl ValidationError {
    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        ValidationError::FileError(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ValidationError::Transport(msg.into())
    }

    /// Check if this error was caused by local input rather than the remote service
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ValidationError::FileNotFound(_) | ValidationError::FileError(_)
        )
    }
}

// File reads map their io errors explicitly; a bare io::Error comes from the console writer.
impl From<std::io::Error> for ValidationError {
    fn from(err: std::io::Error) -> Self {
        ValidationError::Output(err.to_string())
    }
}

impl From<reqwest::Error> for ValidationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ValidationError::InvalidResponse(err.to_string())
        } else {
            ValidationError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::InvalidResponse(format!("JSON error: {}", err))
    }
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
