//! Error types for the dinner decider
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dinner decider operations
pub type DeciderResult<T> = Result<T, DeciderError>;

/// Main error type for dinner decider operations
#[derive(Error, Debug)]
pub enum DeciderError {
    /// The meal list could not be found or read
    #[error("could not find the meal list at {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Configuration file failed to parse
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Console or file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
