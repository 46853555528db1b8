//! Error types for resource loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The path configuration file could not be opened.
    #[error("cannot open path configuration '{}': {source}", .path.display())]
    ConfigOpen {
        /// Path to the file that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The path configuration file contains a missing or malformed token.
    #[error("malformed path configuration '{}': {message}", .path.display())]
    ConfigParse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Which token was missing or malformed.
        message: String,
    },
}

impl From<ResourceError> for brew_core::Error {
    fn from(err: ResourceError) -> Self {
        brew_core::Error::Config(err.to_string())
    }
}

/// Result type alias for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;
