//! Error types shared across the workspace.

use thiserror::Error;

/// Top-level error type for the renderer.
#[derive(Error, Debug)]
pub enum Error {
    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),

    /// Path configuration errors (missing file, malformed tokens)
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using the workspace Error type.
pub type Result<T> = std::result::Result<T, Error>;
