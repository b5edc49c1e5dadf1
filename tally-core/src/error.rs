//! Structured error types for tally-core.
//!
//! Uses `thiserror` for better API surface and error composition.
//! The binary crate (tally-cli) can still use `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for tally-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Required environment variable missing
    #[error("Missing required environment variable '{name}'")]
    MissingEnv { name: &'static str },

    /// Environment variable present but unparseable
    #[error("Invalid value for environment variable '{name}': {reason}")]
    InvalidEnv { name: &'static str, reason: String },
}

/// Result type alias for tally-core operations
pub type Result<T> = std::result::Result<T, CoreError>;
