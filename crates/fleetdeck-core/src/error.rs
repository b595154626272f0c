//! Unified error types for Fleetdeck Core.

use thiserror::Error;

/// Main error type for all Fleetdeck operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Network request failed (HTTP client).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record store rejected or failed an operation.
    #[error("Record store error: {0}")]
    Store(String),

    /// Host operation failed (not found, not yet persisted, etc.).
    #[error("Host error: {0}")]
    Host(String),

    /// Unclassified error with message.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for Fleetdeck operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Unknown(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Unknown(s.to_string())
    }
}
