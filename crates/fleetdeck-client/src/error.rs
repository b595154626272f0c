//! Error types for the Fleetdeck API client.

use thiserror::Error;

use fleetdeck_core::AppError;

/// Errors that can occur when talking to the fleet admin API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned a non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => AppError::Network(e),
            other => AppError::Store(other.to_string()),
        }
    }
}
