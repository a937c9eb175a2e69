//! Error types for the poe.watch client.

use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse a JSON response
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// A coordinated update was attempted while one is running
    #[error("an update is already in progress")]
    UpdateInProgress,
    /// Item details were requested before all reference data was fetched
    #[error("API data is not updated")]
    NotReady,
    /// No catalog entry matches the given item properties
    #[error("invalid item properties")]
    InvalidItemQuery,
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
