//! Error types for content loading.
//!
//! - [`FetchError`] - Anything the transport can fail with
//! - [`LoadError`] - Failure of a whole load operation
//!
//! Neither type reaches the user directly: [`crate::RepoController`] turns
//! every [`LoadError`] into one generic notification.

use thiserror::Error;

/// Network/fetch-related errors reported by a [`crate::Transport`].
///
/// The loader does not distinguish between kinds; they exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection reset, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of a load operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A fetch was rejected.
    #[error(transparent)]
    Transport(#[from] FetchError),
    /// The payload did not have the shape the target kind requires.
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
