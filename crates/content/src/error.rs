//! Error model for the content client.

use thiserror::Error;

/// Result type used across the content client.
pub type ContentResult<T> = Result<T, ContentError>;

/// Failure of a content query.
///
/// Keep this focused on the one failure class the storefront has: a
/// read-only query that did not produce a usable record sequence. The view
/// converts these to display strings at its boundary.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("content query transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("content backend returned status {status}")]
    Status { status: u16 },

    /// The response body did not decode as the expected envelope.
    #[error("malformed content response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ContentError {
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }
}
