//! Store API-specific error types.

/// Errors that can occur during store API operations. Transport failures,
/// non-success statuses, and payload schema violations are distinct kinds so
/// callers can tell a network problem from a malformed response.
#[derive(Debug, thiserror::Error)]
pub enum PlatziError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API request failed with status {status}")]
    Status { status: u16 },

    /// Response body did not match the expected schema
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}
