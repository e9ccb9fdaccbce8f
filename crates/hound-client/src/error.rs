//! Error types for the client crate.

use thiserror::Error;

/// Errors that can occur while querying the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP request failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend reported a failed query.
    #[error("backend error: {0}")]
    Backend(String),

    /// A header value could not be encoded.
    #[error("invalid header value: {0}")]
    Header(String),

    /// Client configuration issue.
    #[error("configuration error: {0}")]
    Config(String),
}
