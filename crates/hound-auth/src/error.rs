//! Error types for the auth crate.

use thiserror::Error;

/// Errors that can occur while preparing a signing key.
#[derive(Debug, Error)]
pub enum SignError {
    /// The client key is not valid base64url.
    #[error("failed to decode client key: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded key cannot be used for signing.
    #[error("invalid client key: {0}")]
    InvalidKey(String),
}
