//! Error types for the proxy crate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while proxying a request.
///
/// Every variant reaches the caller as `{"error": "<message>"}`. A failed
/// backend call is still a 200 so SDK callers parse the body instead of
/// seeing a transport failure.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound call to the backend failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request info payload cannot be forwarded as a header.
    #[error("invalid request info: {0}")]
    InvalidRequestInfo(String),

    /// The proxy was configured with an unusable backend.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::Transport(_) => StatusCode::OK,
            ProxyError::InvalidRequestInfo(_) => StatusCode::BAD_REQUEST,
            ProxyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
