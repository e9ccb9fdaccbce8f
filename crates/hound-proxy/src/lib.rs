//! # hound-proxy
//!
//! The two endpoints a browser or device SDK needs so the client key never
//! leaves the server:
//!
//! - `GET /houndifyAuth?token=...`: sign a token with the client key
//! - `GET|POST /textSearchProxy`: forward a text query to the backend
//!   with an allow-listed subset of the caller's headers
//!
//! Transport failures never escape as errors. The caller always gets a 200
//! with either the backend body verbatim or `{"error": "<message>"}`.

pub mod auth;
pub mod error;
pub mod text;

use axum::{Router, routing::get};
use hound_auth::SigningKey;
use hound_core::BackendConfig;
use reqwest::Url;
use std::sync::Arc;

pub use error::ProxyError;
pub use text::forwarded_headers;

/// Shared state for the proxy handlers.
#[derive(Debug)]
pub struct ProxyState {
    signing_key: SigningKey,
    text_endpoint: Url,
    http: reqwest::Client,
}

impl ProxyState {
    /// Build proxy state with its own HTTP client.
    pub fn new(signing_key: SigningKey, backend: &BackendConfig) -> Result<Self, ProxyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = backend.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ProxyError::Config(format!("failed to build HTTP client: {e}")))?;
        Self::with_http_client(signing_key, backend, http)
    }

    /// Build proxy state around an existing HTTP client.
    pub fn with_http_client(
        signing_key: SigningKey,
        backend: &BackendConfig,
        http: reqwest::Client,
    ) -> Result<Self, ProxyError> {
        let text_endpoint = Url::parse(&backend.text_endpoint).map_err(|e| {
            ProxyError::Config(format!("invalid text endpoint {}: {e}", backend.text_endpoint))
        })?;
        Ok(Self {
            signing_key,
            text_endpoint,
            http,
        })
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn text_endpoint(&self) -> &Url {
        &self.text_endpoint
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The backend URL with the caller's raw query string appended.
    pub fn backend_url(&self, query: Option<&str>) -> Url {
        let mut url = self.text_endpoint.clone();
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let merged = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
                _ => query.to_string(),
            };
            url.set_query(Some(&merged));
        }
        url
    }
}

/// Create the router for the authentication and text proxy endpoints.
pub fn create_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/houndifyAuth", get(auth::houndify_auth))
        .route(
            "/textSearchProxy",
            get(text::text_search_proxy).post(text::text_search_proxy),
        )
        .with_state(state)
}
