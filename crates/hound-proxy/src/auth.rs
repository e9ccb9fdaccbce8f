//! `GET /houndifyAuth`: sign a client-supplied token.

use crate::ProxyState;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    #[serde(default)]
    token: Option<String>,
}

/// Respond with the base64url HMAC-SHA256 of `token` as plain text.
///
/// A missing or empty token is signed as the empty string. Callers are
/// expected to always send one.
pub async fn houndify_auth(
    State(state): State<Arc<ProxyState>>,
    Query(query): Query<AuthQuery>,
) -> impl IntoResponse {
    let token = query.token.unwrap_or_default();
    if token.is_empty() {
        tracing::warn!("authentication request without a token, signing the empty string");
    }
    tracing::debug!(token_len = token.len(), "signing authentication token");

    let signature = state.signing_key().sign(&token);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], signature)
}
