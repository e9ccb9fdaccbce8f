//! `GET|POST /textSearchProxy`: forward a text query to the backend.
//!
//! Only an allow-list of `Hound-*` headers crosses the proxy. Cookies,
//! authorization headers and anything else the caller sent stay behind.

use crate::ProxyState;
use crate::error::ProxyError;
use axum::body::{Body, Bytes};
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use hound_core::headers;
use std::sync::Arc;

/// Headers copied from the inbound request when present.
const ALLOWED_HEADERS: [&str; 4] = [
    headers::REQUEST_AUTHENTICATION,
    headers::CLIENT_AUTHENTICATION,
    headers::INPUT_LANGUAGE_ENGLISH_NAME,
    headers::INPUT_LANGUAGE_IETF_TAG,
];

/// Forward the query string and allow-listed headers, relay the body back.
///
/// GET callers send request info in the `Hound-Request-Info` header. POST
/// callers whose request info would not fit in a header send it as the body.
pub async fn text_search_proxy(
    State(state): State<Arc<ProxyState>>,
    RawQuery(query): RawQuery,
    inbound: HeaderMap,
    body: Bytes,
) -> Response {
    match forward(&state, query.as_deref(), &inbound, &body).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "text proxy request failed");
            err.into_response()
        }
    }
}

async fn forward(
    state: &ProxyState,
    query: Option<&str>,
    inbound: &HeaderMap,
    body: &[u8],
) -> Result<Response, ProxyError> {
    let outbound = forwarded_headers(inbound, body)?;
    let url = state.backend_url(query);

    tracing::info!(
        backend = %state.text_endpoint(),
        headers = outbound.len(),
        "forwarding text query"
    );

    let resp = state.http().get(url).headers(outbound).send().await?;
    let backend_status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = resp.bytes().await?;

    tracing::debug!(
        status = backend_status.as_u16(),
        bytes = bytes.len(),
        "relaying backend response"
    );

    let mut response = Response::new(Body::from(bytes));
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// Build the outbound header set from the allow-list.
///
/// Request info comes from the `Hound-Request-Info` header when the caller
/// set one, otherwise from a JSON body, compacted onto a single line.
pub fn forwarded_headers(inbound: &HeaderMap, body: &[u8]) -> Result<HeaderMap, ProxyError> {
    let mut outbound = HeaderMap::new();

    for name in ALLOWED_HEADERS {
        let name = header_name(name)?;
        if let Some(value) = non_empty(inbound, &name) {
            outbound.insert(name, value.clone());
        }
    }

    let request_info = header_name(headers::REQUEST_INFO)?;
    let value = match non_empty(inbound, &request_info) {
        Some(value) => Some(value.clone()),
        None => request_info_from_body(body)?,
    };
    if let Some(value) = value {
        outbound.insert(request_info, value);
    }

    Ok(outbound)
}

/// `http` lowercases on parse, so the canonical casing is accepted here.
fn header_name(name: &str) -> Result<HeaderName, ProxyError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ProxyError::Config(format!("invalid header name {name}: {e}")))
}

fn non_empty<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a HeaderValue> {
    headers.get(name).filter(|v| !v.as_bytes().is_empty())
}

fn request_info_from_body(body: &[u8]) -> Result<Option<HeaderValue>, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let json: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ProxyError::InvalidRequestInfo(format!("body is not valid JSON: {e}")))?;
    let compact = serde_json::to_string(&json)
        .map_err(|e| ProxyError::InvalidRequestInfo(e.to_string()))?;

    HeaderValue::from_bytes(compact.as_bytes())
        .map(Some)
        .map_err(|e| ProxyError::InvalidRequestInfo(e.to_string()))
}
