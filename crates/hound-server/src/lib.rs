//! # hound-server
//!
//! The `hound-relay` HTTP server: telephony webhooks, a plain-text search
//! endpoint, and the browser-facing signing proxy from `hound-proxy`, all
//! on one router.

pub mod config;
pub mod observability;
pub mod state;
pub mod telephony;
pub mod twiml;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let proxy = hound_proxy::create_router(state.proxy.clone());

    telephony::router()
        .with_state(state)
        .merge(proxy)
        .layer(TraceLayer::new_for_http())
}
