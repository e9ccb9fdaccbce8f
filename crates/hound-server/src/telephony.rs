//! Telephony webhooks and the plain-text search endpoint.
//!
//! Backend failures never reach the caller as errors: SMS and voice replies
//! fall back to the configured message so the provider always gets valid
//! TwiML.

use crate::state::AppState;
use crate::twiml::{MessagingResponse, VoiceResponse};
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use hound_client::HoundResponse;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/sms", post(sms))
        .route("/search", get(search))
        .route("/voice", post(voice))
        .route("/voice/city", post(voice_city))
        // Legacy webhook path still configured on older numbers.
        .route("/voice2", post(voice_city))
}

async fn root() -> &'static str {
    "Hello World"
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "hound-relay" }))
}

#[derive(Debug, Deserialize)]
pub struct SmsForm {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}

/// `POST /sms`: answer an inbound text message.
///
/// The sender's number keys the conversation so follow-up texts continue
/// the same thread.
async fn sms(State(state): State<Arc<AppState>>, Form(form): Form<SmsForm>) -> Response {
    if form.body.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "missing Body").into_response();
    }

    let from = form.from.as_deref().filter(|f| !f.is_empty());
    tracing::info!(from = from.unwrap_or("unknown"), "inbound sms");

    let reply = answer(&state, &form.body, from).await;
    let reply = reply.unwrap_or_else(|| state.telephony().fallback_message.clone());
    MessagingResponse::new().message(reply).into_response()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub thebigquestion: String,
}

/// `GET /search?thebigquestion=...`: answer as plain text.
async fn search(State(state): State<Arc<AppState>>, Query(params): Query<SearchParams>) -> Response {
    if params.thebigquestion.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "missing thebigquestion").into_response();
    }

    match answer(&state, &params.thebigquestion, None).await {
        Some(text) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response(),
        None => (
            StatusCode::BAD_GATEWAY,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            state.telephony().fallback_message.clone(),
        )
            .into_response(),
    }
}

/// `POST /voice`: greet the caller.
async fn voice(State(state): State<Arc<AppState>>) -> VoiceResponse {
    let telephony = state.telephony();
    VoiceResponse::new().say(Some(&telephony.voice), telephony.greeting.clone())
}

#[derive(Debug, Deserialize)]
pub struct CallForm {
    #[serde(rename = "FromCity", default)]
    pub from_city: Option<String>,
}

/// `POST /voice/city`: greet the caller by the city the provider reports.
async fn voice_city(State(state): State<Arc<AppState>>, Form(form): Form<CallForm>) -> VoiceResponse {
    let telephony = state.telephony();
    let greeting = match form.from_city.as_deref().filter(|c| !c.is_empty()) {
        Some(city) => format!("Never gonna give you up {city}."),
        None => "Never gonna give you up.".to_string(),
    };

    let mut response = VoiceResponse::new().say(Some(&telephony.voice), greeting);
    if let Some(url) = &telephony.hold_music_url {
        response = response.play(url.clone());
    }
    response
}

async fn answer(state: &AppState, query: &str, user_id: Option<&str>) -> Option<String> {
    match state.client.text_query(query, user_id).await {
        Ok(response) => reply_text(&response),
        Err(err) => {
            tracing::error!(error = %err, "text query failed");
            None
        }
    }
}

fn reply_text(response: &HoundResponse) -> Option<String> {
    let text = response.spoken_response()?;
    if text.is_empty() {
        tracing::warn!("backend returned an empty answer");
        return None;
    }
    Some(text.to_string())
}
