//! Full-stack tests: real `AppState::init` against a mock backend.
//!
//! Run with: cargo test --package hound-server --test relay

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use hound_core::RelayConfig;
use hound_server::{AppState, build_router};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(text_endpoint: String) -> RelayConfig {
    RelayConfig::from_toml(&format!(
        r#"
[credentials]
client_id = "relay-client"
client_key = "dGVzdGtleQ"

[backend]
text_endpoint = "{text_endpoint}"
timeout_secs = 5

[telephony]
fallback_message = "Try again later."
"#
    ))
    .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn sms(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/sms")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_sms_round_trip_keeps_conversation_per_sender() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/text"))
        .and(query_param("query", "what is the weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "OK",
            "AllResults": [{
                "SpokenResponse": "It is sunny.",
                "ConversationState": {"turn": 1}
            }]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let cfg = config(format!("{}/v1/text", mock_server.uri()));
    let app = build_router(Arc::new(AppState::init(&cfg).unwrap()));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(sms("Body=what+is+the+weather&From=%2B15551234567"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            body_string(response)
                .await
                .contains("<Message>It is sunny.</Message>")
        );
    }

    let received = mock_server.received_requests().await.unwrap();
    let info: serde_json::Value =
        serde_json::from_slice(received[1].headers["hound-request-info"].as_bytes()).unwrap();
    assert_eq!(info["ClientID"], json!("relay-client"));
    assert_eq!(info["UserID"], json!("+15551234567"));
    assert_eq!(info["ConversationState"], json!({"turn": 1}));
}

#[tokio::test]
async fn test_sms_backend_rejection_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "Error",
            "ErrorMessage": "Authentication failed"
        })))
        .mount(&mock_server)
        .await;

    let cfg = config(format!("{}/v1/text", mock_server.uri()));
    let app = build_router(Arc::new(AppState::init(&cfg).unwrap()));

    let response = app.oneshot(sms("Body=hi&From=%2B1555")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_string(response)
            .await
            .contains("<Message>Try again later.</Message>")
    );
}

#[tokio::test]
async fn test_proxy_and_telephony_share_one_router() {
    let mock_server = MockServer::start().await;
    let backend_body = r#"{"Status":"OK"}"#;

    Mock::given(method("GET"))
        .and(path("/v1/text"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(backend_body, "application/json"))
        .mount(&mock_server)
        .await;

    let cfg = config(format!("{}/v1/text", mock_server.uri()));
    let app = build_router(Arc::new(AppState::init(&cfg).unwrap()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/textSearchProxy?query=hi")
                .header("Hound-Request-Authentication", "user;req-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, backend_body);

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_init_without_client_key_fails() {
    let err = AppState::init(&RelayConfig::default()).err().unwrap();
    assert!(err.to_string().contains("no client key configured"));
}

#[test]
fn test_init_with_malformed_key_fails() {
    let cfg = RelayConfig::from_toml(
        r#"
[credentials]
client_id = "relay-client"
client_key = "not base64!"
"#,
    )
    .unwrap();
    assert!(AppState::init(&cfg).is_err());
}

#[test]
fn test_init_with_blank_key_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let key_file = dir.path().join("client_key");
    std::fs::write(&key_file, "\n").unwrap();

    let cfg = RelayConfig::from_toml(&format!(
        r#"
[credentials]
client_id = "relay-client"
client_key_file = "{}"
"#,
        key_file.display()
    ))
    .unwrap();

    let err = AppState::init(&cfg).err().unwrap();
    assert!(err.to_string().contains("no client key configured"));
}

#[tokio::test]
async fn test_proxy_transport_failure_is_ok_with_error_body() {
    let cfg = config("http://127.0.0.1:1/v1/text".to_string());
    let app = build_router(Arc::new(AppState::init(&cfg).unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/textSearchProxy?query=hi")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("transport error:"));
}
