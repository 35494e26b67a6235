use super::*;

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::time::Duration;

use crate::state::test_helpers::{test_app_state, test_app_state_with};

async fn post(state: &AppState, body: &str) -> Response {
    handle_chat(State(state.clone()), HeaderMap::new(), Bytes::from(body.to_owned())).await.into_response()
}

async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// request validation
// =============================================================================

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let state = test_app_state();
    let resp = post(&state, "{not json").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());
}

#[tokio::test]
async fn missing_message_field_is_bad_request() {
    let state = test_app_state();
    let resp = post(&state, r#"{"text":"hi"}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// processor states
// =============================================================================

#[tokio::test]
async fn without_processor_replies_immediately() {
    let state = test_app_state();
    let resp = post(&state, r#"{"message":"hi"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({ "reply": "No processor connection" }));
}

#[tokio::test]
async fn processor_reply_is_prefixed() {
    let state = test_app_state();
    let mut lease = state.relay.lease().await;
    let processor = tokio::spawn(async move {
        let pending = lease.next().await.unwrap();
        assert_eq!(pending.content, "hi");
        pending.answer("hello".into());
        lease
    });

    let resp = post(&state, r#"{"message":"hi"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({ "reply": "Echo: hello" }));
    drop(processor.await.unwrap());
}

#[tokio::test]
async fn reply_prefix_is_configurable() {
    let state = test_app_state_with(|c| c.reply_prefix = String::new());
    let mut lease = state.relay.lease().await;
    tokio::spawn(async move {
        let pending = lease.next().await.unwrap();
        pending.answer("plain".into());
        lease
    });

    let resp = post(&state, r#"{"message":"hi"}"#).await;
    assert_eq!(json_body(resp).await, json!({ "reply": "plain" }));
}

#[tokio::test]
async fn silent_processor_times_out() {
    let state = test_app_state_with(|c| c.reply_timeout = Duration::from_millis(50));
    let _lease = state.relay.lease().await;

    let resp = post(&state, r#"{"message":"hi"}"#).await;
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json_body(resp).await, json!({ "reply": "Request timeout" }));
}

#[tokio::test]
async fn full_queue_times_out_instead_of_hanging() {
    let state = test_app_state_with(|c| {
        c.queue_capacity = 1;
        c.reply_timeout = Duration::from_millis(50);
    });
    let _lease = state.relay.lease().await;
    let (filler, _filler_rx) = PendingChat::new("filler".into(), None);
    state.relay.enqueue(filler).await.unwrap();

    let resp = tokio::time::timeout(Duration::from_secs(1), post(&state, r#"{"message":"hi"}"#))
        .await
        .expect("chat request should respect the reply timeout");
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json_body(resp).await, json!({ "reply": "Request timeout" }));
}

#[tokio::test]
async fn timed_out_message_is_skipped_by_processor() {
    let state = test_app_state_with(|c| c.reply_timeout = Duration::from_millis(50));
    let mut lease = state.relay.lease().await;

    let resp = post(&state, r#"{"message":"stale"}"#).await;
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let (fresh, _rx) = PendingChat::new("fresh".into(), None);
    state.relay.enqueue(fresh).await.unwrap();
    assert_eq!(lease.next().await.unwrap().content, "fresh");
}

#[tokio::test]
async fn processor_dropping_message_is_bad_gateway() {
    let state = test_app_state();
    let mut lease = state.relay.lease().await;
    tokio::spawn(async move {
        let pending = lease.next().await.unwrap();
        drop(pending);
        lease
    });

    let resp = post(&state, r#"{"message":"hi"}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(json_body(resp).await["error"].is_string());
}

// =============================================================================
// client_source
// =============================================================================

#[test]
fn source_prefers_first_forwarded_hop() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
    headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.9"));
    assert_eq!(client_source(&headers).as_deref(), Some("203.0.113.7"));
}

#[test]
fn source_falls_back_to_real_ip() {
    let mut headers = HeaderMap::new();
    headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.9"));
    assert_eq!(client_source(&headers).as_deref(), Some("10.0.0.9"));
}

#[test]
fn source_absent_without_proxy_headers() {
    assert_eq!(client_source(&HeaderMap::new()), None);
}
