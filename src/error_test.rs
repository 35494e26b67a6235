use super::*;

use serde_json::{Value, json};

async fn render(err: RelayError) -> (StatusCode, Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn bad_request_carries_reason() {
    let (status, body) = render(RelayError::BadRequest("expected value".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "expected value" }));
}

#[tokio::test]
async fn unauthorized_matches_processor_contract() {
    let (status, body) = render(RelayError::Unauthorized).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "unauthorized" }));
}

#[tokio::test]
async fn timeout_keeps_chat_shape() {
    let (status, body) = render(RelayError::Timeout).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body, json!({ "reply": "Request timeout" }));
}

#[tokio::test]
async fn processor_gone_is_bad_gateway() {
    let (status, body) = render(RelayError::ProcessorGone).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("processor"));
}
