use super::*;

#[test]
fn request_serializes_message_field() {
    let json = serde_json::to_value(ChatRequest::new("  hi there ")).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "  hi there " }));
}

#[test]
fn response_decodes_reply() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":"hello"}"#).unwrap();
    assert_eq!(resp.reply_text(), Some("hello"));
}

#[test]
fn response_without_reply_decodes_as_empty() {
    let resp: ChatResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.reply, "");
    assert_eq!(resp.reply_text(), None);
}

#[test]
fn response_with_null_reply_decodes_as_empty() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":null}"#).unwrap();
    assert_eq!(resp.reply, "");
    assert_eq!(resp.reply_text(), None);
}

#[test]
fn response_ignores_unknown_fields() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":"ok","model":"x"}"#).unwrap();
    assert_eq!(resp.reply_text(), Some("ok"));
}

#[test]
fn response_with_non_string_reply_is_rejected() {
    assert!(serde_json::from_str::<ChatResponse>(r#"{"reply":42}"#).is_err());
}

#[test]
fn error_body_round_trips_through_json() {
    let body = ErrorBody::new("unauthorized");
    let text = serde_json::to_string(&body).unwrap();
    assert_eq!(text, r#"{"error":"unauthorized"}"#);
}

#[test]
fn default_api_url_points_at_chat_endpoint() {
    assert!(DEFAULT_API_URL.ends_with("/chat"));
}
