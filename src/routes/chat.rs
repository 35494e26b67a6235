//! `POST {root}/chat`: forward one widget message to the processor and wait
//! for its reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::{debug, info};
use webchat_protocol::{ChatRequest, ChatResponse};

use crate::error::RelayError;
use crate::relay::PendingChat;
use crate::state::AppState;

/// Reply sent when no processor is attached.
pub const NO_PROCESSOR_REPLY: &str = "No processor connection";

pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, RelayError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| RelayError::BadRequest(e.to_string()))?;

    if !state.relay.is_connected() {
        debug!("chat: no processor connected");
        return Ok(Json(ChatResponse::new(NO_PROCESSOR_REPLY)));
    }

    let (pending, reply_rx) = PendingChat::new(request.message, client_source(&headers));
    let id = pending.id;
    info!(%id, source = ?pending.source, "chat: forwarding message");

    // The deadline covers waiting for queue room as well as the reply.
    let exchange = async {
        state.relay.enqueue(pending).await?;
        reply_rx.await.map_err(|_| RelayError::ProcessorGone)
    };
    let reply = tokio::time::timeout(state.config.reply_timeout, exchange)
        .await
        .map_err(|_| RelayError::Timeout)??;

    info!(%id, "chat: reply delivered");
    Ok(Json(ChatResponse::new(format!("{}{reply}", state.config.reply_prefix))))
}

/// Originating client address from proxy headers: the first
/// `x-forwarded-for` hop, else `x-real-ip`.
pub(crate) fn client_source(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| headers.get("x-real-ip").and_then(|v| v.to_str().ok()).map(str::trim).filter(|v| !v.is_empty()))
        .map(str::to_owned)
}
