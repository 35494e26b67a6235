//! Processor WebSocket: drains the relay queue one message at a time.
//!
//! LIFECYCLE
//! =========
//! 1. Bearer check (when a secret is configured) → upgrade
//! 2. Wait for the processor lease; a second processor queues here
//! 3. Loop: next pending message → text frame out → one text frame back →
//!    reply to the waiting chat request
//! 4. Close or error → lease dropped → relay reports "no processor"

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Response};
use tracing::{debug, info, warn};

use crate::error::RelayError;
use crate::relay::Relay;
use crate::state::AppState;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, headers: HeaderMap, ws: WebSocketUpgrade) -> Response {
    if !authorized(state.config.secret.as_deref(), &headers) {
        return RelayError::Unauthorized.into_response();
    }
    ws.on_upgrade(move |socket| run_processor(socket, state.relay))
}

/// Without a secret every connection is accepted; with one the request must
/// carry `Authorization: Bearer <secret>`.
pub(crate) fn authorized(secret: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(secret) = secret else {
        return true;
    };
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| token == secret)
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_processor(mut socket: WebSocket, relay: Relay) {
    let mut lease = tokio::select! {
        lease = relay.lease() => lease,
        () = wait_for_close(&mut socket) => {
            debug!("ws: waiting processor left before acquiring the queue");
            return;
        }
    };
    info!("ws: processor connected");

    loop {
        let pending = tokio::select! {
            next = lease.next() => {
                let Some(pending) = next else { break };
                pending
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    Some(Ok(_)) => {
                        debug!("ws: ignoring unsolicited processor frame");
                        continue;
                    }
                }
            }
        };

        let id = pending.id;
        if let Err(e) = socket.send(Message::Text(pending.content.clone().into())).await {
            warn!(%id, error = %e, "ws: write to processor failed");
            break;
        }

        let Some(reply) = recv_text(&mut socket).await else {
            warn!(%id, "ws: processor closed before replying");
            break;
        };

        let waited_ms = pending.received_at.elapsed().as_millis();
        if pending.answer(reply) {
            debug!(%id, waited_ms, "ws: reply forwarded");
        } else {
            debug!(%id, "ws: requester gave up before the reply");
        }
    }

    drop(lease);
    info!("ws: processor disconnected");
}

/// Next text frame from the processor, skipping other frame kinds. `None`
/// once the socket closes or errors.
async fn recv_text(socket: &mut WebSocket) -> Option<String> {
    loop {
        match socket.recv().await? {
            Ok(Message::Text(text)) => return Some(text.as_str().to_owned()),
            Ok(Message::Close(_)) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Resolve once the peer closes, discarding anything it sends meanwhile.
async fn wait_for_close(socket: &mut WebSocket) {
    while let Some(Ok(msg)) = socket.recv().await {
        if matches!(msg, Message::Close(_)) {
            return;
        }
    }
}
