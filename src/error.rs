//! Request-level relay errors and their HTTP mapping.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webchat_protocol::{ChatResponse, ErrorBody};

/// Reply text sent when the processor misses the reply deadline.
pub const TIMEOUT_REPLY: &str = "Request timeout";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("processor did not reply in time")]
    Timeout,
    #[error("processor disconnected before replying")]
    ProcessorGone,
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::ProcessorGone => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        match self {
            // Timeouts keep the chat response shape so widgets can display them.
            Self::Timeout => (status, Json(ChatResponse::new(TIMEOUT_REPLY))).into_response(),
            other => (status, Json(ErrorBody::new(other.to_string()))).into_response(),
        }
    }
}
