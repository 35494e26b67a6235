//! HTTP transport for the chat exchange.
//!
//! Client-side (csr): real `POST` via `gloo-net`, optionally raced against a
//! `gloo-timers` timeout.
//! Native builds: [`HttpBackend`] reports [`BackendError::Unavailable`] so the
//! component tree still compiles and tests use their own [`ChatBackend`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is folded into [`BackendError`]; the conversation
//! state turns any of them into the same user-visible error message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use webchat_protocol::{ChatRequest, ChatResponse};

use crate::config::WidgetConfig;

/// Failure of a single chat request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The response body was not a valid `ChatResponse`.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No response within the configured bound (milliseconds).
    #[error("no response within {0} ms")]
    Timeout(u32),
    /// HTTP is only available in the browser build.
    #[error("chat backend unavailable outside the browser")]
    Unavailable,
}

/// Something that can answer a [`ChatRequest`].
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;
}

/// JSON-over-HTTP backend at a fixed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    url: String,
    timeout_ms: Option<u32>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout_ms: Option<u32>) -> Self {
        Self { url: url.into(), timeout_ms }
    }

    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout_ms)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }
}

impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        #[cfg(feature = "csr")]
        {
            match self.timeout_ms {
                Some(ms) => with_timeout(post_chat(&self.url, request), ms).await,
                None => post_chat(&self.url, request).await,
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(BackendError::Unavailable)
        }
    }
}

/// Map an HTTP status to success or [`BackendError::Status`].
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), BackendError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(BackendError::Status(status)) }
}

/// Decode a response body into a [`ChatResponse`].
#[cfg(any(test, feature = "csr"))]
fn decode_response(body: &str) -> Result<ChatResponse, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn post_chat(url: &str, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
    let resp = gloo_net::http::Request::post(url)
        .json(request)
        .map_err(|e| BackendError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;
    check_status(resp.status())?;
    let body = resp.text().await.map_err(|e| BackendError::Transport(e.to_string()))?;
    decode_response(&body)
}

#[cfg(feature = "csr")]
async fn with_timeout<F>(request: F, timeout_ms: u32) -> Result<ChatResponse, BackendError>
where
    F: std::future::Future<Output = Result<ChatResponse, BackendError>>,
{
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(BackendError::Timeout(timeout_ms)),
    }
}
