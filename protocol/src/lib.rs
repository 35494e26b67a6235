//! Shared wire model for the widget <-> relay chat exchange.
//!
//! This crate owns the JSON bodies used by both the `widget` (browser side)
//! and the relay server. One exchange is a single `POST` carrying a
//! [`ChatRequest`] and answered by a [`ChatResponse`].

use serde::{Deserialize, Deserializer, Serialize};

/// Backend the widget talks to when the host page does not configure one.
pub const DEFAULT_API_URL: &str = "https://homin.dev/webchat-relay/chat";

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's text, exactly as typed.
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body of a successful `POST /chat` response.
///
/// `reply` decodes to empty when the field is missing or `null`; callers
/// decide how to display an empty reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reply: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatResponse {
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }

    /// The reply text, or `None` when the backend sent nothing usable.
    #[must_use]
    pub fn reply_text(&self) -> Option<&str> {
        if self.reply.is_empty() { None } else { Some(self.reply.as_str()) }
    }
}

/// Error body returned by the relay for rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
