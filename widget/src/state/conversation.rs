//! Conversation transcript and submission-cycle state.
//!
//! DESIGN
//! ======
//! One `ConversationState` per mounted widget. A submission cycle is
//! `Idle -> Submitting -> Idle`: `begin_submission` appends the user's
//! message and flips `busy`, `settle` appends exactly one bot message and
//! releases `busy`. While busy every new submission is rejected, so the
//! transcript receives user/bot pairs in submission order.
//!
//! The user message is appended before the request is issued and the input
//! buffer is only cleared once the request settles.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::cell::RefCell;

use leptos::prelude::*;
use webchat_protocol::{ChatRequest, ChatResponse};

use crate::net::api::{BackendError, ChatBackend};

/// Shown when the backend answers without a usable `reply`.
pub const NO_RESPONSE_TEXT: &str = "No response";

/// Shown when the request fails for any reason.
pub const BACKEND_ERROR_TEXT: &str = "Error contacting backend.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label rendered in front of the message text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
        }
    }

    /// Modifier class used by the stylesheet for alignment.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { sender, text: text.into() }
    }

    #[must_use]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Where the widget is in its submission cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Visible widget state: panel toggle, transcript, input buffer, busy flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    input: String,
    open: bool,
    busy: bool,
}

impl ConversationState {
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.busy { Phase::Submitting } else { Phase::Idle }
    }

    /// Whether a send action would start a new cycle right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// Replace the input buffer. Ignored while a request is in flight, since
    /// the buffer still belongs to the pending cycle.
    pub fn set_input(&mut self, text: String) {
        if self.busy {
            return;
        }
        self.input = text;
    }

    /// Flip panel visibility. Never touches the transcript or an in-flight
    /// request.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Start a submission cycle.
    ///
    /// Returns the request to send, or `None` when the input is blank or a
    /// cycle is already running (in which case nothing changes).
    pub fn begin_submission(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }
        self.busy = true;
        self.messages.push(Message::new(Sender::User, self.input.clone()));
        Some(ChatRequest::new(self.input.clone()))
    }

    /// Finish the running cycle with the backend outcome.
    ///
    /// Appends exactly one bot message, clears the input and releases the
    /// busy flag. Does nothing when no cycle is running.
    pub fn settle(&mut self, outcome: Result<ChatResponse, BackendError>) {
        if !self.busy {
            log::warn!("webchat: ignoring backend outcome with no pending submission");
            return;
        }
        let text = match &outcome {
            Ok(resp) => resp.reply_text().unwrap_or(NO_RESPONSE_TEXT),
            Err(_) => BACKEND_ERROR_TEXT,
        };
        self.messages.push(Message::new(Sender::Bot, text));
        self.input.clear();
        self.busy = false;
    }
}

/// Shared handle to a widget's [`ConversationState`].
///
/// Implemented for the reactive signal the components use and for a plain
/// `RefCell` so the submission cycle can run outside the browser.
pub trait ConversationStore {
    /// Apply `f` to the state. Returns `None` when the state no longer exists
    /// (e.g. the widget was unmounted while a request was in flight).
    fn modify<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationStore for RwSignal<ConversationState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ConversationStore for RefCell<ConversationState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one full submission cycle against `backend`.
///
/// Returns `false` when the send action was rejected by the guard (blank
/// input or busy) and no request was issued.
pub async fn submit<S, B>(store: &S, backend: &B) -> bool
where
    S: ConversationStore,
    B: ChatBackend,
{
    let Some(request) = store.modify(ConversationState::begin_submission).flatten() else {
        return false;
    };

    let outcome = backend.send(&request).await;
    if let Err(err) = &outcome {
        log::warn!("webchat: chat request failed: {err}");
    }

    if store.modify(|state| state.settle(outcome)).is_none() {
        log::debug!("webchat: widget state dropped before the reply arrived");
    }
    true
}
