//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the per-instance `RwSignal<ConversationState>`
//! provided by `WebchatApp`; none of them hold conversation state locally.

pub mod chat_panel;
pub mod message_list;
pub mod toggle_button;
