//! Widget state.
//!
//! Each mounted widget owns one `ConversationState` behind a signal.

pub mod conversation;
