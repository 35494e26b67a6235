//! Networking for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single `POST` exchange with the chat backend. Wire types
//! come from `webchat-protocol`, shared with the relay server.

pub mod api;
