//! # webchat-widget
//!
//! Leptos + WASM chat widget that embeds into any host page.
//!
//! The bundle installs `window.renderWebchatWidget(target?, options?)` at
//! load time and renders itself into an isolated shadow-root container when
//! the page has none. Each mounted widget keeps its own transcript and talks
//! to a single JSON chat endpoint.
//!
//! Browser-only code is gated behind the `csr` feature; state, config,
//! markdown and mount bootstrap logic compile and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod mount;
pub mod net;
pub mod state;
pub mod styles;
pub mod util;
