//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the message relay and the immutable runtime config; both are cheap
//! to clone.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::relay::Relay;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        let relay = Relay::new(config.queue_capacity);
        Self { relay, config: Arc::new(config) }
    }
}
