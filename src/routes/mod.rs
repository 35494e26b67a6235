//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets post chat messages over plain HTTP; the processor attaches over a
//! WebSocket. Every route lives under the configured root path, and CORS is
//! wide open because the widget is embedded on arbitrary origins.


pub mod chat;
pub mod ws;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full relay router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let config = &state.config;

    let mut router = Router::new()
        .route(&config.route("/chat"), post(chat::handle_chat))
        .route(&config.route("/ws"), get(ws::handle_ws))
        .route(&config.route("/healthz"), get(healthz));

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving widget bundle");
        router = router.nest_service(&config.route("/widget"), ServeDir::new(dir));
    }

    router.layer(cors).layer(TraceLayer::new_for_http()).with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
