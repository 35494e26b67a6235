mod config;
mod error;
mod relay;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");
    let addr = config.addr;
    if !config.root_path.is_empty() {
        tracing::info!(root_path = %config.root_path, "serving under root path");
    }
    if config.secret.is_none() {
        tracing::warn!("processor socket accepts unauthenticated connections");
    }

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "webchat relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
