use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the listen address from the loaded configuration.
pub fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad listen address {addr}: {e}")))
}

/// Assemble the router for a given configuration (no socket involved).
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::from_config(&cfg.store);
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    // no-op when the binary already installed a subscriber
    init_logging_default();

    let cfg = AppConfig::load_and_validate()?;
    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    info!(%addr, seed = cfg.store.seed, "starting record server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
