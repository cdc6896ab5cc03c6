//! API server setup

use crate::{
    api::{AppState, create_router},
    config::server::ServerConfig,
    core::BudgetStore,
    errors::Result,
};
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// Binds the listener and serves the API until Ctrl-C.
///
/// # Errors
/// Returns an error if the listen address is invalid or the socket cannot be bound.
#[instrument(skip(store))]
pub async fn run_server(config: &ServerConfig, store: BudgetStore) -> Result<()> {
    let addr = config.resolve_addr().await?;
    let router = create_router(AppState::new(store), config.body_limit);

    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| error!("Failed to bind {addr}: {e}"))?;
    info!("server is running on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
