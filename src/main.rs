use envelope_budget::{
    api::server,
    config::{budget, server::ServerConfig},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Build the store from the startup configuration
    let budget_config = budget::load_startup_config()
        .inspect_err(|e| error!("Failed to load budget configuration: {e}"))?;
    let store = budget_config
        .build_store()
        .inspect_err(|e| error!("Invalid budget configuration: {e}"))?;
    info!(
        budget = store.budget(),
        envelopes = store.len(),
        transfer_mode = ?store.transfer_mode(),
        "Budget store initialized"
    );

    // 4. Serve the API
    let server_config = ServerConfig::from_env()
        .inspect_err(|e| error!("Failed to read server configuration: {e}"))?;
    server::run_server(&server_config, store).await
}
