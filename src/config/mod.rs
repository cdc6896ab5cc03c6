/// Startup budget and envelope configuration from config.toml
pub mod budget;

/// HTTP server settings from environment variables
pub mod server;
