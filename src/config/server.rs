//! HTTP server settings read from the environment.
//!
//! `HOST` and `PORT` may come from the process environment or from `.env`
//! (loaded by `main` before this module is consulted).

use crate::errors::{Error, Result};
use std::net::{IpAddr, SocketAddr};

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Host used when `HOST` is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Largest accepted JSON request body (2 MiB)
pub const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Listener and request limits for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Maximum request body size in bytes
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`, falling back to the defaults.
    ///
    /// # Errors
    /// Returns a configuration error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        Self::from_values(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| Error::Config {
                message: format!("Invalid PORT {raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            ..Self::default()
        })
    }

    /// Socket address to bind.
    ///
    /// IPv4 and IPv6 literals are used as-is; anything else (`localhost`, a
    /// hostname) is resolved and the first address returned wins.
    ///
    /// # Errors
    /// Returns a configuration error if `host` neither parses as an IP address
    /// nor resolves to one.
    pub async fn resolve_addr(&self) -> Result<SocketAddr> {
        let host = self.host.trim();
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let mut addrs = tokio::net::lookup_host((host, self.port))
            .await
            .map_err(|e| Error::Config {
                message: format!("Invalid listen address {host}:{}: {e}", self.port),
            })?;
        addrs.next().ok_or_else(|| Error::Config {
            message: format!("Listen address {host}:{} resolved to nothing", self.port),
        })
    }
}
