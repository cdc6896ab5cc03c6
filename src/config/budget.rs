//! Startup budget configuration loaded from config.toml
//!
//! This module provides functionality to load the initial budget figure, the
//! initial envelopes and the transfer mode from a TOML configuration file. The
//! values seed the in-memory store once at process start.

use crate::{
    core::BudgetStore,
    errors::{Error, Result},
    models::{EnvelopeDraft, TransferMode},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "BUDGET_CONFIG";

/// Config file used when [`CONFIG_PATH_VAR`] is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct BudgetConfig {
    /// Initial budget figure
    #[serde(default)]
    pub budget: f64,
    /// What a transfer does to the source envelope
    #[serde(default)]
    pub transfer_mode: TransferMode,
    /// Envelopes to seed, in listing order
    #[serde(default)]
    pub envelopes: Vec<EnvelopeConfig>,
}

/// Configuration for a single envelope
#[derive(Debug, Deserialize, Clone)]
pub struct EnvelopeConfig {
    /// Name of the envelope
    pub name: String,
    /// Initial amount
    pub amount: f64,
}

impl BudgetConfig {
    /// Builds the store described by this configuration.
    ///
    /// # Errors
    /// Returns a validation error if the budget or any envelope is invalid
    /// (blank name, non-finite amount).
    pub fn build_store(&self) -> Result<BudgetStore> {
        let drafts: Vec<EnvelopeDraft> = self
            .envelopes
            .iter()
            .map(|envelope| EnvelopeDraft::new(envelope.name.clone(), envelope.amount))
            .collect();
        BudgetStore::with_envelopes(self.budget, &drafts, self.transfer_mode)
    }
}

/// Loads budget configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BudgetConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load budget configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the startup configuration.
///
/// Reads the file named by `BUDGET_CONFIG` if set, which must then exist.
/// Otherwise reads `./config.toml`, falling back to an empty budget when that
/// file is absent.
pub fn load_startup_config() -> Result<BudgetConfig> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        info!("Loading budget configuration from {CONFIG_PATH_VAR}={path}");
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("Loading budget configuration from {DEFAULT_CONFIG_PATH}");
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        warn!("{DEFAULT_CONFIG_PATH} not found, starting with an empty budget");
        Ok(BudgetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_parse_budget_config() {
        let toml_str = r#"
            budget = 1500.0
            transfer_mode = "move"

            [[envelopes]]
            name = "groceries"
            amount = 500.0

            [[envelopes]]
            name = "game"
            amount = 80.0
        "#;

        let config: BudgetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.budget, 1500.0);
        assert_eq!(config.transfer_mode, TransferMode::Move);
        assert_eq!(config.envelopes.len(), 2);
        assert_eq!(config.envelopes[0].name, "groceries");
        assert_eq!(config.envelopes[1].amount, 80.0);
    }

    #[test]
    fn test_parse_defaults() {
        let config: BudgetConfig = toml::from_str("").unwrap();
        assert_eq!(config.budget, 0.0);
        assert_eq!(config.transfer_mode, TransferMode::Copy);
        assert!(config.envelopes.is_empty());
    }

    #[test]
    fn test_build_store_keeps_order() {
        let config: BudgetConfig = toml::from_str(
            r#"
            budget = 100.0
            [[envelopes]]
            name = "rent"
            amount = 60.0
            [[envelopes]]
            name = "fun"
            amount = 40.0
            "#,
        )
        .unwrap();

        let store = config.build_store().unwrap();
        assert_eq!(store.budget(), 100.0);
        assert_eq!(store.get_envelope(0).unwrap().name, "rent");
        assert_eq!(store.get_envelope(1).unwrap().name, "fun");
    }

    #[test]
    fn test_build_store_rejects_blank_name() {
        let config = BudgetConfig {
            budget: 0.0,
            transfer_mode: TransferMode::Copy,
            envelopes: vec![EnvelopeConfig {
                name: " ".to_string(),
                amount: 1.0,
            }],
        };
        let err = config.build_store().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "budget = 42.0\n[[envelopes]]\nname = \"a\"\namount = 1.0").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.budget, 42.0);
        assert_eq!(config.envelopes.len(), 1);
    }

    #[test]
    fn test_load_config_errors() {
        let missing = load_config("/nonexistent/budget/config.toml").unwrap_err();
        assert!(matches!(missing, Error::Config { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "budget = \"lots\"").unwrap();
        let invalid = load_config(file.path()).unwrap_err();
        assert!(matches!(invalid, Error::Config { .. }));
    }
}
