use std::path::Path;

use anyhow::{Context, Result};
use common::TimelineView;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "kpidash";

/// Runtime configuration of the `kpidash` binary.
///
/// Sources, lowest precedence first: built-in defaults, `kpidash.toml` (or
/// the file passed with `--config`), then `KPIDASH_*` environment variables.
/// Command line arguments override all of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KpiConfig {
    /// View used when a command gets no `--view`
    pub default_view: TimelineView,
    /// Symbol prefixed to amounts in text reports
    pub currency_symbol: String,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            default_view: TimelineView::Monthly,
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl KpiConfig {
    /// Loads the configuration. `.env` files are read beforehand by `main`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let config: Self = Config::builder()
            .set_default("default_view", defaults.default_view.as_str())?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(Environment::with_prefix("KPIDASH"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}
