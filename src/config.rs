//! Configuration loading from TOML files.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::domain::{DEFAULT_COMMISSION, DEFAULT_STAKE};
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of The Odds API.
    pub api_url: String,
    /// Environment variable holding the API key; never stored in the file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Sport key to fetch, e.g. `soccer_epl`.
    pub sport_key: String,
    /// Bookmaker regions parameter.
    #[serde(default = "default_regions")]
    pub regions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The exchange laid against in two-way matching.
    pub reference_bookmaker: String,
    #[serde(default = "default_stake")]
    pub default_stake: Decimal,
    #[serde(default = "default_commission")]
    pub default_commission: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_api_key_env() -> String {
    "ODDS_API_KEY".into()
}

fn default_regions() -> String {
    "eu".into()
}

fn default_stake() -> Decimal {
    DEFAULT_STAKE
}

fn default_commission() -> Decimal {
    DEFAULT_COMMISSION
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                api_url: "https://api.the-odds-api.com".into(),
                api_key_env: default_api_key_env(),
                sport_key: "soccer_epl".into(),
                regions: default_regions(),
            },
            engine: EngineConfig {
                reference_bookmaker: "betfair_ex_eu".into(),
                default_stake: default_stake(),
                default_commission: default_commission(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "provider.api_url",
            });
        }
        if self.provider.sport_key.is_empty() {
            return Err(ConfigError::MissingField {
                field: "provider.sport_key",
            });
        }
        if self.engine.reference_bookmaker.is_empty() {
            return Err(ConfigError::MissingField {
                field: "engine.reference_bookmaker",
            });
        }
        if self.engine.default_stake <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "engine.default_stake",
                reason: format!("must be positive, got {}", self.engine.default_stake),
            });
        }
        if self.engine.default_commission < Decimal::ZERO
            || self.engine.default_commission >= Decimal::ONE
        {
            return Err(ConfigError::InvalidValue {
                field: "engine.default_commission",
                reason: format!(
                    "must be in [0, 1), got {}",
                    self.engine.default_commission
                ),
            });
        }
        Ok(())
    }

    /// Resolve the provider API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.provider.api_key_env).map_err(|_| ConfigError::InvalidValue {
            field: "provider.api_key_env",
            reason: format!(
                "environment variable {} is not set",
                self.provider.api_key_env
            ),
        })
    }

    /// Initialize logging with the configured settings. `RUST_LOG` wins over
    /// the config level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
