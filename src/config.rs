// file: src/config.rs
// description: application configuration management with environment overrides
// reference: https://docs.rs/config

use crate::error::{ExtractError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "ASSESSMENT_EXTRACT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub color: bool,
}

impl Config {
    /// Loads logging settings from built-in defaults, `.env` and
    /// `ASSESSMENT_EXTRACT__*` environment variables, in that order.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: config::Environment) -> Result<Self> {
        let defaults = Self::default_config();

        let settings = config::Config::builder()
            .set_default("logging.verbose", defaults.logging.verbose)
            .and_then(|b| b.set_default("logging.color", defaults.logging.color))
            .map_err(|e| ExtractError::Config(e.to_string()))?
            .add_source(environment.separator("__").try_parsing(true))
            .build()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ExtractError::Config(e.to_string()))
    }

    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig {
                verbose: false,
                color: true,
            },
        }
    }
}
