//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates calculator defaults,
//! display preferences and logging. Every section is optional; a missing
//! file at the default location means built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use surebet::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init(true);
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::logging::LoggingConfig;
use super::paths;
use crate::domain::{OutcomeLimits, Stake, DEFAULT_MAX_OUTCOMES, MIN_OUTCOMES};
use crate::error::{ConfigError, Result};

/// Largest number of decimal places the display accepts.
pub const MAX_DISPLAY_DECIMALS: u32 = 8;

/// Calculator defaults applied when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Total stake used when `--stake` is omitted.
    pub default_total_stake: Option<Stake>,

    /// Rounding unit for stakes; zero disables rounding.
    pub round_to: Stake,

    /// Fewest outcomes accepted.
    pub min_outcomes: usize,

    /// Most outcomes accepted.
    pub max_outcomes: usize,
}

impl CalculatorConfig {
    /// Outcome bounds for a [`Calculator`](crate::domain::Calculator).
    pub fn limits(&self) -> OutcomeLimits {
        OutcomeLimits::new(self.min_outcomes, self.max_outcomes)
    }

    /// Rounding unit, `None` when rounding is disabled.
    pub fn rounding_unit(&self) -> Option<Stake> {
        (self.round_to > Decimal::ZERO).then_some(self.round_to)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_total_stake: None,
            round_to: Decimal::ZERO,
            min_outcomes: MIN_OUTCOMES,
            max_outcomes: DEFAULT_MAX_OUTCOMES,
        }
    }
}

/// How amounts are rendered by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency symbol printed before amounts.
    pub currency: String,

    /// Decimal places shown for amounts and percentages.
    pub decimals: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "R$".into(),
            decimals: 2,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for out-of-range settings.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] if the file cannot be read, plus
    /// anything [`Config::parse_toml`] reports.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse_toml(&content)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load an explicit path, or the default path when it exists, or defaults.
    ///
    /// # Errors
    ///
    /// Fails when an explicit path is unreadable or any file found is invalid.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = paths::default_config();
        if default_path.exists() {
            return Self::load(default_path);
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let calculator = &self.calculator;

        if calculator.min_outcomes < MIN_OUTCOMES {
            return Err(ConfigError::InvalidValue {
                field: "min_outcomes",
                reason: format!("must be at least {MIN_OUTCOMES}"),
            }
            .into());
        }
        if calculator.max_outcomes < calculator.min_outcomes {
            return Err(ConfigError::InvalidValue {
                field: "max_outcomes",
                reason: "must be >= min_outcomes".to_string(),
            }
            .into());
        }
        if calculator.round_to < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "round_to",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if let Some(total) = calculator.default_total_stake {
            if total <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "default_total_stake",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        if self.display.decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "decimals",
                reason: format!("must be at most {MAX_DISPLAY_DECIMALS}"),
            }
            .into());
        }

        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LoggingConfig::FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }
}
