//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use rust_decimal::Decimal;

use crate::config::{CalculatorConfig, Config, DisplayConfig};

/// Config with a default total stake and optional rounding.
pub fn with_stake(total: Decimal, round_to: Decimal) -> Config {
    Config {
        calculator: CalculatorConfig {
            default_total_stake: Some(total),
            round_to,
            ..CalculatorConfig::default()
        },
        display: plain_display(),
        ..Config::default()
    }
}

/// Display settings without a currency symbol, for easy string matching.
pub fn plain_display() -> DisplayConfig {
    DisplayConfig {
        currency: String::new(),
        decimals: 2,
    }
}
