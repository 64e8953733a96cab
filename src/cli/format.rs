//! Display formatting for amounts and percentages.
//!
//! Only the CLI rounds for display; the calculation keeps full precision.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;

/// Formats decimals with the configured currency and precision.
#[derive(Debug, Clone)]
pub struct Formatter {
    currency: String,
    decimals: u32,
}

impl Formatter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            currency: display.currency.clone(),
            decimals: display.decimals,
        }
    }

    /// Plain number at display precision, e.g. `46.81`.
    pub fn number(&self, value: Decimal) -> String {
        let rounded =
            value.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", self.decimals as usize, rounded)
    }

    /// Amount with currency symbol, e.g. `R$ 46.81`.
    pub fn amount(&self, value: Decimal) -> String {
        if self.currency.is_empty() {
            return self.number(value);
        }
        format!("{} {}", self.currency, self.number(value))
    }

    /// Percentage, e.g. `17.02%`.
    pub fn percent(&self, value: Decimal) -> String {
        format!("{}%", self.number(value))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_use_currency_and_precision() {
        let formatter = Formatter::default();

        assert_eq!(formatter.amount(dec!(46.808510638)), "R$ 46.81");
        assert_eq!(formatter.amount(dec!(50)), "R$ 50.00");
        assert_eq!(formatter.percent(dec!(17.0212765)), "17.02%");
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        let formatter = Formatter::default();

        assert_eq!(formatter.number(dec!(0.125)), "0.13");
        assert_eq!(formatter.number(dec!(-0.125)), "-0.13");
    }

    #[test]
    fn empty_currency_prints_bare_number() {
        let formatter = Formatter::new(&DisplayConfig {
            currency: String::new(),
            decimals: 1,
        });

        assert_eq!(formatter.amount(dec!(12.34)), "12.3");
    }
}
