//! Handler for the `calc` command.

use tracing::info;

use super::command::CalcArgs;
use super::format::Formatter;
use super::report;
use crate::config::Config;
use crate::domain::{Calculator, Stake};
use crate::error::{Error, Result};

/// Execute `calc`.
pub fn execute(config: &Config, args: CalcArgs) -> Result<()> {
    let total_stake = resolve_total_stake(config, args.stake)?;
    let round_to = args.round_to.or(config.calculator.rounding_unit());

    let mut calculator = Calculator::with_odds(config.calculator.limits(), args.odds)?;
    calculator.set_round_to(round_to)?;
    calculator.set_total_stake(Some(total_stake));
    // `set_total_stake` already recomputed; rerun only to surface the error
    let calculation = match calculator.calculation().cloned() {
        Some(calculation) => calculation,
        None => calculator.calculate()?,
    };

    info!(
        outcomes = calculation.legs().len(),
        surebet = calculation.is_surebet(),
        margin = %calculation.margin(),
        "calculated allocation"
    );

    report::print_calculation("calc", &calculation, &Formatter::new(&config.display));
    Ok(())
}

/// Total stake from the command line, falling back to the configured default.
fn resolve_total_stake(config: &Config, stake: Option<Stake>) -> Result<Stake> {
    stake
        .or(config.calculator.default_total_stake)
        .ok_or_else(|| {
            Error::MissingInput(
                "total stake: pass --stake or set calculator.default_total_stake".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;
    use rust_decimal_macros::dec;

    #[test]
    fn explicit_stake_wins_over_default() {
        let config = testkit::config::with_stake(dec!(50), dec!(0));

        assert_eq!(resolve_total_stake(&config, Some(dec!(80))).unwrap(), dec!(80));
        assert_eq!(resolve_total_stake(&config, None).unwrap(), dec!(50));
    }

    #[test]
    fn missing_stake_is_reported() {
        let result = resolve_total_stake(&Config::default(), None);

        assert!(matches!(result, Err(Error::MissingInput(_))));
    }
}
