//! Handler for the `rescale` command.

use rust_decimal::Decimal;
use tracing::debug;

use super::command::RescaleArgs;
use super::format::Formatter;
use super::{output, report};
use crate::config::Config;
use crate::domain::{
    checked_total, recalculate_stakes_for_custom_total, Calculation, DomainError,
};
use crate::error::Result;

/// Execute `rescale`.
pub fn execute(config: &Config, args: RescaleArgs) -> Result<()> {
    validate(&args)?;
    let formatter = Formatter::new(&config.display);
    let current = checked_total(&args.stakes).ok_or(DomainError::Overflow)?;

    if current <= Decimal::ZERO {
        output::warning("stakes sum to zero, there is nothing to scale");
        output::hint("run `surebet calc <ODDS>... --stake <TOTAL>` to derive stakes from odds");
        report::print_stakes("rescale", &args.stakes, current, &formatter);
        return Ok(());
    }

    let stakes = recalculate_stakes_for_custom_total(&args.stakes, args.total);
    debug!(from = %current, to = %args.total, "rescaled stakes");

    match args.odds {
        Some(odds) => {
            let calculation = Calculation::evaluate(&odds, &stakes, args.total)?;
            report::print_calculation("rescale", &calculation, &formatter);
        }
        None => report::print_stakes("rescale", &stakes, args.total, &formatter),
    }
    Ok(())
}

fn validate(args: &RescaleArgs) -> std::result::Result<(), DomainError> {
    if args.total <= Decimal::ZERO {
        return Err(DomainError::NonPositiveTotalStake { total: args.total });
    }
    if let Some((index, &stake)) = args
        .stakes
        .iter()
        .enumerate()
        .find(|(_, stake)| **stake < Decimal::ZERO)
    {
        return Err(DomainError::NegativeStake { index, stake });
    }
    if let Some(odds) = &args.odds {
        if odds.len() != args.stakes.len() {
            return Err(DomainError::LengthMismatch {
                odds: odds.len(),
                stakes: args.stakes.len(),
            });
        }
    }
    Ok(())
}
