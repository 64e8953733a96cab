//! Handler for the `fix` command.

use tracing::debug;

use super::command::FixArgs;
use super::format::Formatter;
use super::{output, report};
use crate::config::Config;
use crate::domain::{outcome_label, Calculator};
use crate::error::Result;

/// Execute `fix`.
///
/// Holds one leg at the requested stake and re-solves the others for equal
/// payout. The total stake is whatever the legs add up to.
pub fn execute(config: &Config, args: FixArgs) -> Result<()> {
    let round_to = args.round_to.or(config.calculator.rounding_unit());
    let formatter = Formatter::new(&config.display);

    let mut calculator = Calculator::with_odds(config.calculator.limits(), args.odds)?;
    calculator.set_round_to(round_to)?;
    let calculation = calculator.override_stake(args.index, args.value)?;
    debug!(index = args.index, total_stake = %calculation.total_stake(), "fixed stake");

    if !output::is_json() {
        let fixed = calculation.stakes().get(args.index).copied();
        output::note(&format!(
            "fixed {} at {}; total stake {}",
            outcome_label(args.index),
            formatter.amount(fixed.unwrap_or(args.value)),
            formatter.amount(calculation.total_stake()),
        ));
    }
    report::print_calculation("fix", &calculation, &formatter);
    Ok(())
}
