//! Printing a [`Calculation`] for humans or as JSON.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use super::format::Formatter;
use super::output;
use crate::domain::{outcome_label, Calculation, Stake};

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Leg")]
    label: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Return")]
    payout: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

/// Print the full report for `calculation`, tagged with the command name in JSON mode.
pub fn print_calculation(command: &str, calculation: &Calculation, formatter: &Formatter) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "calculation": calculation,
        }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Odds");
    output::field("Outcomes", calculation.legs().len());
    output::field(
        "Surebet",
        if calculation.is_surebet() {
            output::positive("yes")
        } else {
            output::negative("no")
        },
    );
    output::field("Margin", signed(formatter.percent(calculation.margin()), calculation.margin()));

    output::section("Stakes");
    let rows: Vec<LegRow> = calculation
        .legs()
        .iter()
        .map(|leg| LegRow {
            label: leg.label.clone(),
            odds: leg.odds.normalize().to_string(),
            stake: formatter.amount(leg.stake),
            payout: formatter.amount(leg.payout),
            profit: formatter.amount(leg.profit),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Result");
    output::field("Total stake", formatter.amount(calculation.total_stake()));
    output::field(
        "Profit",
        signed(formatter.amount(calculation.total_profit()), calculation.total_profit()),
    );
    output::field(
        "Return",
        signed(
            formatter.percent(calculation.profit_percentage()),
            calculation.profit_percentage(),
        ),
    );

    if !calculation.is_guaranteed() {
        output::warning("not a surebet: this allocation can lose money");
    }
}

/// Print bare stakes (no odds known), labelled by outcome.
pub fn print_stakes(command: &str, stakes: &[Stake], total: Stake, formatter: &Formatter) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "stakes": stakes,
            "total_stake": total,
        }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Stakes");
    for (index, stake) in stakes.iter().enumerate() {
        output::field(&outcome_label(index), formatter.amount(*stake));
    }
    output::field("Total stake", formatter.amount(total));
}

fn signed(text: String, value: Decimal) -> String {
    if value < Decimal::ZERO {
        output::negative(text)
    } else {
        output::positive(text)
    }
}
