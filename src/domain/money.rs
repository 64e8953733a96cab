//! Monetary and odds types.
//!
//! Everything numeric in the calculator is a [`Decimal`] so stakes, payouts
//! and rounding units stay exact at currency precision.

use rust_decimal::Decimal;

/// Decimal betting odds for one outcome (payout multiplier, e.g. `2.50`).
pub type Odds = Decimal;

/// Amount of money wagered, paid out or won.
pub type Stake = Decimal;

/// Percentage value where `17.5` means 17.5%.
pub type Percentage = Decimal;

/// Sum a slice of stakes, saturating at the bounds of [`Decimal`].
pub fn total(stakes: &[Stake]) -> Stake {
    stakes
        .iter()
        .fold(Decimal::ZERO, |sum, &stake| sum.saturating_add(stake))
}

/// Sum a slice of stakes, `None` if the sum does not fit in a [`Decimal`].
pub fn checked_total(stakes: &[Stake]) -> Option<Stake> {
    stakes
        .iter()
        .try_fold(Decimal::ZERO, |sum, &stake| sum.checked_add(stake))
}

/// Display label for an outcome: `A`, `B`, `C`, ...
///
/// Indices past `Z` continue as `A1`, `B1`, ... so labels stay unique.
pub fn outcome_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        cycle => format!("{letter}{cycle}"),
    }
}
