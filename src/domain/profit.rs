//! Profit evaluation for a stake allocation.

use rust_decimal::Decimal;

use super::money::{Odds, Percentage, Stake};

/// Gross payout per outcome: `stake[i] * odds[i]`.
///
/// Extra stakes or odds beyond the shorter slice are ignored. Returns a
/// zero vector when any payout does not fit in a [`Decimal`].
pub fn calculate_returns(stakes: &[Stake], odds: &[Odds]) -> Vec<Stake> {
    checked_returns(stakes, odds).unwrap_or_else(|| zeros(stakes, odds))
}

/// Net result per outcome if that outcome wins: `stake[i] * odds[i] - total_stake`.
///
/// Returns a zero vector when any result does not fit in a [`Decimal`].
pub fn calculate_profits(stakes: &[Stake], odds: &[Odds], total_stake: Stake) -> Vec<Stake> {
    checked_profits(stakes, odds, total_stake).unwrap_or_else(|| zeros(stakes, odds))
}

/// Guaranteed profit of the allocation: the worst outcome's profit.
///
/// An empty allocation guarantees nothing and yields 0, as does one whose
/// profits overflow.
pub fn calculate_total_profit(stakes: &[Stake], odds: &[Odds], total_stake: Stake) -> Stake {
    calculate_profits(stakes, odds, total_stake)
        .into_iter()
        .min()
        .unwrap_or(Decimal::ZERO)
}

/// Profit as a percentage of total stake, 0 when the total is not positive.
///
/// Saturates at the bounds of [`Decimal`] for a vanishingly small total.
pub fn calculate_profit_percentage(total_profit: Stake, total_stake: Stake) -> Percentage {
    if total_stake <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_profit
        .checked_div(total_stake)
        .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

pub(crate) fn checked_returns(stakes: &[Stake], odds: &[Odds]) -> Option<Vec<Stake>> {
    stakes
        .iter()
        .zip(odds)
        .map(|(&stake, &odd)| stake.checked_mul(odd))
        .collect()
}

pub(crate) fn checked_profits(
    stakes: &[Stake],
    odds: &[Odds],
    total_stake: Stake,
) -> Option<Vec<Stake>> {
    checked_returns(stakes, odds)?
        .into_iter()
        .map(|payout| payout.checked_sub(total_stake))
        .collect()
}

fn zeros(stakes: &[Stake], odds: &[Odds]) -> Vec<Stake> {
    vec![Decimal::ZERO; stakes.len().min(odds.len())]
}
