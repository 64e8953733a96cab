//! Proportional stake allocation.
//!
//! Splits a total stake across outcomes in proportion to their implied
//! probabilities. When every odd exceeds 1 this makes the gross payout
//! `stake[i] * odds[i]` identical whichever outcome wins.

use rust_decimal::Decimal;

use super::detector::{implied_probability, implied_probability_sum, MIN_OUTCOMES};
use super::money::{Odds, Stake};

/// Compute the equal-payout stake split for `total_stake`.
///
/// Returns a zero vector of matching length when there are fewer than two
/// odds, the total is not positive, an odd is zero, or the implied
/// probabilities sum to zero. Odds at or below 1 are not filtered: their
/// implied probability dominates the split.
pub fn calculate_stakes(odds: &[Odds], total_stake: Stake) -> Vec<Stake> {
    let zeros = || vec![Decimal::ZERO; odds.len()];

    if odds.len() < MIN_OUTCOMES || total_stake <= Decimal::ZERO {
        return zeros();
    }

    let Some(probability_sum) = implied_probability_sum(odds) else {
        return zeros();
    };
    if probability_sum.is_zero() {
        return zeros();
    }

    odds.iter()
        .map(|&odd| {
            implied_probability(odd)
                .and_then(|p| p.checked_div(probability_sum))
                .and_then(|share| share.checked_mul(total_stake))
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_else(zeros)
}
