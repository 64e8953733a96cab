//! Re-solving stakes after the caller edits them.
//!
//! Two mutually exclusive edit modes:
//!
//! - **Rescale**: a new total stake; every stake is scaled by the same ratio.
//! - **Hold one fixed**: one outcome's stake is set by hand; every other stake
//!   is recomputed so the payout `stake[j] * odds[j]` again matches the fixed
//!   leg's payout.

use rust_decimal::Decimal;

use super::money::{checked_total, Odds, Stake};

/// Scale `stakes` so they sum to `new_total`, keeping their proportions.
///
/// Stakes summing to zero or less cannot be scaled and are returned
/// unchanged; derive them from the odds instead. Stakes whose sum or
/// scaled values do not fit in a [`Decimal`] are also returned unchanged.
pub fn recalculate_stakes_for_custom_total(stakes: &[Stake], new_total: Stake) -> Vec<Stake> {
    let Some(current_total) = checked_total(stakes) else {
        return stakes.to_vec();
    };
    if current_total <= Decimal::ZERO {
        return stakes.to_vec();
    }

    let Some(ratio) = new_total.checked_div(current_total) else {
        return stakes.to_vec();
    };

    stakes
        .iter()
        .map(|&stake| stake.checked_mul(ratio))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_else(|| stakes.to_vec())
}

/// Set `stakes[fixed_index]` to `fixed_value` and re-solve the others for equal payout.
///
/// Every other leg becomes `fixed_value * odds[fixed_index] / odds[j]`.
/// When the target payout is undefined the affected legs keep their current
/// stake:
///
/// - an out-of-range index, or odds and stakes of different lengths, leave
///   every stake unchanged apart from the fixed leg (when it exists);
/// - a fixed leg whose odd is at or below 1 leaves all other legs unchanged;
/// - any other leg whose odd is at or below 1 keeps its own stake.
pub fn recalculate_stakes_for_specific_bet(
    stakes: &[Stake],
    odds: &[Odds],
    fixed_index: usize,
    fixed_value: Stake,
) -> Vec<Stake> {
    let mut result = stakes.to_vec();
    if fixed_index >= result.len() {
        return result;
    }
    result[fixed_index] = fixed_value;

    if odds.len() != stakes.len() {
        return result;
    }

    let fixed_odds = odds[fixed_index];
    if fixed_odds <= Decimal::ONE {
        return result;
    }
    let Some(payout) = fixed_value.checked_mul(fixed_odds) else {
        return result;
    };

    for (index, (stake, &odd)) in result.iter_mut().zip(odds).enumerate() {
        if index == fixed_index || odd <= Decimal::ONE {
            continue;
        }
        if let Some(value) = payout.checked_div(odd) {
            *stake = value;
        }
    }

    result
}
