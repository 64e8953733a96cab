//! Arbitrage detection and margin calculation.
//!
//! A set of odds over mutually exclusive outcomes is a surebet when the
//! implied probabilities (`1 / odds`) sum to less than certainty:
//!
//! ```text
//! S = Σ 1/odds[i]        surebet  <=>  S < 1
//! margin = (1 - S) / S * 100
//! ```

use rust_decimal::Decimal;

use super::money::{Odds, Percentage};

/// Minimum number of outcomes that can be hedged against each other.
pub const MIN_OUTCOMES: usize = 2;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Implied probability of a single odd, `None` for a zero odd.
pub fn implied_probability(odds: Odds) -> Option<Decimal> {
    Decimal::ONE.checked_div(odds)
}

/// Sum of implied probabilities, `None` if any odd has no implied probability.
///
/// No validity filtering is applied: odds at or below 1 contribute a
/// probability of 1 or more.
pub fn implied_probability_sum(odds: &[Odds]) -> Option<Decimal> {
    odds.iter().try_fold(Decimal::ZERO, |sum, &odd| sum.checked_add(implied_probability(odd)?))
}

/// Whether every odd can act as a surebet leg (at least two, all above 1).
pub fn has_valid_legs(odds: &[Odds]) -> bool {
    odds.len() >= MIN_OUTCOMES && odds.iter().all(|&odd| odd > Decimal::ONE)
}

/// Sum of implied probabilities over valid legs only.
fn valid_probability_sum(odds: &[Odds]) -> Option<Decimal> {
    if !has_valid_legs(odds) {
        return None;
    }
    implied_probability_sum(odds)
}

/// Detect whether the odds guarantee a profit regardless of outcome.
///
/// Returns `false` for fewer than two odds or when any odd is at or below 1.
pub fn is_surebet(odds: &[Odds]) -> bool {
    valid_probability_sum(odds).is_some_and(|sum| sum < Decimal::ONE)
}

/// Margin of the odds as a percentage of total stake.
///
/// Positive values are the guaranteed return of a proportional allocation,
/// negative values its guaranteed loss. Returns 0 for invalid odds.
///
/// Odds too long for their margin to fit in a [`Decimal`] saturate at
/// [`Decimal::MAX`].
pub fn calculate_margin(odds: &[Odds]) -> Percentage {
    valid_probability_sum(odds)
        .map(|sum| {
            // valid legs keep `sum` in [0, len), so only a tiny sum fails here
            (Decimal::ONE.saturating_sub(sum))
                .checked_div(sum)
                .map_or(Decimal::MAX, |ratio| ratio.saturating_mul(HUNDRED))
        })
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn assert_near(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() <= dec!(0.01),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn detects_surebet_when_probabilities_below_one() {
        assert!(is_surebet(&[dec!(2.5), dec!(2.2)]));
        assert!(is_surebet(&[dec!(3.6), dec!(3.9), dec!(3.8)]));
    }

    #[test]
    fn even_odds_are_not_a_surebet() {
        let odds = [dec!(2.0), dec!(2.0)];

        assert!(!is_surebet(&odds));
        assert_eq!(calculate_margin(&odds), Decimal::ZERO);
    }

    #[test]
    fn bookmaker_overround_gives_negative_margin() {
        let odds = [dec!(1.5), dec!(1.5), dec!(1.5)];

        assert!(!is_surebet(&odds));
        assert_near(calculate_margin(&odds), dec!(-50));
    }

    #[test]
    fn margin_of_profitable_pair() {
        assert_near(calculate_margin(&[dec!(2.5), dec!(2.2)]), dec!(17.02));
    }

    #[test]
    fn single_outcome_cannot_be_hedged() {
        assert!(!is_surebet(&[dec!(5.0)]));
        assert_eq!(calculate_margin(&[dec!(5.0)]), Decimal::ZERO);
        assert!(!is_surebet(&[]));
        assert_eq!(calculate_margin(&[]), Decimal::ZERO);
    }

    #[test]
    fn odds_at_or_below_one_are_invalid_legs() {
        assert!(!is_surebet(&[dec!(1.0), dec!(50)]));
        assert!(!is_surebet(&[dec!(0), dec!(50)]));
        assert!(!is_surebet(&[dec!(-3), dec!(50)]));
        assert_eq!(calculate_margin(&[dec!(0.5), dec!(50)]), Decimal::ZERO);
    }

    #[test]
    fn detector_agrees_with_margin_sign() {
        let cases = [
            vec![dec!(2.5), dec!(2.2)],
            vec![dec!(2.0), dec!(2.0)],
            vec![dec!(1.9), dec!(1.9)],
            vec![dec!(2.1), dec!(2.05)],
            vec![dec!(4.0), dec!(4.0), dec!(4.0)],
            vec![dec!(1.01), dec!(101), dec!(1000)],
        ];

        for odds in cases {
            assert_eq!(
                is_surebet(&odds),
                calculate_margin(&odds) > Decimal::ZERO,
                "mismatch for {odds:?}"
            );
        }
    }

    #[test]
    fn implied_sum_passes_through_invalid_odds() {
        assert_eq!(
            implied_probability_sum(&[dec!(0.5), dec!(2)]),
            Some(dec!(2.5))
        );
        assert_eq!(implied_probability_sum(&[dec!(0), dec!(2)]), None);
    }

    #[test]
    fn extreme_odds_saturate_margin() {
        let odds = [dec!(5_000_000_000_000_000_000_000_000_000); 2];

        assert!(is_surebet(&odds));
        assert_eq!(calculate_margin(&odds), Decimal::MAX);
    }

    #[test]
    fn vanishing_probabilities_saturate_margin() {
        // 1 / 7.9e28 rounds to zero at 28 decimal places
        let odds = [Decimal::MAX, Decimal::MAX];

        assert!(is_surebet(&odds));
        assert!(calculate_margin(&odds) > Decimal::ZERO);
    }
}
