//! Calculator session: validated inputs and the derived allocation.
//!
//! The numeric functions in this module's siblings are pure and never fail.
//! [`Calculator`] is the caller-side layer that owns the editable inputs
//! (odds, total stake, rounding unit), validates them with user-facing
//! [`DomainError`]s, and recomputes the whole [`Calculation`] after every
//! edit. Nothing is updated incrementally; each recompute replaces the
//! previous result.
//!
//! # Example
//!
//! ```
//! use surebet::domain::{Calculator, OutcomeLimits};
//! use rust_decimal_macros::dec;
//!
//! let odds = vec![dec!(2.5), dec!(2.2)];
//! let mut calculator = Calculator::with_odds(OutcomeLimits::default(), odds)?;
//! calculator.set_total_stake(Some(dec!(100)));
//! calculator.set_round_to(Some(dec!(1)))?;
//!
//! let calculation = calculator.calculate()?;
//! assert!(calculation.is_surebet());
//! assert_eq!(calculation.stakes(), vec![dec!(47), dec!(53)]);
//! # Ok::<(), surebet::domain::DomainError>(())
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::allocation::calculate_stakes;
use super::detector::{calculate_margin, is_surebet, MIN_OUTCOMES};
use super::error::DomainError;
use super::money::{checked_total, outcome_label, Odds, Percentage, Stake};
use super::profit::{calculate_profit_percentage, checked_profits, checked_returns};
use super::rebalance::{recalculate_stakes_for_custom_total, recalculate_stakes_for_specific_bet};
use super::rounding::round_stakes;

/// Default maximum number of outcomes a calculator accepts.
pub const DEFAULT_MAX_OUTCOMES: usize = 5;

/// Bounds on how many outcomes a calculator holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeLimits {
    /// Fewest outcomes allowed (never below 2).
    pub min: usize,
    /// Most outcomes allowed.
    pub max: usize,
}

impl OutcomeLimits {
    /// Create limits, raising `min` to 2 and `max` to at least `min`.
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(MIN_OUTCOMES);
        Self {
            min,
            max: max.max(min),
        }
    }

    fn check(&self, count: usize) -> Result<(), DomainError> {
        if count < self.min {
            return Err(DomainError::TooFewOutcomes {
                count,
                min: self.min,
            });
        }
        if count > self.max {
            return Err(DomainError::TooManyOutcomes {
                count,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for OutcomeLimits {
    fn default() -> Self {
        Self::new(MIN_OUTCOMES, DEFAULT_MAX_OUTCOMES)
    }
}

/// One outcome of a calculated allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Display label (`A`, `B`, ...).
    pub label: String,
    /// Odds for this outcome.
    pub odds: Odds,
    /// Amount to wager on this outcome.
    pub stake: Stake,
    /// Gross payout if this outcome wins.
    pub payout: Stake,
    /// Net result if this outcome wins.
    pub profit: Stake,
}

/// A complete allocation with every derived figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    legs: Vec<Leg>,
    total_stake: Stake,
    is_surebet: bool,
    margin: Percentage,
    total_profit: Stake,
    profit_percentage: Percentage,
}

impl Calculation {
    /// Evaluate `stakes` against `odds` for the given total stake.
    ///
    /// Stakes and odds are paired by index; surplus entries of the longer
    /// slice are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] when a payout or profit does not
    /// fit in a [`Decimal`].
    pub fn evaluate(
        odds: &[Odds],
        stakes: &[Stake],
        total_stake: Stake,
    ) -> Result<Self, DomainError> {
        let payouts = checked_returns(stakes, odds).ok_or(DomainError::Overflow)?;
        let profits =
            checked_profits(stakes, odds, total_stake).ok_or(DomainError::Overflow)?;
        let total_profit = profits.iter().copied().min().unwrap_or(Decimal::ZERO);

        let legs = odds
            .iter()
            .zip(stakes)
            .zip(payouts.into_iter().zip(profits))
            .enumerate()
            .map(|(index, ((&odds, &stake), (payout, profit)))| Leg {
                label: outcome_label(index),
                odds,
                stake,
                payout,
                profit,
            })
            .collect();

        Ok(Self {
            legs,
            total_stake,
            is_surebet: is_surebet(odds),
            margin: calculate_margin(odds),
            total_profit,
            profit_percentage: calculate_profit_percentage(total_profit, total_stake),
        })
    }

    /// Per-outcome breakdown.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Stakes in outcome order.
    pub fn stakes(&self) -> Vec<Stake> {
        self.legs.iter().map(|leg| leg.stake).collect()
    }

    /// Total stake the profits are measured against.
    pub fn total_stake(&self) -> Stake {
        self.total_stake
    }

    /// Whether the odds alone form a surebet.
    pub fn is_surebet(&self) -> bool {
        self.is_surebet
    }

    /// Margin of the odds as a percentage.
    pub fn margin(&self) -> Percentage {
        self.margin
    }

    /// Worst-case profit across outcomes.
    pub fn total_profit(&self) -> Stake {
        self.total_profit
    }

    /// Worst-case profit as a percentage of total stake.
    pub fn profit_percentage(&self) -> Percentage {
        self.profit_percentage
    }

    /// Whether this allocation cannot lose money whichever outcome wins.
    pub fn is_guaranteed(&self) -> bool {
        self.total_profit >= Decimal::ZERO
    }
}

/// Editable calculator inputs plus the last successful calculation.
#[derive(Debug, Clone)]
pub struct Calculator {
    limits: OutcomeLimits,
    odds: Vec<Odds>,
    total_stake: Option<Stake>,
    round_to: Option<Stake>,
    stakes: Vec<Stake>,
    calculation: Option<Calculation>,
}

impl Calculator {
    /// Create a calculator with `limits.min` blank (zero) odds.
    pub fn new(limits: OutcomeLimits) -> Self {
        Self {
            limits,
            odds: vec![Decimal::ZERO; limits.min],
            total_stake: None,
            round_to: None,
            stakes: vec![Decimal::ZERO; limits.min],
            calculation: None,
        }
    }

    /// Create a calculator pre-filled with odds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooFewOutcomes`] or [`DomainError::TooManyOutcomes`]
    /// when the number of odds is outside `limits`.
    pub fn with_odds(limits: OutcomeLimits, odds: Vec<Odds>) -> Result<Self, DomainError> {
        limits.check(odds.len())?;
        let stakes = vec![Decimal::ZERO; odds.len()];
        Ok(Self {
            limits,
            odds,
            total_stake: None,
            round_to: None,
            stakes,
            calculation: None,
        })
    }

    /// Outcome bounds this calculator enforces.
    pub fn limits(&self) -> OutcomeLimits {
        self.limits
    }

    /// Odds as entered, zero for a blank outcome.
    pub fn odds(&self) -> &[Odds] {
        &self.odds
    }

    /// Stakes of the last committed allocation.
    pub fn stakes(&self) -> &[Stake] {
        &self.stakes
    }

    /// Total stake to allocate, `None` until set.
    pub fn total_stake(&self) -> Option<Stake> {
        self.total_stake
    }

    /// Rounding unit, `None` when unset.
    pub fn round_to(&self) -> Option<Stake> {
        self.round_to
    }

    /// Last successful calculation, if any.
    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    /// Append a blank outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooManyOutcomes`] when already at the maximum.
    pub fn add_outcome(&mut self) -> Result<(), DomainError> {
        let count = self.odds.len() + 1;
        if count > self.limits.max {
            return Err(DomainError::TooManyOutcomes {
                count,
                max: self.limits.max,
            });
        }
        self.odds.push(Decimal::ZERO);
        self.stakes.push(Decimal::ZERO);
        Ok(())
    }

    /// Remove the outcome at `index` together with its stake.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooFewOutcomes`] when already at the minimum and
    /// [`DomainError::OutcomeOutOfRange`] for an unknown index.
    pub fn remove_outcome(&mut self, index: usize) -> Result<(), DomainError> {
        if self.odds.len() <= self.limits.min {
            return Err(DomainError::TooFewOutcomes {
                count: self.odds.len().saturating_sub(1),
                min: self.limits.min,
            });
        }
        self.check_index(index)?;
        self.odds.remove(index);
        self.stakes.remove(index);
        self.refresh();
        Ok(())
    }

    /// Change the odds of one outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutcomeOutOfRange`] for an unknown index.
    pub fn set_odds(&mut self, index: usize, odds: Odds) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.odds[index] = odds;
        self.refresh();
        Ok(())
    }

    /// Change (or clear) the total stake.
    pub fn set_total_stake(&mut self, total_stake: Option<Stake>) {
        self.total_stake = total_stake;
        self.refresh();
    }

    /// Change (or clear) the rounding unit; zero disables rounding.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeRoundingUnit`] for a negative unit.
    pub fn set_round_to(&mut self, round_to: Option<Stake>) -> Result<(), DomainError> {
        if let Some(unit) = round_to.filter(|unit| *unit < Decimal::ZERO) {
            return Err(DomainError::NegativeRoundingUnit { unit });
        }
        self.round_to = round_to;
        self.refresh();
        Ok(())
    }

    /// Validate the inputs and compute the proportional, optionally rounded, allocation.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: outcome count, then odds above 1,
    /// then a positive total stake. Returns [`DomainError::Overflow`] when
    /// the allocation's payouts do not fit in a [`Decimal`].
    pub fn calculate(&mut self) -> Result<Calculation, DomainError> {
        let total_stake = self.validate()?;

        let stakes = self.rounded(calculate_stakes(&self.odds, total_stake), total_stake);
        self.commit(stakes, total_stake)
    }

    /// Hold the stake on `index` at `value` and re-solve the others for equal payout.
    ///
    /// With a rounding unit set, the re-solved stakes are rounded to it as
    /// well, so a `value` that is not a multiple of the unit may move. The
    /// total stake becomes the sum of the resulting stakes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutcomeOutOfRange`] for an unknown index,
    /// [`DomainError::NegativeStake`] for a negative value, any outcome or
    /// odds validation error, and [`DomainError::Overflow`] when the
    /// matched payout does not fit in a [`Decimal`].
    pub fn override_stake(
        &mut self,
        index: usize,
        value: Stake,
    ) -> Result<Calculation, DomainError> {
        self.check_index(index)?;
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeStake { index, stake: value });
        }
        self.validate_odds()?;
        value
            .checked_mul(self.odds[index])
            .ok_or(DomainError::Overflow)?;

        let stakes = recalculate_stakes_for_specific_bet(&self.stakes, &self.odds, index, value);
        let total_stake = checked_total(&stakes).ok_or(DomainError::Overflow)?;
        let stakes = self.rounded(stakes, total_stake);
        let total_stake = checked_total(&stakes).ok_or(DomainError::Overflow)?;

        let calculation = self.commit(stakes, total_stake)?;
        self.total_stake = Some(total_stake);
        Ok(calculation)
    }

    /// Scale the current stakes to a new total, keeping their proportions.
    ///
    /// With no stakes to scale yet the allocation is derived from the odds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveTotalStake`] for a total of zero or
    /// less, any validation error when deriving from the odds, and
    /// [`DomainError::Overflow`] when the scaled payouts do not fit.
    pub fn rescale(&mut self, new_total: Stake) -> Result<Calculation, DomainError> {
        if new_total <= Decimal::ZERO {
            return Err(DomainError::NonPositiveTotalStake { total: new_total });
        }
        self.total_stake = Some(new_total);

        let current_total = checked_total(&self.stakes).ok_or(DomainError::Overflow)?;
        if current_total <= Decimal::ZERO {
            return self.calculate();
        }

        let stakes = recalculate_stakes_for_custom_total(&self.stakes, new_total);
        self.commit(stakes, new_total)
    }

    /// Recompute after an edit; on failure keep the last result.
    fn refresh(&mut self) {
        if let Err(err) = self.calculate() {
            debug!(%err, "inputs incomplete, keeping previous allocation");
        }
    }

    fn rounded(&self, stakes: Vec<Stake>, total_stake: Stake) -> Vec<Stake> {
        match self.round_to.filter(|unit| *unit > Decimal::ZERO) {
            Some(unit) => round_stakes(&stakes, unit, total_stake),
            None => stakes,
        }
    }

    fn validate(&self) -> Result<Stake, DomainError> {
        self.validate_odds()?;

        match self.total_stake {
            Some(total) if total > Decimal::ZERO => Ok(total),
            Some(total) => Err(DomainError::NonPositiveTotalStake { total }),
            None => Err(DomainError::NonPositiveTotalStake {
                total: Decimal::ZERO,
            }),
        }
    }

    fn validate_odds(&self) -> Result<(), DomainError> {
        self.limits.check(self.odds.len())?;

        if let Some((index, &odds)) = self
            .odds
            .iter()
            .enumerate()
            .find(|(_, odds)| **odds <= Decimal::ONE)
        {
            return Err(DomainError::InvalidOdds { index, odds });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.odds.len() {
            return Err(DomainError::OutcomeOutOfRange {
                index,
                count: self.odds.len(),
            });
        }
        Ok(())
    }

    fn commit(
        &mut self,
        stakes: Vec<Stake>,
        total_stake: Stake,
    ) -> Result<Calculation, DomainError> {
        let calculation = Calculation::evaluate(&self.odds, &stakes, total_stake)?;

        debug!(
            outcomes = self.odds.len(),
            total_stake = %total_stake,
            surebet = calculation.is_surebet(),
            profit = %calculation.total_profit(),
            "allocation recomputed"
        );
        if !calculation.is_guaranteed() {
            warn!(
                profit = %calculation.total_profit(),
                margin = %calculation.margin(),
                "allocation does not guarantee a profit"
            );
        }

        self.stakes = stakes;
        self.calculation = Some(calculation.clone());
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculator(odds: Vec<Odds>) -> Calculator {
        Calculator::with_odds(OutcomeLimits::default(), odds).unwrap()
    }

    #[test]
    fn new_calculator_starts_with_blank_minimum() {
        let calc = Calculator::new(OutcomeLimits::default());

        assert_eq!(calc.odds(), &[dec!(0), dec!(0)]);
        assert!(calc.calculation().is_none());
    }

    #[test]
    fn limits_never_drop_below_two() {
        let limits = OutcomeLimits::new(0, 1);

        assert_eq!(limits, OutcomeLimits { min: 2, max: 2 });
    }

    #[test]
    fn with_odds_enforces_limits() {
        let result = Calculator::with_odds(OutcomeLimits::default(), vec![dec!(2)]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::TooFewOutcomes { count: 1, min: 2 }
        );

        let result = Calculator::with_odds(OutcomeLimits::default(), vec![dec!(2); 6]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::TooManyOutcomes { count: 6, max: 5 }
        );
    }

    #[test]
    fn add_and_remove_respect_limits() {
        let mut calc = Calculator::new(OutcomeLimits::default());

        for _ in 0..3 {
            calc.add_outcome().unwrap();
        }
        assert_eq!(calc.odds().len(), 5);
        assert_eq!(
            calc.add_outcome().unwrap_err(),
            DomainError::TooManyOutcomes { count: 6, max: 5 }
        );

        assert_eq!(
            calc.remove_outcome(9).unwrap_err(),
            DomainError::OutcomeOutOfRange { index: 9, count: 5 }
        );
        for _ in 0..3 {
            calc.remove_outcome(0).unwrap();
        }
        assert_eq!(
            calc.remove_outcome(0).unwrap_err(),
            DomainError::TooFewOutcomes { count: 1, min: 2 }
        );
    }

    #[test]
    fn calculate_reports_invalid_odds_first() {
        let mut calc = calculator(vec![dec!(2.5), dec!(1.0)]);
        calc.set_total_stake(Some(dec!(100)));

        assert_eq!(
            calc.calculate().unwrap_err(),
            DomainError::InvalidOdds {
                index: 1,
                odds: dec!(1.0)
            }
        );
    }

    #[test]
    fn calculate_requires_positive_total() {
        let mut calc = calculator(vec![dec!(2.5), dec!(2.2)]);

        assert_eq!(
            calc.calculate().unwrap_err(),
            DomainError::NonPositiveTotalStake { total: dec!(0) }
        );

        calc.set_total_stake(Some(dec!(-5)));
        assert_eq!(
            calc.calculate().unwrap_err(),
            DomainError::NonPositiveTotalStake { total: dec!(-5) }
        );
    }

    #[test]
    fn edits_recompute_once_inputs_are_complete() {
        let mut calc = Calculator::new(OutcomeLimits::default());
        calc.set_total_stake(Some(dec!(100)));
        calc.set_odds(0, dec!(2.0)).unwrap();
        assert!(calc.calculation().is_none());

        calc.set_odds(1, dec!(2.0)).unwrap();
        let calculation = calc.calculation().unwrap();
        assert_eq!(calculation.stakes(), vec![dec!(50), dec!(50)]);
        assert!(!calculation.is_surebet());

        // an incomplete edit keeps the previous result
        calc.set_odds(1, dec!(0)).unwrap();
        assert_eq!(calc.calculation().unwrap().stakes(), vec![dec!(50), dec!(50)]);
    }

    #[test]
    fn rounding_applies_to_calculation() {
        let mut calc = calculator(vec![dec!(2.5), dec!(2.2)]);
        calc.set_total_stake(Some(dec!(100)));
        calc.set_round_to(Some(dec!(1))).unwrap();

        let calculation = calc.calculation().unwrap();
        assert_eq!(calculation.stakes(), vec![dec!(47), dec!(53)]);
        // 47 * 2.5 = 117.5, 53 * 2.2 = 116.6
        assert_eq!(calculation.total_profit(), dec!(16.6));
        assert_eq!(calculation.profit_percentage(), dec!(16.6));
        assert!(calculation.is_guaranteed());
    }

    #[test]
    fn negative_rounding_unit_is_rejected() {
        let mut calc = calculator(vec![dec!(2.5), dec!(2.2)]);

        assert_eq!(
            calc.set_round_to(Some(dec!(-1))).unwrap_err(),
            DomainError::NegativeRoundingUnit { unit: dec!(-1) }
        );
        assert_eq!(calc.round_to(), None);
        calc.set_round_to(Some(dec!(0))).unwrap();
        assert_eq!(calc.round_to(), Some(dec!(0)));
    }

    #[test]
    fn override_stake_moves_total() {
        let mut calc = calculator(vec![dec!(3), dec!(6)]);
        calc.set_total_stake(Some(dec!(90)));

        let calculation = calc.override_stake(1, dec!(40)).unwrap();

        assert_eq!(calculation.stakes(), vec![dec!(80), dec!(40)]);
        assert_eq!(calc.total_stake(), Some(dec!(120)));
        assert_eq!(calculation.total_stake(), dec!(120));
        // payout 240 on both legs
        assert_eq!(calculation.total_profit(), dec!(120));
    }

    #[test]
    fn override_stake_validates_input() {
        let mut calc = calculator(vec![dec!(3), dec!(6)]);

        assert_eq!(
            calc.override_stake(2, dec!(10)).unwrap_err(),
            DomainError::OutcomeOutOfRange { index: 2, count: 2 }
        );
        assert_eq!(
            calc.override_stake(0, dec!(-1)).unwrap_err(),
            DomainError::NegativeStake {
                index: 0,
                stake: dec!(-1)
            }
        );
    }

    #[test]
    fn rescale_keeps_proportions_of_current_stakes() {
        let mut calc = calculator(vec![dec!(3), dec!(6)]);
        calc.set_total_stake(Some(dec!(90)));

        let calculation = calc.rescale(dec!(30)).unwrap();
        let stakes = calculation.stakes();

        assert!((stakes[0] - dec!(20)).abs() < dec!(0.000000001));
        assert!((stakes[1] - dec!(10)).abs() < dec!(0.000000001));
        assert_eq!(calc.total_stake(), Some(dec!(30)));
    }

    #[test]
    fn rescale_without_stakes_derives_from_odds() {
        let mut calc = calculator(vec![dec!(2), dec!(2)]);

        let calculation = calc.rescale(dec!(40)).unwrap();

        assert_eq!(calculation.stakes(), vec![dec!(20), dec!(20)]);
    }

    #[test]
    fn rescale_rejects_non_positive_total() {
        let mut calc = calculator(vec![dec!(2), dec!(2)]);

        assert_eq!(
            calc.rescale(dec!(0)).unwrap_err(),
            DomainError::NonPositiveTotalStake { total: dec!(0) }
        );
    }

    #[test]
    fn legs_carry_labels_and_payouts() {
        let calculation = Calculation::evaluate(
            &[dec!(1.5), dec!(1.5), dec!(1.5)],
            &[dec!(30), dec!(30), dec!(30)],
            dec!(90),
        )
        .unwrap();

        let labels: Vec<_> = calculation.legs().iter().map(|leg| leg.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
        assert!(calculation.legs().iter().all(|leg| leg.payout == dec!(45)));
        assert!(calculation.legs().iter().all(|leg| leg.profit == dec!(-45)));
        assert!(!calculation.is_guaranteed());
    }

    #[test]
    fn overflowing_payouts_are_reported() {
        let mut calc = calculator(vec![dec!(5_000_000_000_000_000_000_000_000_000); 2]);
        calc.set_total_stake(Some(dec!(100)));

        assert!(calc.calculation().is_none());
        assert_eq!(calc.calculate().unwrap_err(), DomainError::Overflow);
        assert_eq!(
            Calculation::evaluate(&[dec!(2)], &[Decimal::MAX], dec!(0)).unwrap_err(),
            DomainError::Overflow
        );
    }

    #[test]
    fn override_stake_applies_rounding_unit() {
        let mut calc = calculator(vec![dec!(2.5), dec!(2.2)]);
        calc.set_round_to(Some(dec!(1))).unwrap();

        // 60 * 2.5 / 2.2 = 68.18..., floored to a whole unit
        let calculation = calc.override_stake(0, dec!(60)).unwrap();

        assert_eq!(calculation.stakes(), vec![dec!(60), dec!(68)]);
        assert_eq!(calculation.total_stake(), dec!(128));
        assert_eq!(calc.total_stake(), Some(dec!(128)));
    }

    #[test]
    fn override_stake_requires_valid_odds() {
        let mut calc = calculator(vec![dec!(2.5), dec!(1.0)]);

        assert_eq!(
            calc.override_stake(0, dec!(60)).unwrap_err(),
            DomainError::InvalidOdds {
                index: 1,
                odds: dec!(1.0)
            }
        );
    }

    #[test]
    fn override_stake_reports_overflowing_payout() {
        let mut calc = calculator(vec![dec!(3), dec!(6)]);

        assert_eq!(
            calc.override_stake(0, Decimal::MAX).unwrap_err(),
            DomainError::Overflow
        );
        assert_eq!(calc.total_stake(), None);
    }
}
