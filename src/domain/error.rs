//! Domain validation errors for calculator inputs.
//!
//! The numeric functions in [`crate::domain`] never fail: they degrade to
//! documented fallbacks. These errors are produced by the validating caller
//! layer ([`Calculator`](crate::domain::Calculator)) before it invokes them,
//! so a user can be told *why* nothing was computed.
//!
//! # Examples
//!
//! ```
//! use surebet::domain::{Calculator, DomainError, OutcomeLimits};
//! use rust_decimal_macros::dec;
//!
//! let mut calculator = Calculator::new(OutcomeLimits::default());
//! calculator.set_total_stake(Some(dec!(100)));
//!
//! // Odds start at zero, which is not a valid leg.
//! let result = calculator.calculate();
//! assert!(matches!(result, Err(DomainError::InvalidOdds { index: 0, .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when calculator inputs violate domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A surebet needs at least `min` outcomes to hedge.
    #[error("at least {min} outcomes are required, got {count}")]
    TooFewOutcomes {
        /// Number of outcomes present.
        count: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The caller's outcome limit would be exceeded.
    #[error("at most {max} outcomes are allowed, got {count}")]
    TooManyOutcomes {
        /// Number of outcomes requested.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Every odd must exceed 1 to pay out more than the stake.
    #[error("odds for outcome {index} must be greater than 1, got {odds}")]
    InvalidOdds {
        /// Zero-based outcome index.
        index: usize,
        /// The offending odd.
        odds: Decimal,
    },

    /// Total stake must be positive to allocate anything.
    #[error("total stake must be greater than 0, got {total}")]
    NonPositiveTotalStake {
        /// The offending total.
        total: Decimal,
    },

    /// Stakes cannot be negative.
    #[error("stake for outcome {index} cannot be negative, got {stake}")]
    NegativeStake {
        /// Zero-based outcome index.
        index: usize,
        /// The offending stake.
        stake: Decimal,
    },

    /// Rounding unit cannot be negative (zero disables rounding).
    #[error("rounding unit cannot be negative, got {unit}")]
    NegativeRoundingUnit {
        /// The offending unit.
        unit: Decimal,
    },

    /// Outcome index does not exist.
    #[error("outcome {index} does not exist ({count} outcomes)")]
    OutcomeOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of outcomes present.
        count: usize,
    },

    /// An intermediate amount does not fit in a [`Decimal`].
    #[error("amounts are too large to calculate")]
    Overflow,

    /// Odds and stakes must be index-aligned.
    #[error("got {odds} odds but {stakes} stakes")]
    LengthMismatch {
        /// Number of odds.
        odds: usize,
        /// Number of stakes.
        stakes: usize,
    },
}
