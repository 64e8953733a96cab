//! Surebet arithmetic: detection, allocation, rounding, profit and re-solving.
//!
//! Every function outside [`calculator`] is pure, never panics and never
//! returns an error; degenerate input yields a documented fallback value.

mod allocation;
mod detector;
mod money;
mod profit;
mod rebalance;
mod rounding;

pub mod calculator;
pub mod error;

// Money and odds
pub use money::{checked_total, outcome_label, total, Odds, Percentage, Stake};

// Detector and margin
pub use detector::{
    calculate_margin, has_valid_legs, implied_probability, implied_probability_sum, is_surebet,
    MIN_OUTCOMES,
};

// Allocation and discretization
pub use allocation::calculate_stakes;
pub use rounding::round_stakes;

// Profit
pub use profit::{
    calculate_profit_percentage, calculate_profits, calculate_returns, calculate_total_profit,
};

// Re-solvers
pub use rebalance::{recalculate_stakes_for_custom_total, recalculate_stakes_for_specific_bet};

// Calculator session
pub use calculator::{Calculation, Calculator, Leg, OutcomeLimits, DEFAULT_MAX_OUTCOMES};
pub use error::DomainError;
