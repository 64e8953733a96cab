//! Surebet - detection and stake allocation for arbitrage bets.
//!
//! A surebet is a set of bets on every mutually exclusive outcome of an
//! event whose decimal odds imply probabilities summing to less than one.
//! Splitting a bankroll in proportion to those probabilities returns the
//! same payout whichever outcome wins.
//!
//! # Modules
//!
//! - [`domain`] - Pure calculations and the validating [`domain::Calculator`] session
//! - [`config`] - Configuration loading from TOML files
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surebet::domain::{calculate_stakes, is_surebet};
//!
//! let odds = [dec!(2.5), dec!(2.2)];
//! assert!(is_surebet(&odds));
//!
//! let stakes = calculate_stakes(&odds, dec!(100));
//! assert_eq!(stakes.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
