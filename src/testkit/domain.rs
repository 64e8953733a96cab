//! Canonical odds sets used across tests.
//!
//! Each fixture has a known verdict so tests can focus on the numbers
//! they assert rather than on picking inputs.

use rust_decimal_macros::dec;

use crate::domain::Odds;

/// Two legs at 2.0 each: implied sum exactly 1, not a surebet.
pub fn even_pair() -> Vec<Odds> {
    vec![dec!(2.0), dec!(2.0)]
}

/// Two legs at 2.5 and 2.2: implied sum ~0.8545, margin ~17.02%.
pub fn surebet_pair() -> Vec<Odds> {
    vec![dec!(2.5), dec!(2.2)]
}

/// Three legs at 3.0 / 4.0 / 6.0: implied sum 0.75, margin 33.33%.
pub fn surebet_triple() -> Vec<Odds> {
    vec![dec!(3.0), dec!(4.0), dec!(6.0)]
}

/// Three legs at 2.0 / 3.0 / 4.0: implied sum ~1.083, a bookmaker overround.
pub fn overround_triple() -> Vec<Odds> {
    vec![dec!(2.0), dec!(3.0), dec!(4.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_surebet;

    #[test]
    fn fixtures_have_the_documented_verdicts() {
        assert!(!is_surebet(&even_pair()));
        assert!(is_surebet(&surebet_pair()));
        assert!(is_surebet(&surebet_triple()));
        assert!(!is_surebet(&overround_triple()));
    }
}
