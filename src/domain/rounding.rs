//! Discretization of stakes to whole betting units.
//!
//! Each stake is floored to a multiple of the unit, then the amount lost to
//! flooring is handed back one unit at a time to the outcomes that lost the
//! most. Whole units take priority over exact conservation: a leftover
//! smaller than one unit is dropped.

use rust_decimal::Decimal;

use super::money::{checked_total, Stake};

/// Snap `stakes` to multiples of `round_to`, redistributing toward `total_stake`.
///
/// A non-positive `round_to` disables rounding and returns the stakes
/// unchanged, as does any amount that does not fit in a [`Decimal`]. Ties
/// in the fractional remainder go to the lower index.
pub fn round_stakes(stakes: &[Stake], round_to: Stake, total_stake: Stake) -> Vec<Stake> {
    if round_to <= Decimal::ZERO {
        return stakes.to_vec();
    }
    try_round(stakes, round_to, total_stake).unwrap_or_else(|| stakes.to_vec())
}

fn try_round(stakes: &[Stake], round_to: Stake, total_stake: Stake) -> Option<Vec<Stake>> {
    let mut rounded = stakes
        .iter()
        .map(|&stake| floor_to_unit(stake, round_to))
        .collect::<Option<Vec<_>>>()?;

    let mut remaining = total_stake.checked_sub(checked_total(&rounded)?)?;

    let mut ranked = stakes
        .iter()
        .enumerate()
        .map(|(index, &stake)| Some((index, stake.checked_rem(round_to)?)))
        .collect::<Option<Vec<(usize, Decimal)>>>()?;
    // stable: equal remainders keep index order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    for (index, _) in ranked {
        if remaining < round_to {
            break;
        }
        rounded[index] = rounded[index].checked_add(round_to)?;
        remaining -= round_to;
    }

    Some(rounded)
}

/// Largest multiple of `unit` not greater than `stake`.
fn floor_to_unit(stake: Stake, unit: Stake) -> Option<Stake> {
    stake.checked_div(unit)?.floor().checked_mul(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::total;
    use rust_decimal_macros::dec;

    #[test]
    fn remainder_goes_to_largest_fraction() {
        let rounded = round_stakes(&[dec!(53.26), dec!(46.74)], dec!(1), dec!(100));

        assert_eq!(rounded, vec![dec!(53), dec!(47)]);
        assert_eq!(total(&rounded), dec!(100));
    }

    #[test]
    fn zero_unit_is_passthrough() {
        let stakes = vec![dec!(46.8085), dec!(53.1915)];

        assert_eq!(round_stakes(&stakes, dec!(0), dec!(100)), stakes);
        assert_eq!(round_stakes(&stakes, dec!(-1), dec!(7)), stakes);
    }

    #[test]
    fn several_legs_can_absorb_units() {
        let stakes = [dec!(10.9), dec!(20.8), dec!(30.1), dec!(38.2)];
        let rounded = round_stakes(&stakes, dec!(1), dec!(100));

        // floors sum to 98, two units go to the .9 and .8 legs
        assert_eq!(rounded, vec![dec!(11), dec!(21), dec!(30), dec!(38)]);
    }

    #[test]
    fn ties_prefer_lower_index() {
        let stakes = [dec!(33.5), dec!(33.5), dec!(33)];
        let rounded = round_stakes(&stakes, dec!(1), dec!(100));

        assert_eq!(rounded, vec![dec!(34), dec!(33), dec!(33)]);
    }

    #[test]
    fn fractional_leftover_is_dropped() {
        let rounded = round_stakes(&[dec!(50.25), dec!(50.25)], dec!(1), dec!(100.5));

        assert_eq!(rounded, vec![dec!(50), dec!(50)]);
        assert_eq!(total(&rounded), dec!(100));
    }

    #[test]
    fn non_integer_unit() {
        let rounded = round_stakes(&[dec!(46.81), dec!(53.19)], dec!(0.5), dec!(100));

        assert_eq!(rounded, vec![dec!(47.0), dec!(53.0)]);
    }

    #[test]
    fn unit_larger_than_stakes() {
        let rounded = round_stakes(&[dec!(3), dec!(4)], dec!(5), dec!(7));

        // floors are zero, one unit fits into the remaining 7
        assert_eq!(rounded, vec![dec!(0), dec!(5)]);
    }

    #[test]
    fn overflowing_amounts_are_passed_through() {
        let stakes = vec![Decimal::MAX, Decimal::MAX];

        assert_eq!(round_stakes(&stakes, dec!(1), dec!(100)), stakes);

        let stakes = vec![dec!(10.5), dec!(20.5)];
        assert_eq!(round_stakes(&stakes, dec!(1), Decimal::MIN), stakes);
    }
}
