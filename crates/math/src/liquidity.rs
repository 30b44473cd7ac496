//! Deposit-amount to liquidity conversion.
//!
//! A position's depth is a single scalar funded by both assets jointly: at
//! the current price, the derived liquidity is the largest value whose
//! asset-0 and asset-1 requirements both stay within the target deposits.

use crate::full_math::{mul_div, mul_div_ceil};
use launch_types::{MathError, MathResult, Q64};

fn validate_range(sqrt_lower: u128, sqrt_upper: u128) -> MathResult<()> {
    if sqrt_lower == 0 {
        return Err(MathError::ZeroPrice);
    }
    if sqrt_lower >= sqrt_upper {
        return Err(MathError::InvalidPriceRange {
            lower: sqrt_lower,
            upper: sqrt_upper,
        });
    }
    Ok(())
}

/// Liquidity purchasable with `amount_0` alone over `[sqrt_lower, sqrt_upper]`.
///
/// `L = amount_0 * (sqrt_lower * sqrt_upper / Q64) / (sqrt_upper - sqrt_lower)`
pub fn liquidity_for_amount_0(
    sqrt_lower: u128,
    sqrt_upper: u128,
    amount_0: u64,
) -> MathResult<u128> {
    validate_range(sqrt_lower, sqrt_upper)?;
    let intermediate = mul_div(sqrt_lower, sqrt_upper, Q64)?;
    mul_div(amount_0 as u128, intermediate, sqrt_upper - sqrt_lower)
}

/// Liquidity purchasable with `amount_1` alone over `[sqrt_lower, sqrt_upper]`.
///
/// `L = amount_1 * Q64 / (sqrt_upper - sqrt_lower)`
pub fn liquidity_for_amount_1(
    sqrt_lower: u128,
    sqrt_upper: u128,
    amount_1: u64,
) -> MathResult<u128> {
    validate_range(sqrt_lower, sqrt_upper)?;
    mul_div(amount_1 as u128, Q64, sqrt_upper - sqrt_lower)
}

/// The maximal single liquidity value consistent with both deposits at the
/// current price.
///
/// Below the range only asset 0 funds the position, above it only asset 1;
/// in range the position draws on both, so the binding deposit decides.
pub fn liquidity_for_amounts(
    sqrt_price: u128,
    sqrt_lower: u128,
    sqrt_upper: u128,
    amount_0: u64,
    amount_1: u64,
) -> MathResult<u128> {
    validate_range(sqrt_lower, sqrt_upper)?;
    if sqrt_price == 0 {
        return Err(MathError::ZeroPrice);
    }

    if sqrt_price <= sqrt_lower {
        liquidity_for_amount_0(sqrt_lower, sqrt_upper, amount_0)
    } else if sqrt_price < sqrt_upper {
        let from_0 = liquidity_for_amount_0(sqrt_price, sqrt_upper, amount_0)?;
        let from_1 = liquidity_for_amount_1(sqrt_lower, sqrt_price, amount_1)?;
        Ok(from_0.min(from_1))
    } else {
        liquidity_for_amount_1(sqrt_lower, sqrt_upper, amount_1)
    }
}

/// The asset amounts a position of `liquidity` consumes at `sqrt_price`,
/// rounding up the way the pool's settlement accounting does.
pub fn amounts_for_liquidity(
    sqrt_price: u128,
    sqrt_lower: u128,
    sqrt_upper: u128,
    liquidity: u128,
) -> MathResult<(u64, u64)> {
    validate_range(sqrt_lower, sqrt_upper)?;
    let price = sqrt_price.clamp(sqrt_lower, sqrt_upper);

    let amount_0 = if price < sqrt_upper {
        let denom = mul_div(price, sqrt_upper, Q64)?;
        mul_div_ceil(liquidity, sqrt_upper - price, denom)?
    } else {
        0
    };
    let amount_1 = if price > sqrt_lower {
        mul_div_ceil(liquidity, price - sqrt_lower, Q64)?
    } else {
        0
    };

    let amount_0 = u64::try_from(amount_0).map_err(|_| MathError::Overflow("amount_0"))?;
    let amount_1 = u64::try_from(amount_1).map_err(|_| MathError::Overflow("amount_1"))?;
    Ok((amount_0, amount_1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::sqrt_price_at_tick;
    use launch_types::{MAX_TICK, MIN_TICK};

    #[test]
    fn inverted_range_is_rejected() {
        assert!(liquidity_for_amounts(Q64, 2 * Q64, Q64, 1, 1).is_err());
        assert!(liquidity_for_amounts(Q64, Q64, Q64, 1, 1).is_err());
    }

    #[test]
    fn in_range_liquidity_is_the_binding_minimum() {
        let lower = sqrt_price_at_tick(-6_000).unwrap();
        let upper = sqrt_price_at_tick(6_000).unwrap();
        let price = Q64;

        let from_0 = liquidity_for_amount_0(price, upper, 1_000_000).unwrap();
        let from_1 = liquidity_for_amount_1(lower, price, 1_000_000).unwrap();
        let joint = liquidity_for_amounts(price, lower, upper, 1_000_000, 1_000_000).unwrap();
        assert_eq!(joint, from_0.min(from_1));
    }

    #[test]
    fn out_of_range_positions_are_single_sided() {
        let lower = sqrt_price_at_tick(1_000).unwrap();
        let upper = sqrt_price_at_tick(2_000).unwrap();

        // Price below the range: only asset 0 matters.
        let below = liquidity_for_amounts(Q64, lower, upper, 5_000, 0).unwrap();
        assert_eq!(below, liquidity_for_amount_0(lower, upper, 5_000).unwrap());
        assert!(below > 0);

        // Price above the range: only asset 1 matters.
        let price = sqrt_price_at_tick(3_000).unwrap();
        let above = liquidity_for_amounts(price, lower, upper, 0, 5_000).unwrap();
        assert_eq!(above, liquidity_for_amount_1(lower, upper, 5_000).unwrap());
        assert!(above > 0);
    }

    #[test]
    fn liquidity_is_monotone_in_each_deposit() {
        let lower = sqrt_price_at_tick(-12_000).unwrap();
        let upper = sqrt_price_at_tick(12_000).unwrap();
        let price = Q64;

        let mut previous = 0;
        for amount_0 in [1_000u64, 10_000, 100_000, 1_000_000] {
            let l = liquidity_for_amounts(price, lower, upper, amount_0, 50_000).unwrap();
            assert!(l >= previous);
            previous = l;
        }

        let mut previous = 0;
        for amount_1 in [1_000u64, 10_000, 100_000, 1_000_000] {
            let l = liquidity_for_amounts(price, lower, upper, 50_000, amount_1).unwrap();
            assert!(l >= previous);
            previous = l;
        }
    }

    #[test]
    fn full_range_one_to_one_matches_the_curve_formula() {
        // Supplies 100e8 / 10_000_000e6, deposits 25e8 / 2_500_000e6,
        // 1:1 starting price over the full tick window.
        let lower = sqrt_price_at_tick(MIN_TICK).unwrap();
        let upper = sqrt_price_at_tick(MAX_TICK).unwrap();
        let amount_0: u64 = 2_500_000_000; // 25e8
        let amount_1: u64 = 2_500_000_000_000; // 2_500_000e6

        let joint = liquidity_for_amounts(Q64, lower, upper, amount_0, amount_1).unwrap();

        // At 1:1 over the (nearly unbounded) full range, the asset-0 leg
        // binds and the curve collapses to L ~= amount_0.
        let from_0 = liquidity_for_amount_0(Q64, upper, amount_0).unwrap();
        let from_1 = liquidity_for_amount_1(lower, Q64, amount_1).unwrap();
        assert_eq!(joint, from_0.min(from_1));
        assert_eq!(joint, amount_0 as u128);
    }

    #[test]
    fn amounts_round_trip_within_the_deposits() {
        let lower = sqrt_price_at_tick(-6_000).unwrap();
        let upper = sqrt_price_at_tick(6_000).unwrap();
        let (amount_0, amount_1) = (750_000u64, 600_000u64);

        let liquidity = liquidity_for_amounts(Q64, lower, upper, amount_0, amount_1).unwrap();
        let (need_0, need_1) = amounts_for_liquidity(Q64, lower, upper, liquidity).unwrap();

        // Ceil rounding may add one base unit per side, never more.
        assert!(need_0 <= amount_0 + 1);
        assert!(need_1 <= amount_1 + 1);
        assert!(need_0 > 0 && need_1 > 0);
    }
}
