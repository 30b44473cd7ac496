//! Tick index to square-root price conversion, Q64.64.

use crate::full_math::mul_div;
use integer_sqrt::IntegerSquareRoot;
use launch_types::{MathError, MathResult, MAX_TICK, MIN_TICK, Q64};

/// sqrt(1.0001) in Q64.64, the per-tick square-root price ratio.
const SQRT_TICK_BASE_Q64: u128 = 18_447_666_387_855_959_847;

/// Square-root price at a tick index, as a Q64.64 fixed-point value.
///
/// Computed as `sqrt(1.0001)^tick` by exponentiation-by-squaring; negative
/// ticks take the reciprocal of the positive-tick value. This is the same
/// curve the pool program evaluates on-ledger, so liquidity derived from
/// these prices settles consistently.
pub fn sqrt_price_at_tick(tick: i32) -> MathResult<u128> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds {
            tick,
            min: MIN_TICK,
            max: MAX_TICK,
        });
    }

    let mut result = Q64;
    let mut base = SQRT_TICK_BASE_Q64;
    let mut exp = tick.unsigned_abs();
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_div(result, base, Q64)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = mul_div(base, base, Q64)?;
        }
    }

    if tick < 0 {
        mul_div(Q64, Q64, result)
    } else {
        Ok(result)
    }
}

/// Largest tick whose square-root price does not exceed `sqrt_price_q64`.
///
/// Inverse of [`sqrt_price_at_tick`] by binary search over the monotone
/// curve; errors if the price falls outside the representable tick range.
pub fn tick_at_sqrt_price(sqrt_price_q64: u128) -> MathResult<i32> {
    if sqrt_price_q64 == 0 {
        return Err(MathError::ZeroPrice);
    }
    if sqrt_price_q64 < sqrt_price_at_tick(MIN_TICK)?
        || sqrt_price_q64 > sqrt_price_at_tick(MAX_TICK)?
    {
        return Err(MathError::InvalidPriceRange {
            lower: sqrt_price_at_tick(MIN_TICK)?,
            upper: sqrt_price_at_tick(MAX_TICK)?,
        });
    }

    let (mut lo, mut hi) = (MIN_TICK, MAX_TICK);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if sqrt_price_at_tick(mid)? <= sqrt_price_q64 {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(lo)
}

/// Floor a tick to its spacing grid, rounding toward negative infinity.
pub fn align_tick_to_spacing(tick: i32, tick_spacing: u16) -> i32 {
    let spacing = tick_spacing as i32;
    tick.div_euclid(spacing) * spacing
}

/// Widest `(lower, upper)` tick range representable on the spacing grid.
pub fn full_range_ticks(tick_spacing: u16) -> (i32, i32) {
    let upper = align_tick_to_spacing(MAX_TICK, tick_spacing);
    (-upper, upper)
}

/// Q64.64 square root of a Q64.64 price ratio, for deriving the starting
/// square-root price from a plain exchange rate.
pub fn sqrt_price_from_price(price_q64: u128) -> MathResult<u128> {
    if price_q64 == 0 {
        return Err(MathError::ZeroPrice);
    }
    if price_q64 < Q64 {
        // Shift up first so the fractional half keeps its precision.
        Ok((price_q64 << 64).integer_sqrt())
    } else {
        // The shifted value would overflow; root first, then rescale.
        Ok(price_q64.integer_sqrt() << 32)
    }
}
