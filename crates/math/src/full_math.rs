//! Full-width multiply-then-divide for Q64.64 products.
//!
//! `a * b` of two u128 values needs 256 bits before the divide, so the
//! product is kept as two 128-bit halves and reduced with restoring
//! division. All operations return errors instead of panicking.

use launch_types::{MathError, MathResult};

/// Full 256-bit product of two u128 values as `(hi, lo)` halves.
fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = (1u128 << 64) - 1;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let lo_lo = a_lo * b_lo;
    let (mid, mid_carry) = (a_lo * b_hi).overflowing_add(a_hi * b_lo);
    let (lo, lo_carry) = lo_lo.overflowing_add((mid & MASK) << 64);

    let hi = a_hi * b_hi
        + (mid >> 64)
        + ((mid_carry as u128) << 64)
        + lo_carry as u128;

    (hi, lo)
}

/// `floor(a * b / denom)` with a 256-bit intermediate product.
///
/// Errors if `denom` is zero or the quotient does not fit in a u128.
pub fn mul_div(a: u128, b: u128, denom: u128) -> MathResult<u128> {
    if denom == 0 {
        return Err(MathError::DivisionByZero("mul_div"));
    }
    let (hi, lo) = mul_wide(a, b);
    if hi == 0 {
        return Ok(lo / denom);
    }
    if hi >= denom {
        return Err(MathError::Overflow("mul_div"));
    }

    // Restoring division: the high half is already a valid remainder
    // (hi < denom), fold in the low half bit by bit.
    let mut quotient: u128 = 0;
    let mut rem = hi;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        quotient <<= 1;
        if carry == 1 || rem >= denom {
            rem = rem.wrapping_sub(denom);
            quotient |= 1;
        }
    }
    Ok(quotient)
}

/// `ceil(a * b / denom)` variant of [`mul_div`].
pub fn mul_div_ceil(a: u128, b: u128, denom: u128) -> MathResult<u128> {
    let floor = mul_div(a, b, denom)?;
    // Exact division iff floor * denom reconstructs the full product.
    if mul_wide(floor, denom) == mul_wide(a, b) {
        Ok(floor)
    } else {
        floor.checked_add(1).ok_or(MathError::Overflow("mul_div_ceil"))
    }
}
