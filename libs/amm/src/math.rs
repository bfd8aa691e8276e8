//! Overflow-checked integer math for pool accounting
//!
//! All reserve and amount values are non-negative token amounts
//! representable in 64 bits. Intermediate products widen to 128 bits, so a
//! product of two u64 values can never wrap; the only overflow condition is
//! a quotient that no longer fits back into 64 bits. Every division rounds
//! toward zero (floor on non-negative operands). No operation here wraps
//! silently.

use crate::error::{AmmError, Result};

/// Basis-point denominator: 10_000 bps == 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// `floor(a * b / denom)` with a 128-bit intermediate.
///
/// Fails with [`AmmError::ArithmeticOverflow`] when `denom` is zero or the
/// quotient exceeds `u64::MAX`.
pub fn mul_div(a: u64, b: u64, denom: u64) -> Result<u64> {
    if denom == 0 {
        return Err(AmmError::ArithmeticOverflow);
    }
    // u64 * u64 fits in u128 unconditionally.
    let wide = (a as u128) * (b as u128);
    let quotient = wide / denom as u128;
    u64::try_from(quotient).map_err(|_| AmmError::ArithmeticOverflow)
}

/// `floor(sqrt(n))` by Newton's method, seeded at `n / 2 + 1` and iterating
/// while the candidate still decreases.
///
/// The result of a square root of a 128-bit value always fits in 64 bits.
/// Terminates in O(log n) iterations; `0..=3` collapse to `0` or `1` in the
/// first correction step.
pub fn integer_sqrt(n: u128) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut candidate = n / 2 + 1;
    let mut next = (candidate + n / candidate) / 2;
    while next < candidate {
        candidate = next;
        next = (candidate + n / candidate) / 2;
    }
    candidate as u64
}

/// Checked addition of two token amounts.
pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(AmmError::ArithmeticOverflow)
}

/// Checked subtraction of two token amounts.
pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(AmmError::ArithmeticOverflow)
}
