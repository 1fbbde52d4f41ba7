//! Integer division with two different rounding rules.
//!
//! The conversion formulas mix both on purpose. Swapping one for the other
//! changes results for negative intermediates, i.e. dates before the epoch.

/// Quotient rounded toward zero.
#[inline]
pub const fn div_trunc(a: i64, b: i64) -> i64 {
    a / b
}

/// `a - b * floor(a / b)`. Lies in `[0, b)` whenever `b > 0`.
#[inline]
pub const fn mod_floor(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && ((r < 0) != (b < 0)) { r + b } else { r }
}
