//! Fixed-precision policy shared by the angle and turn computations.
//!
//! Policy
//! - Rounding is a fixed constant; there is no runtime knob. Angle sorting and
//!   the turn test must agree on the same grid, otherwise ties found by one
//!   are broken by the other.
//! - Equality of points is never rounded.

/// Decimal digits kept before any angle or cross-product arithmetic.
pub const ROUND_DIGITS: i32 = 5;

/// `10^ROUND_DIGITS`.
pub(crate) const ROUND_SCALE: f64 = 1e5;

/// Above this magnitude `v * ROUND_SCALE` has no fractional bits left.
const EXACT_LIMIT: f64 = 4.503_599_627_370_496e15; // 2^52

/// Round `v` to `ROUND_DIGITS` decimals, halves away from zero.
#[inline]
pub fn round_fixed(v: f64) -> f64 {
    let scaled = v * ROUND_SCALE;
    if !scaled.is_finite() || scaled.abs() >= EXACT_LIMIT {
        return v;
    }
    scaled.round() / ROUND_SCALE
}
