//! Planar point value type.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cfg::round_fixed;

/// An immutable 2D point. Equality is exact on both coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Polar angle of `self - pivot` in (−π, π].
    ///
    /// All four coordinates are rounded to `cfg::ROUND_DIGITS` decimals before
    /// differencing, so float noise below that grid cannot split angle ties.
    #[inline]
    pub fn angle_to(&self, pivot: &Point) -> f64 {
        // `+ 0.0` folds a negative zero, which atan2 would map to −π.
        let dy = round_fixed(self.y) - round_fixed(pivot.y) + 0.0;
        let dx = round_fixed(self.x) - round_fixed(pivot.x);
        dy.atan2(dx)
    }

    /// Both coordinates rounded to the fixed grid.
    #[inline]
    pub fn rounded(&self) -> Point {
        Point::new(round_fixed(self.x), round_fixed(self.y))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Squared euclidean distance (unrounded).
    #[inline]
    pub fn dist2(&self, other: &Point) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm_squared()
    }

    /// Hashable identity for exact deduplication; `-0.0` and `0.0` coincide.
    #[inline]
    pub(crate) fn bits(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn angle_axes_and_diagonals() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(Point::new(1.0, 0.0).angle_to(&o), 0.0);
        assert!((Point::new(1.0, 1.0).angle_to(&o) - FRAC_PI_4).abs() < 1e-15);
        assert!((Point::new(0.0, 3.0).angle_to(&o) - FRAC_PI_2).abs() < 1e-15);
        assert!((Point::new(-2.0, 0.0).angle_to(&o) - PI).abs() < 1e-15);
    }

    #[test]
    fn angle_relative_to_offset_pivot() {
        let pivot = Point::new(2.0, -1.0);
        let p = Point::new(3.0, 0.0);
        assert!((p.angle_to(&pivot) - FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn angle_ignores_noise_below_grid() {
        let o = Point::new(0.0, 0.0);
        let clean = Point::new(1.0, 1.0).angle_to(&o);
        let noisy = Point::new(1.000_001, 0.999_999_7).angle_to(&o);
        assert_eq!(clean, noisy);
        // pivot noise is rounded away as well
        let noisy_pivot = Point::new(0.000_002, -0.000_001);
        assert_eq!(Point::new(1.0, 1.0).angle_to(&noisy_pivot), clean);
    }

    #[test]
    fn negative_zero_offset_stays_in_range() {
        let pivot = Point::new(1.0, 0.0);
        assert_eq!(Point::new(-1.0, -0.0).angle_to(&pivot), PI);
    }

    #[test]
    fn angle_of_pivot_to_itself_is_zero() {
        let p = Point::new(4.5, -3.25);
        assert_eq!(p.angle_to(&p), 0.0);
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(Point::new(1.0, 1.0), Point::new(1.000_001, 1.0));
        assert_eq!(Point::new(1.0, 1.0).rounded(), Point::new(1.000_001, 1.0).rounded());
    }

    #[test]
    fn signed_zero_shares_identity() {
        assert_eq!(Point::new(0.0, -0.0).bits(), Point::new(-0.0, 0.0).bits());
    }

    #[test]
    fn display_and_conversions() {
        let p = Point::from((1.0, 2.5));
        assert_eq!(p.to_string(), "[1.0, 2.5]");
        let v: Vector2<f64> = p.into();
        assert_eq!(Point::from(v), p);
        assert_eq!(p.to_tuple(), (1.0, 2.5));
        assert_eq!(Point::new(0.0, 0.0).dist2(&Point::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn serde_roundtrip_uses_named_fields() {
        let p = Point::new(-1.5, 2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":-1.5,"y":2.0}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
