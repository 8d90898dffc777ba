//! Orientation of three points on the rounded grid.

use nalgebra::Vector2;

use crate::point::Point;

/// Orientation of `p1 → p2 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise (strictly positive cross product).
    Left,
    Straight,
    /// Clockwise.
    Right,
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `(p2 − p1) × (p3 − p1)` with every coordinate rounded first.
#[inline]
pub fn cross(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let o = p1.rounded().to_vec2();
    let a = p2.rounded().to_vec2() - o;
    let b = p3.rounded().to_vec2() - o;
    parallelogram_area(a, b)
}

impl Turn {
    pub fn of(p1: &Point, p2: &Point, p3: &Point) -> Turn {
        let c = cross(p1, p2, p3);
        if c > 0.0 {
            Turn::Left
        } else if c < 0.0 {
            Turn::Right
        } else {
            Turn::Straight
        }
    }
}

/// Strict left turn: `p2` is a hull vertex candidate.
#[inline]
pub fn is_left_turn(p1: &Point, p2: &Point, p3: &Point) -> bool {
    cross(p1, p2, p3) > 0.0
}

/// Not a strict left turn; straight counts as right so `p2` gets evicted.
#[inline]
pub fn is_right_turn(p1: &Point, p2: &Point, p3: &Point) -> bool {
    !is_left_turn(p1, p2, p3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn classifies_ccw_cw_and_straight() {
        assert_eq!(Turn::of(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)), Turn::Left);
        assert_eq!(Turn::of(&p(0.0, 0.0), &p(1.0, 1.0), &p(1.0, 0.0)), Turn::Right);
        assert_eq!(Turn::of(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 3.0)), Turn::Straight);
    }

    #[test]
    fn straight_is_a_right_turn_for_the_scan() {
        let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(4.0, 0.0));
        assert!(!is_left_turn(&a, &b, &c));
        assert!(is_right_turn(&a, &b, &c));
    }

    #[test]
    fn noise_below_grid_reads_as_straight() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.000_001), p(2.0, 0.0));
        assert_eq!(cross(&a, &b, &c), 0.0);
        assert!(is_right_turn(&a, &b, &c));
    }

    #[test]
    fn cross_matches_expanded_formula_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let (a, b, c) = (
                p(rng.gen_range(-8i32..8) as f64, rng.gen_range(-8i32..8) as f64),
                p(rng.gen_range(-8i32..8) as f64, rng.gen_range(-8i32..8) as f64),
                p(rng.gen_range(-8i32..8) as f64, rng.gen_range(-8i32..8) as f64),
            );
            let expected = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
            assert_eq!(cross(&a, &b, &c), expected);
        }
    }
}
