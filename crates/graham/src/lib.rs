//! Convex hulls of planar point sets via Graham scan.
//!
//! Pipeline
//! - `PointSet` deduplicates the input, selects the pivot (lowest y, then
//!   lowest x) and sorts the remaining points by polar angle around it.
//! - Normalization collapses points sharing the pivot's x-coordinate into the
//!   single furthest one.
//! - `HullScanner` runs the stack scan and drops every point that does not
//!   make a strict left turn.
//!
//! Numerics
//! - Coordinates are rounded to `cfg::ROUND_DIGITS` decimals before every
//!   angle and cross-product computation. Equality stays exact.
//!
//! ```
//! let hull = graham::build_hull(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])
//!     .unwrap();
//! assert_eq!(hull, vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
//! ```

pub mod cfg;
pub mod hull;
pub mod point;
pub mod rand;
pub mod turn;

pub use hull::{HullScanner, PointSet};
pub use point::Point;
pub use turn::{cross, is_left_turn, is_right_turn, Turn};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{HullScanner, PointSet};
    pub use crate::point::Point;
    pub use crate::rand::{draw_point_cloud, CloudCfg, PointCount, Region, ReplayToken};
    pub use crate::turn::{cross, is_left_turn, is_right_turn, Turn};
    pub use crate::{build_hull, build_polygon, HullError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Errors raised while building a hull.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("not enough distinct points to seed the scan (found {found}, need at least 2)")]
    InsufficientPoints { found: usize },

    #[error("all points are collinear; the hull degenerates to the segment {from} -> {to}")]
    DegenerateCollinearSet { from: Point, to: Point },

    #[error("non-finite coordinate at input index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, HullError>;

/// Hull of `points`, counter-clockwise, starting at the pivot.
///
/// Duplicates are removed first. A collinear input yields the two-point
/// segment `[pivot, farthest]`; use [`build_polygon`] to reject it instead.
pub fn build_hull(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>> {
    let set = PointSet::from_coords(points)?;
    Ok(set.hull().iter().map(|p| p.to_tuple()).collect())
}

/// Like [`build_hull`], but fails with [`HullError::DegenerateCollinearSet`]
/// when the points do not span a 2D polygon.
pub fn build_polygon(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>> {
    let set = PointSet::from_coords(points)?;
    Ok(set.polygon()?.iter().map(|p| p.to_tuple()).collect())
}
