//! Graham scan: point set normalization and the hull stack.
//!
//! Purpose
//! - `PointSet` owns the deduplicated input, the pivot and the angular order,
//!   and memoizes the normalized scan input and the hull.
//! - `HullScanner` is the stack scan itself; it knows nothing about sorting.
//!
//! Pivot-vertical collapse
//! - Points sharing the pivot's x all sort to the same angle (π/2), and their
//!   order along the vertical cannot be resolved by the turn test. Only the
//!   highest of them is kept for the scan.
//!
//! Degenerate input
//! - Fewer than 2 distinct points: `HullError::InsufficientPoints`.
//! - Collinear input: `hull()` is the segment `[pivot, farthest]`, `polygon()`
//!   reports `HullError::DegenerateCollinearSet`.

mod scan;
mod set;

pub use scan::HullScanner;
pub use set::PointSet;
