//! Deduplicated point collection with pivot, angular order and memoized hull.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::scan::HullScanner;
use crate::point::Point;
use crate::{HullError, Result};

/// Owned input of one hull computation.
///
/// Invariants:
/// - `points` holds distinct finite points, `points[0] == pivot`, the rest in
///   angular order around the pivot.
/// - `normalized` and `hull` are computed on first access and never change.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    pivot: Point,
    normalized: OnceLock<Vec<Point>>,
    hull: OnceLock<Vec<Point>>,
}

impl PointSet {
    /// Deduplicate (first occurrence wins), pick the pivot, sort by angle.
    pub fn new<I>(input: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        let mut total = 0usize;
        for (index, p) in input.into_iter().enumerate() {
            total += 1;
            if !p.is_finite() {
                return Err(HullError::NonFiniteCoordinate {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
            if seen.insert(p.bits()) {
                points.push(p);
            }
        }
        let Some(pivot) = lowest_yx(&points) else {
            return Err(HullError::InsufficientPoints { found: 0 });
        };
        if points.len() < 2 {
            return Err(HullError::InsufficientPoints {
                found: points.len(),
            });
        }
        points.retain(|p| *p != pivot);
        sort_angular(&pivot, &mut points);
        points.insert(0, pivot);
        tracing::debug!(input = total, distinct = points.len(), %pivot, "point set");
        Ok(Self {
            points,
            pivot,
            normalized: OnceLock::new(),
            hull: OnceLock::new(),
        })
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from))
    }

    /// Distinct points: pivot first, then by `(angle, x asc, y desc)`.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest y, then lowest x.
    #[inline]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Highest point sharing the pivot's x, or the pivot itself.
    pub fn furthest_colinear_x(&self) -> Point {
        let mut furthest = self.pivot;
        for p in &self.points {
            if p.x == self.pivot.x && p.y > furthest.y {
                furthest = *p;
            }
        }
        furthest
    }

    /// Scan input: pivot, then every point off the pivot's vertical plus the
    /// furthest one on it, in angular order.
    pub fn normalized(&self) -> &[Point] {
        self.normalized.get_or_init(|| {
            let furthest = self.furthest_colinear_x();
            let mut out: Vec<Point> = self
                .points
                .iter()
                .copied()
                .filter(|p| p.x != self.pivot.x)
                .collect();
            if furthest != self.pivot {
                out.push(furthest);
            }
            sort_angular(&self.pivot, &mut out);
            out.insert(0, self.pivot);
            tracing::debug!(
                distinct = self.points.len(),
                normalized = out.len(),
                "collapsed pivot-vertical points"
            );
            out
        })
    }

    /// Counter-clockwise boundary starting at the pivot.
    ///
    /// Collinear input yields the segment `[pivot, farthest]`.
    pub fn hull(&self) -> &[Point] {
        self.hull.get_or_init(|| {
            let normalized = self.normalized();
            let mut scanner = HullScanner::new(normalized[0], normalized[1]);
            for p in &normalized[2..] {
                scanner.push(*p);
            }
            let hull = scanner.finish();
            if hull.len() >= 3 {
                return hull;
            }
            let far = farthest_from(&self.pivot, normalized);
            tracing::debug!(pivot = %self.pivot, %far, "collinear input, segment hull");
            vec![self.pivot, far]
        })
    }

    /// The hull as a proper polygon (at least 3 vertices).
    pub fn polygon(&self) -> Result<&[Point]> {
        match self.hull() {
            [from, to] => Err(HullError::DegenerateCollinearSet {
                from: *from,
                to: *to,
            }),
            hull => Ok(hull),
        }
    }
}

fn lowest_yx(points: &[Point]) -> Option<Point> {
    let mut it = points.iter();
    let mut best = *it.next()?;
    for p in it {
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            best = *p;
        }
    }
    Some(best)
}

fn farthest_from(origin: &Point, points: &[Point]) -> Point {
    let mut best = *origin;
    let mut best_d2 = 0.0;
    for p in points {
        let d2 = origin.dist2(p);
        if d2 > best_d2 {
            best = *p;
            best_d2 = d2;
        }
    }
    best
}

/// Sort by `(angle_to(pivot), x ascending, y descending)`.
fn sort_angular(pivot: &Point, points: &mut Vec<Point>) {
    let mut keyed: Vec<(f64, Point)> = points.iter().map(|p| (p.angle_to(pivot), *p)).collect();
    keyed.sort_by(|(ta, a), (tb, b)| {
        ta.partial_cmp(tb)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
            .then_with(|| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
    });
    points.clear();
    points.extend(keyed.into_iter().map(|(_, p)| p));
}
