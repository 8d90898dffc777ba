//! Stack scan over an angle-sorted, normalized sequence.

use crate::point::Point;
use crate::turn::is_left_turn;
use crate::{HullError, Result};

/// Hull stack for one Graham scan.
///
/// Invariants:
/// - `stack[0]` is the pivot and the stack never shrinks below 2 entries.
/// - Every consecutive triple on the stack is a strict left turn after each `push`.
#[derive(Clone, Debug)]
pub struct HullScanner {
    stack: Vec<Point>,
}

impl HullScanner {
    /// Seed with the pivot and the first angularly sorted point.
    pub fn new(pivot: Point, first: Point) -> Self {
        Self {
            stack: vec![pivot, first],
        }
    }

    #[inline]
    pub fn pivot(&self) -> Point {
        self.stack[0]
    }

    /// Current stack, pivot first.
    #[inline]
    pub fn stack(&self) -> &[Point] {
        &self.stack
    }

    /// Push `p` and evict middle points until the top three turn left.
    pub fn push(&mut self, p: Point) {
        self.stack.push(p);
        while self.stack.len() > 2 {
            let n = self.stack.len();
            if is_left_turn(&self.stack[n - 3], &self.stack[n - 2], &self.stack[n - 1]) {
                break;
            }
            let evicted = self.stack.remove(n - 2);
            tracing::trace!(%evicted, "not a left turn");
        }
    }

    /// Close the boundary with a pivot sentinel and return the hull without it.
    pub fn finish(mut self) -> Vec<Point> {
        let pivot = self.pivot();
        self.push(pivot);
        self.stack.pop();
        self.stack
    }

    /// Scan a whole normalized sequence (`normalized[0]` must be the pivot).
    pub fn run(normalized: &[Point]) -> Result<Vec<Point>> {
        let [pivot, first, rest @ ..] = normalized else {
            return Err(HullError::InsufficientPoints {
                found: normalized.len(),
            });
        };
        let mut scanner = HullScanner::new(*pivot, *first);
        for p in rest {
            scanner.push(*p);
        }
        Ok(scanner.finish())
    }
}
