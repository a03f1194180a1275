//! Brute-force reference index.
//!
//! Answers the same queries as [`PrioritySearchTree`](crate::PrioritySearchTree)
//! by filtering every point. Used as the oracle in comparison tests and as
//! the baseline in benchmarks.

#![doc(hidden)]

use crate::coordinate::Coordinate;
use crate::point::Point;

/// Flat point list queried by linear scan
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct LinearScan<T> {
    pub(crate) points: Vec<Point<T>>,
}

impl<T: Coordinate> LinearScan<T> {
    /// Stores the points in any order
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether no point is stored
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points with `x1 <= x <= x2` and `y >= y1`; `results` is cleared first
    pub fn query_three_sided(&self, x1: T, x2: T, y1: T, results: &mut Vec<Point<T>>) {
        results.clear();
        results.extend(
            self.points
                .iter()
                .copied()
                .filter(|p| x1 <= p.x && p.x <= x2 && p.y >= y1),
        );
    }

    /// Points with `x1 <= x <= x2` and `y1 <= y <= y2`; `results` is cleared first
    pub fn query_four_sided(&self, x1: T, x2: T, y1: T, y2: T, results: &mut Vec<Point<T>>) {
        results.clear();
        results.extend(
            self.points
                .iter()
                .copied()
                .filter(|p| x1 <= p.x && p.x <= x2 && y1 <= p.y && p.y <= y2),
        );
    }
}
