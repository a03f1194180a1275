//! Range queries on [`PrioritySearchTree`].
//!
//! All traversals use an explicit stack and rely on the two node invariants:
//! a node whose point has `y < y1` has no descendant with `y >= y1` (heap),
//! and the median tells which children can hold a given x (split).

use crate::config::FourSidedStrategy;
use crate::coordinate::Coordinate;
use crate::point::Point;
use crate::pst::PrioritySearchTree;

impl<T: Coordinate> PrioritySearchTree<T> {
    /// Finds all points with `x1 <= x <= x2` and `y >= y1`.
    ///
    /// `results` is cleared, then filled in no particular order. Runs in
    /// O(log n + k) on a balanced tree.
    ///
    /// # Examples
    /// ```
    /// use pst::{Point, PrioritySearchTree};
    ///
    /// let tree = PrioritySearchTree::from_unsorted(vec![
    ///     Point::new(60, 75), Point::new(5, 45), Point::new(35, 40), Point::new(25, 35),
    /// ]).unwrap();
    ///
    /// let mut results = Vec::new();
    /// tree.query_three_sided(10, 60, 36, &mut results);
    /// results.sort_by_key(|p| p.x);
    /// assert_eq!(results, vec![Point::new(35, 40), Point::new(60, 75)]);
    /// ```
    pub fn query_three_sided(&self, x1: T, x2: T, y1: T, results: &mut Vec<Point<T>>) {
        results.clear();
        if self.is_empty() || x1 > x2 {
            return;
        }

        let mut stack = vec![0u32];
        while let Some(i) = stack.pop() {
            let node = self.node(i);
            if node.point.y < y1 {
                continue;
            }
            let p = node.point;
            if x1 <= p.x && p.x <= x2 {
                results.push(p);
            }
            if let Some(r) = node.right().filter(|_| x2 > node.median) {
                stack.push(r);
            }
            if let Some(l) = node.left().filter(|_| x1 <= node.median) {
                stack.push(l);
            }
        }

        tracing::trace!(?x1, ?x2, ?y1, found = results.len(), "three-sided query");
    }

    /// Finds all points with `x1 <= x <= x2` and `y1 <= y <= y2`.
    ///
    /// `results` is cleared, then filled in no particular order. Malformed
    /// bounds (`x1 > x2` or `y1 > y2`) give an empty result. The traversal
    /// is chosen by [`PstConfig::four_sided`](crate::PstConfig::four_sided);
    /// both strategies return the same points.
    ///
    /// # Examples
    /// ```
    /// use pst::{Point, PrioritySearchTree};
    ///
    /// let tree = PrioritySearchTree::from_unsorted(vec![
    ///     Point::new(60, 75), Point::new(90, 5), Point::new(50, 10), Point::new(85, 15),
    ///     Point::new(5, 45), Point::new(35, 40), Point::new(80, 65), Point::new(25, 35),
    /// ]).unwrap();
    ///
    /// let mut results = Vec::new();
    /// tree.query_four_sided(10, 60, 10, 50, &mut results);
    /// results.sort_by_key(|p| p.x);
    /// assert_eq!(results, vec![Point::new(25, 35), Point::new(35, 40), Point::new(50, 10)]);
    /// ```
    pub fn query_four_sided(&self, x1: T, x2: T, y1: T, y2: T, results: &mut Vec<Point<T>>) {
        self.query_four_sided_with(self.config.four_sided, x1, x2, y1, y2, results);
    }

    /// Same as [`query_four_sided`](Self::query_four_sided) with an explicit
    /// traversal strategy.
    pub fn query_four_sided_with(
        &self,
        strategy: FourSidedStrategy,
        x1: T,
        x2: T,
        y1: T,
        y2: T,
        results: &mut Vec<Point<T>>,
    ) {
        results.clear();
        if self.is_empty() || x1 > x2 || y1 > y2 {
            return;
        }

        let rect = Rect { x1, x2, y1, y2 };
        match strategy {
            FourSidedStrategy::Direct => self.four_sided_direct(&rect, results),
            FourSidedStrategy::SplitPath => self.four_sided_split_path(&rect, results),
        }

        tracing::trace!(
            ?x1, ?x2, ?y1, ?y2,
            ?strategy,
            found = results.len(),
            "four-sided query"
        );
    }

    fn four_sided_direct(&self, rect: &Rect<T>, results: &mut Vec<Point<T>>) {
        let mut stack = vec![0u32];
        while let Some(i) = stack.pop() {
            let node = self.node(i);
            if node.point.y < rect.y1 {
                continue;
            }
            if rect.contains(node.point) {
                results.push(node.point);
            }
            // A point equal to the median lives on the left; `<=` only
            // widens the search, never drops a candidate.
            if let Some(r) = node.right().filter(|_| node.median <= rect.x2) {
                stack.push(r);
            }
            if let Some(l) = node.left().filter(|_| rect.x1 <= node.median) {
                stack.push(l);
            }
        }
    }

    /// Walks down to the split node (first node with `x1 <= median < x2`),
    /// then follows both boundary paths below it.
    fn four_sided_split_path(&self, rect: &Rect<T>, results: &mut Vec<Point<T>>) {
        let mut current = Some(0u32);
        while let Some(i) = current {
            let node = self.node(i);
            if node.point.y < rect.y1 {
                return;
            }
            if rect.contains(node.point) {
                results.push(node.point);
            }
            if rect.x2 <= node.median {
                // Right subtree has x > median >= x2.
                current = node.left();
            } else if rect.x1 > node.median {
                // Left subtree has x <= median < x1.
                current = node.right();
            } else {
                // Left subtree lies below x2, right subtree above x1.
                self.left_boundary(node.left(), rect, results);
                self.right_boundary(node.right(), rect, results);
                return;
            }
        }
    }

    /// Follows the path of `x1` through a subtree whose points all have
    /// `x <= x2`. Right children of nodes with `x1 <= median` lie entirely
    /// within the x range and are swept on y alone.
    fn left_boundary(&self, start: Option<u32>, rect: &Rect<T>, results: &mut Vec<Point<T>>) {
        let mut current = start;
        while let Some(i) = current {
            let node = self.node(i);
            if node.point.y < rect.y1 {
                return;
            }
            let p = node.point;
            if p.x >= rect.x1 && p.y <= rect.y2 {
                results.push(p);
            }
            if rect.x1 <= node.median {
                self.sweep_y(node.right(), rect.y1, rect.y2, results);
                current = node.left();
            } else {
                current = node.right();
            }
        }
    }

    /// Mirror of [`left_boundary`](Self::left_boundary) for `x2` in a
    /// subtree whose points all have `x >= x1`.
    fn right_boundary(&self, start: Option<u32>, rect: &Rect<T>, results: &mut Vec<Point<T>>) {
        let mut current = start;
        while let Some(i) = current {
            let node = self.node(i);
            if node.point.y < rect.y1 {
                return;
            }
            let p = node.point;
            if p.x <= rect.x2 && p.y <= rect.y2 {
                results.push(p);
            }
            if rect.x2 > node.median {
                self.sweep_y(node.left(), rect.y1, rect.y2, results);
                current = node.right();
            } else {
                current = node.left();
            }
        }
    }

    /// Reports every point of a subtree with `y1 <= y <= y2`.
    fn sweep_y(&self, start: Option<u32>, y1: T, y2: T, results: &mut Vec<Point<T>>) {
        let Some(start) = start else { return };
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            let node = self.node(i);
            if node.point.y < y1 {
                continue;
            }
            if node.point.y <= y2 {
                results.push(node.point);
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }
}

/// Closed query rectangle
#[derive(Clone, Copy, Debug)]
struct Rect<T> {
    x1: T,
    x2: T,
    y1: T,
    y2: T,
}

impl<T: Coordinate> Rect<T> {
    #[inline]
    fn contains(&self, p: Point<T>) -> bool {
        self.x1 <= p.x && p.x <= self.x2 && self.y1 <= p.y && p.y <= self.y2
    }
}
