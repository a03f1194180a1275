//! Tree construction.
//!
//! The builder owns the points and never reorders them. Partitioning works on
//! a separate array of point indices: each work item is a range of that array
//! holding one subtree's points in ascending x order. Per item the max-y
//! point (earliest on ties) is rotated to the front of the range, the median
//! is derived from the remainder, and the remainder is stably partitioned
//! into `x <= median` followed by `x > median`. An explicit stack replaces
//! recursion, so degenerate inputs (many equal x values) cannot exhaust the
//! call stack.

use std::cmp::Ordering;

use crate::config::PstConfig;
use crate::coordinate::Coordinate;
use crate::error::{PstError, Result};
use crate::point::Point;
use crate::pst::{NIL, Node, PrioritySearchTree, slot};

/// Collects points, then builds a [`PrioritySearchTree`].
///
/// # Examples
/// ```
/// use pst::PstBuilder;
///
/// let mut builder = PstBuilder::with_capacity(3);
/// builder.add(5, 45);
/// builder.add(25, 35);
/// builder.add(35, 40);
/// let tree = builder.build().unwrap();
///
/// let mut results = Vec::new();
/// tree.query_three_sided(0, 30, 40, &mut results);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PstBuilder<T> {
    points: Vec<Point<T>>,
    config: PstConfig,
    sort_input: bool,
}

impl<T: Coordinate> PstBuilder<T> {
    /// Creates an empty builder with the default configuration
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            config: PstConfig::default(),
            sort_input: false,
        }
    }

    /// Creates a builder that takes ownership of `points`
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Self {
            points,
            config: PstConfig::default(),
            sort_input: false,
        }
    }

    /// Sets the configuration of the tree being built
    #[must_use]
    pub fn with_config(mut self, config: PstConfig) -> Self {
        self.config = config;
        self
    }

    /// Sort the points by x (stable) before building, instead of requiring
    /// them to be added in ascending x order.
    #[must_use]
    pub fn sort_input(mut self, sort: bool) -> Self {
        self.sort_input = sort;
        self
    }

    /// Adds a point
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Point::new(x, y));
    }

    /// Adds a point
    pub fn add_point(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    /// Number of points added so far
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether no point has been added
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Builds the tree, consuming the builder
    ///
    /// # Errors
    /// Returns [`PstError::InvalidInput`] if the points are not sorted
    /// ascending by x (when [`PstConfig::check_sorted`] is set and sorting
    /// was not requested), if a coordinate is NaN or infinite, or if there
    /// are more points than the tree can index.
    pub fn build(self) -> Result<PrioritySearchTree<T>> {
        let Self {
            mut points,
            config,
            sort_input,
        } = self;

        if points.len() >= NIL as usize {
            return Err(PstError::InvalidInput(format!(
                "{} points exceed the tree capacity of {}",
                points.len(),
                NIL - 1
            )));
        }

        if let Some(i) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            tracing::warn!(index = i, "rejecting non-finite coordinate");
            return Err(PstError::InvalidInput(format!(
                "point {i} has a non-finite coordinate {:?}",
                points[i]
            )));
        }

        if sort_input {
            points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
        } else if config.check_sorted {
            check_sorted(&points)?;
        }

        let (nodes, height) = build_arena(&points);
        tracing::debug!(
            points = nodes.len(),
            height,
            strategy = ?config.four_sided,
            "built priority search tree"
        );

        Ok(PrioritySearchTree {
            nodes,
            height,
            config,
        })
    }
}

impl<T: Coordinate> Default for PstBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate> Extend<Point<T>> for PstBuilder<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T: Coordinate> FromIterator<Point<T>> for PstBuilder<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<T: Coordinate> PrioritySearchTree<T> {
    /// Builds a tree from points sorted ascending by x, consuming them.
    ///
    /// Empty input gives an empty tree.
    ///
    /// # Errors
    /// Returns [`PstError::InvalidInput`] if the points are not sorted
    /// ascending by x.
    pub fn build(points: Vec<Point<T>>) -> Result<Self> {
        PstBuilder::from_points(points).build()
    }

    /// Builds a tree from points sorted ascending by x with a custom
    /// configuration.
    ///
    /// # Errors
    /// Returns [`PstError::InvalidInput`] if the points are not sorted
    /// ascending by x and `config.check_sorted` is set.
    pub fn build_with_config(points: Vec<Point<T>>, config: PstConfig) -> Result<Self> {
        PstBuilder::from_points(points).with_config(config).build()
    }

    /// Sorts the points by x (stable), then builds a tree.
    ///
    /// # Errors
    /// Returns [`PstError::InvalidInput`] if an x coordinate is NaN.
    pub fn from_unsorted(points: Vec<Point<T>>) -> Result<Self> {
        PstBuilder::from_points(points).sort_input(true).build()
    }
}

fn check_sorted<T: Coordinate>(points: &[Point<T>]) -> Result<()> {
    let unsorted = points.windows(2).position(|w| {
        w[0].x
            .partial_cmp(&w[1].x)
            .is_none_or(|o| o == Ordering::Greater)
    });
    match unsorted {
        None => Ok(()),
        Some(i) => {
            tracing::warn!(index = i + 1, "rejecting input not sorted by x");
            Err(PstError::InvalidInput(format!(
                "points must be sorted ascending by x: point {} {:?} follows {:?}",
                i + 1,
                points[i + 1],
                points[i]
            )))
        }
    }
}

/// Pending subtree: `order[lo..hi]` becomes the left (`is_left`) or right child of `parent`
#[derive(Clone, Copy, Debug)]
struct Task {
    lo: usize,
    hi: usize,
    parent: u32,
    is_left: bool,
    depth: usize,
}

/// Builds the pre-order node arena. Returns the nodes and the tree height.
///
/// `points.len()` must be below [`NIL`].
pub(crate) fn build_arena<T: Coordinate>(points: &[Point<T>]) -> (Vec<Node<T>>, usize) {
    let n = points.len();
    let mut nodes: Vec<Node<T>> = Vec::with_capacity(n);
    if n == 0 {
        return (nodes, 0);
    }

    let mut order: Vec<u32> = (0..n).map(slot).collect();
    let mut scratch: Vec<u32> = Vec::new();
    let mut height = 0;
    let mut stack = vec![Task {
        lo: 0,
        hi: n,
        parent: NIL,
        is_left: true,
        depth: 1,
    }];

    while let Some(task) = stack.pop() {
        let range = &mut order[task.lo..task.hi];

        let apex_pos = apex_position(range, points);
        // Bring the apex to the front; the others keep their x order.
        range[..=apex_pos].rotate_right(1);
        let apex = points[range[0] as usize];
        let rest = &mut range[1..];

        let median = split_median(apex, rest, points);
        let left_len = partition_by_median(rest, points, median, &mut scratch);

        let index = slot(nodes.len());
        nodes.push(Node {
            point: apex,
            median,
            left: NIL,
            right: NIL,
        });
        if task.parent != NIL {
            let parent = &mut nodes[task.parent as usize];
            if task.is_left {
                parent.left = index;
            } else {
                parent.right = index;
            }
        }
        height = height.max(task.depth);

        let mid = task.lo + 1 + left_len;
        // Left is pushed last so it is built next, keeping pre-order.
        if mid < task.hi {
            stack.push(Task {
                lo: mid,
                hi: task.hi,
                parent: index,
                is_left: false,
                depth: task.depth + 1,
            });
        }
        if task.lo + 1 < mid {
            stack.push(Task {
                lo: task.lo + 1,
                hi: mid,
                parent: index,
                is_left: true,
                depth: task.depth + 1,
            });
        }
    }

    (nodes, height)
}

/// Position of the max-y point in a non-empty range; earliest wins ties.
fn apex_position<T: Coordinate>(range: &[u32], points: &[Point<T>]) -> usize {
    let mut best = 0;
    let mut best_y = points[range[0] as usize].y;
    for (i, &id) in range.iter().enumerate().skip(1) {
        let y = points[id as usize].y;
        if y > best_y {
            best = i;
            best_y = y;
        }
    }
    best
}

/// Split key for a node whose apex has been removed, leaving `rest`.
///
/// With one point left (two in the subtree) the key is the floor midpoint of
/// the apex and that point. Otherwise it is the floor midpoint of the two
/// middle x values of `rest`, or `T::ZERO` when `rest` is empty: a leaf has
/// no children, so its key never routes a point or a query.
fn split_median<T: Coordinate>(apex: Point<T>, rest: &[u32], points: &[Point<T>]) -> T {
    if let [other] = rest {
        return T::floor_midpoint(apex.x, points[*other as usize].x);
    }
    let mid = rest.len() / 2;
    if mid >= 1 {
        T::floor_midpoint(
            points[rest[mid - 1] as usize].x,
            points[rest[mid] as usize].x,
        )
    } else {
        T::ZERO
    }
}

/// Stable in-place partition of `rest` into `x <= median` then `x > median`.
/// Returns the length of the first part.
fn partition_by_median<T: Coordinate>(
    rest: &mut [u32],
    points: &[Point<T>],
    median: T,
    scratch: &mut Vec<u32>,
) -> usize {
    scratch.clear();
    let mut write = 0;
    for read in 0..rest.len() {
        let id = rest[read];
        if points[id as usize].x <= median {
            rest[write] = id;
            write += 1;
        } else {
            scratch.push(id);
        }
    }
    rest[write..].copy_from_slice(scratch);
    write
}
