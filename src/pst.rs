//! Priority search tree storage and inspection.
//!
//! Nodes live in a single `Vec` in pre-order: a node's left child, when
//! present, is the next slot. Child links are `u32` slot indices with
//! [`NIL`] marking an empty subtree. The tree never changes after build, so
//! every method here takes `&self`.

use std::fmt;

use crate::config::PstConfig;
use crate::coordinate::Coordinate;
use crate::error::{PstError, Result};
use crate::point::Point;

/// Empty child slot
pub(crate) const NIL: u32 = u32::MAX;

/// Arena cell: one point, its split key and two child slots
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<T> {
    pub(crate) point: Point<T>,
    pub(crate) median: T,
    pub(crate) left: u32,
    pub(crate) right: u32,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn left(&self) -> Option<u32> {
        (self.left != NIL).then_some(self.left)
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<u32> {
        (self.right != NIL).then_some(self.right)
    }
}

/// Static priority search tree over 2D points.
///
/// Balanced on median splits of x, max-heap ordered on y. For every node:
/// - its point has the largest y in its subtree;
/// - points in its left subtree have `x <= median`, points in its right
///   subtree have `x > median`.
///
/// Build with [`PrioritySearchTree::build`] (input sorted by x),
/// [`PrioritySearchTree::from_unsorted`] or [`PstBuilder`](crate::PstBuilder).
///
/// # Examples
/// ```
/// use pst::{Point, PrioritySearchTree};
///
/// let points = vec![Point::new(5, 45), Point::new(25, 35), Point::new(35, 40)];
/// let tree = PrioritySearchTree::build(points).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.root().unwrap().point(), Point::new(5, 45));
/// ```
#[derive(Clone, Debug)]
pub struct PrioritySearchTree<T> {
    /// Pre-order node arena, root at slot 0
    pub(crate) nodes: Vec<Node<T>>,
    /// Number of nodes on the longest root-to-leaf path
    pub(crate) height: usize,
    pub(crate) config: PstConfig,
}

impl<T: Coordinate> PrioritySearchTree<T> {
    /// Creates an empty tree. Every query on it returns no points.
    pub fn new() -> Self {
        Self::with_config(PstConfig::default())
    }

    /// Creates an empty tree with the given configuration
    pub fn with_config(config: PstConfig) -> Self {
        Self {
            nodes: Vec::new(),
            height: 0,
            config,
        }
    }

    /// Returns the number of points (and nodes)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree
    pub fn height(&self) -> usize {
        self.height
    }

    /// Configuration the tree was built with
    pub fn config(&self) -> &PstConfig {
        &self.config
    }

    /// Root node, or `None` for an empty tree
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        (!self.nodes.is_empty()).then_some(NodeRef { tree: self, index: 0 })
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef {
            tree: self,
            index: slot(i),
        })
    }

    /// All stored points in pre-order
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Verifies the heap and split invariants on every node, and that every
    /// node is reachable from the root exactly once.
    ///
    /// # Errors
    /// Returns [`PstError::Invariant`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        let n = self.nodes.len();
        let mut stats: Vec<Option<SubtreeStats<T>>> = vec![None; n];
        let mut parents = vec![0usize; n];

        // Children always sit after their parent, so a reverse sweep sees
        // both child summaries before the parent.
        for i in (0..n).rev() {
            let node = &self.nodes[i];
            let mut acc = SubtreeStats::leaf(node.point);

            for (child, is_left) in [(node.left(), true), (node.right(), false)] {
                let Some(c) = child else { continue };
                let c = c as usize;
                if c <= i || c >= n {
                    return Err(PstError::Invariant(format!(
                        "node {i} links to out-of-order slot {c}"
                    )));
                }
                parents[c] += 1;
                let Some(sub) = stats[c] else {
                    return Err(PstError::Invariant(format!("slot {c} has no summary")));
                };
                if sub.max_y > node.point.y {
                    return Err(PstError::Invariant(format!(
                        "heap: node {i} y={:?} below descendant y={:?}",
                        node.point.y, sub.max_y
                    )));
                }
                if is_left && sub.max_x > node.median {
                    return Err(PstError::Invariant(format!(
                        "split: left subtree of node {i} has x={:?} > median {:?}",
                        sub.max_x, node.median
                    )));
                }
                if !is_left && sub.min_x <= node.median {
                    return Err(PstError::Invariant(format!(
                        "split: right subtree of node {i} has x={:?} <= median {:?}",
                        sub.min_x, node.median
                    )));
                }
                acc.merge(&sub);
            }
            stats[i] = Some(acc);
        }

        if let Some(i) = (1..n).find(|&i| parents[i] != 1) {
            return Err(PstError::Invariant(format!(
                "node {i} is referenced {} times",
                parents[i]
            )));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn node(&self, index: u32) -> &Node<T> {
        &self.nodes[index as usize]
    }
}

impl<T: Coordinate> Default for PrioritySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate + fmt::Display> PrioritySearchTree<T> {
    /// Renders the tree sideways, one node per line: right subtree first,
    /// then the node as `-> (x, y)` indented four spaces per level, then the
    /// left subtree.
    ///
    /// # Examples
    /// ```
    /// use pst::{Point, PrioritySearchTree};
    ///
    /// let tree = PrioritySearchTree::build(vec![Point::new(1, 1), Point::new(2, 3)]).unwrap();
    /// assert_eq!(tree.render(), "-> (2, 3)\n    -> (1, 1)\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Coordinate + fmt::Display> fmt::Display for PrioritySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return Ok(());
        }
        // (slot, depth, emit): emit=false expands the node, emit=true prints it
        let mut stack: Vec<(u32, usize, bool)> = vec![(0, 0, false)];
        while let Some((i, depth, emit)) = stack.pop() {
            let node = self.node(i);
            if emit {
                writeln!(f, "{:indent$}-> {}", "", node.point, indent = depth * 4)?;
                continue;
            }
            if let Some(l) = node.left() {
                stack.push((l, depth + 1, false));
            }
            stack.push((i, depth, true));
            if let Some(r) = node.right() {
                stack.push((r, depth + 1, false));
            }
        }
        Ok(())
    }
}

/// Read-only view of one tree node
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a, T> {
    tree: &'a PrioritySearchTree<T>,
    index: u32,
}

impl<'a, T: Coordinate> NodeRef<'a, T> {
    /// Point with the largest y in this node's subtree
    pub fn point(&self) -> Point<T> {
        self.tree.node(self.index).point
    }

    /// Split key: left subtree `x <= median`, right subtree `x > median`
    pub fn median(&self) -> T {
        self.tree.node(self.index).median
    }

    /// Left child, if any
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.index).left().map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// Right child, if any
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.index).right().map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// Pre-order position of this node in the tree
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// Per-subtree extremes used by the invariant check
#[derive(Clone, Copy, Debug)]
struct SubtreeStats<T> {
    min_x: T,
    max_x: T,
    max_y: T,
}

impl<T: Coordinate> SubtreeStats<T> {
    fn leaf(p: Point<T>) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            max_y: p.y,
        }
    }

    fn merge(&mut self, other: &Self) {
        if other.min_x < self.min_x {
            self.min_x = other.min_x;
        }
        if other.max_x > self.max_x {
            self.max_x = other.max_x;
        }
        if other.max_y > self.max_y {
            self.max_y = other.max_y;
        }
    }
}

/// Converts an arena position to a slot index. Callers guarantee `i < NIL`.
#[inline]
#[expect(clippy::cast_possible_truncation, reason = "arena size is capped below u32::MAX at build")]
pub(crate) fn slot(i: usize) -> u32 {
    i as u32
}
