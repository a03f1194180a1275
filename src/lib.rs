//! # PST - Priority Search Tree
//!
//! A Rust library providing a static priority search tree for orthogonal range
//! queries over 2D points.
//!
//! ## Features
//!
//! - **Three-sided queries**: all points with `x1 <= x <= x2` and `y >= y1` in O(log n + k)
//! - **Four-sided queries**: all points inside a closed rectangle
//! - **Flat storage**: nodes live in one pre-order array with index links
//! - **Static Optimization**: built once, then shared read-only (`&self` queries, `Send + Sync`)
//! - **Generic coordinates**: `i32`, `i64`, `u32`, `u64`, `f32`, `f64`
//!
//! ## Quick Start
//!
//! ```rust
//! use pst::prelude::*;
//!
//! // Points must be sorted by x for `build`; `from_unsorted` sorts them for you
//! let points = vec![
//!     Point::new(5, 45),
//!     Point::new(25, 35),
//!     Point::new(35, 40),
//!     Point::new(50, 10),
//!     Point::new(60, 75),
//!     Point::new(80, 65),
//!     Point::new(85, 15),
//!     Point::new(90, 5),
//! ];
//! let tree = PrioritySearchTree::build(points).unwrap();
//!
//! // Three-sided: 10 <= x <= 60, y >= 36
//! let mut results = Vec::new();
//! tree.query_three_sided(10, 60, 36, &mut results);
//! assert_eq!(results.len(), 2); // (35, 40) and (60, 75)
//!
//! // Four-sided: 10 <= x <= 60, 10 <= y <= 50 (results vector is reused)
//! tree.query_four_sided(10, 60, 10, 50, &mut results);
//! assert_eq!(results.len(), 3); // (25, 35), (35, 40) and (50, 10)
//! ```
//!
//! ## How It Works
//!
//! Each node stores the point with the largest y of its subtree (heap order)
//! and a median x value: the remaining points go left when `x <= median` and
//! right otherwise. A three-sided query stops at the first node below `y1`,
//! since nothing under it can qualify, and only follows children whose x
//! range can overlap `[x1, x2]`.
//!
//! Inputs where many points share one x value unbalance the tree; build and
//! queries use explicit stacks, so depth only costs time.

pub mod builder;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod linear_scan;
pub mod point;
pub mod prelude;
pub mod pst;
mod queries;

pub use builder::PstBuilder;
pub use config::{FourSidedStrategy, PstConfig};
pub use coordinate::Coordinate;
pub use error::{PstError, Result};
#[doc(hidden)]
pub use linear_scan::LinearScan;
pub use point::Point;
pub use pst::{NodeRef, PrioritySearchTree};

#[cfg(test)]
mod comparison_tests;
