//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use pst::prelude::*;
//! ```

#[doc(hidden)]
pub use crate::LinearScan;
pub use crate::{
    Coordinate, FourSidedStrategy, NodeRef, Point, PrioritySearchTree, PstBuilder, PstConfig,
    PstError,
};

/// Priority search tree over `f64` coordinates
pub type PstF64 = PrioritySearchTree<f64>;

/// Priority search tree over `i32` coordinates
pub type PstI32 = PrioritySearchTree<i32>;
