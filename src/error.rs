//! Error type for tree construction and invariant checks.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PstError>;

/// Errors reported while building or checking a tree.
///
/// Queries never fail: malformed bounds and empty trees produce empty results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PstError {
    /// The build precondition does not hold (input not sorted ascending by x,
    /// or more points than the tree can index).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A heap or split invariant does not hold on a built tree.
    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}
