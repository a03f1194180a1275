//! Build and query configuration.

use std::str::FromStr;

/// Traversal used by [`query_four_sided`](crate::PrioritySearchTree::query_four_sided).
///
/// Both strategies return the same points; they differ only in which nodes
/// they visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum FourSidedStrategy {
    /// Single traversal from the root, pruning on `y < y1` and on the median.
    #[default]
    Direct,
    /// Descend to the split node, then follow the left and right boundary
    /// paths, sweeping the subtrees that lie fully inside the x range.
    SplitPath,
}

impl FromStr for FourSidedStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "split" | "split_path" | "split-path" => Ok(Self::SplitPath),
            other => Err(format!("unknown four-sided strategy: {other}")),
        }
    }
}

/// Tree configuration, fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PstConfig {
    /// Reject input that is not sorted ascending by x.
    pub check_sorted: bool,

    /// Traversal used for four-sided queries.
    pub four_sided: FourSidedStrategy,
}

impl Default for PstConfig {
    fn default() -> Self {
        Self {
            check_sorted: true,
            four_sided: FourSidedStrategy::Direct,
        }
    }
}

impl PstConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PST_CHECK_SORTED`: `true`/`false` (also `1`/`0`)
    /// - `PST_FOUR_SIDED`: `direct` or `split`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PST_CHECK_SORTED") {
            match s.trim() {
                "1" | "true" => cfg.check_sorted = true,
                "0" | "false" => cfg.check_sorted = false,
                _ => tracing::warn!(value = %s, "ignoring PST_CHECK_SORTED"),
            }
        }

        if let Ok(s) = std::env::var("PST_FOUR_SIDED") {
            match s.parse::<FourSidedStrategy>() {
                Ok(v) => cfg.four_sided = v,
                Err(e) => tracing::warn!(error = %e, "ignoring PST_FOUR_SIDED"),
            }
        }

        cfg
    }

    /// Sets whether the sorted-input check runs during build
    #[must_use]
    pub fn with_check_sorted(mut self, check_sorted: bool) -> Self {
        self.check_sorted = check_sorted;
        self
    }

    /// Sets the four-sided query strategy
    #[must_use]
    pub fn with_four_sided(mut self, strategy: FourSidedStrategy) -> Self {
        self.four_sided = strategy;
        self
    }
}
