//! Traversal orders and the NaN-aware comparisons they rely on.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// How the frontier is ordered.
///
/// Only [`TraverseOrder::BestFsPotential`] pops in non-increasing potential
/// order, so it is the only order for which the first popped node without
/// potential proves that no remaining node has any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraverseOrder {
    /// Highest potential first.
    #[default]
    BestFsPotential,
    /// Highest value first.
    BestFsValue,
    /// Shallowest first; highest potential within a level.
    BreadthFsPotential,
    /// Shallowest first; highest value within a level.
    BreadthFsValue,
    /// Most recently inserted first.
    Dfs,
    /// First inserted first.
    Fifo,
}

impl TraverseOrder {
    /// Every order, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::BestFsPotential,
        Self::BestFsValue,
        Self::BreadthFsPotential,
        Self::BreadthFsValue,
        Self::Dfs,
        Self::Fifo,
    ];

    /// Whether the search may stop at the first popped node without
    /// potential.
    #[must_use]
    pub fn supports_early_abort(self) -> bool {
        matches!(self, Self::BestFsPotential)
    }

    /// Snake-case name used in configuration and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestFsPotential => "best_fs_potential",
            Self::BestFsValue => "best_fs_value",
            Self::BreadthFsPotential => "breadth_fs_potential",
            Self::BreadthFsValue => "breadth_fs_value",
            Self::Dfs => "dfs",
            Self::Fifo => "fifo",
        }
    }
}

impl fmt::Display for TraverseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraverseOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| SearchError::UnknownTraverseOrder { name: s.to_string() })
    }
}

/// Total order on `f64` with NaN below every number (NaNs compare equal).
#[must_use]
pub fn cmp_nan_smallest(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// `a > b`, or `b` is NaN while `a` is not.
#[must_use]
pub fn greater_or_second_nan(a: f64, b: f64) -> bool {
    cmp_nan_smallest(a, b) == Ordering::Greater
}

/// A node with this potential can still improve the results iff this holds.
///
/// Written as the negation of `<=` so that a NaN potential is never pruned.
#[must_use]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn has_potential(potential: f64, threshold: f64) -> bool {
    !(potential <= threshold)
}
