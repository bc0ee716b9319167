//! Search policy: result count, approximation factor, depth limit and
//! traversal order.

use serde_json::{json, Value};

use lodestone_kernel::proof::canon::{canonical_json_bytes, f64_token, CanonError};
use lodestone_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;
use crate::order::TraverseOrder;

/// Everything that shapes a search run apart from the refinement space.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    /// Number of results to keep (`k`). At least 1.
    pub result_count: usize,
    /// Approximation factor in `(0, 1]`. A node is kept only while its
    /// potential exceeds the `k`-th best value divided by `alpha`.
    pub alpha: f64,
    /// Children at this depth or deeper are never inserted into the
    /// frontier. `None` for no limit.
    pub max_depth: Option<u32>,
    pub traverse_order: TraverseOrder,
    /// Stop at the first popped node without potential, when the order
    /// supports it. Has no effect for other orders.
    pub early_abort: bool,
    /// Emit a progress event every this many created nodes; 0 disables.
    pub log_interval: u64,
}

impl SearchPolicy {
    /// Reject policies no search can run under.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidResultCount`] if `result_count` is 0 and
    /// [`SearchError::InvalidAlpha`] if `alpha` is outside `(0, 1]` or NaN.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.result_count == 0 {
            return Err(SearchError::InvalidResultCount {
                result_count: self.result_count,
            });
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(SearchError::InvalidAlpha { alpha: self.alpha });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_result_count(mut self, result_count: usize) -> Self {
        self.result_count = result_count;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_traverse_order(mut self, traverse_order: TraverseOrder) -> Self {
        self.traverse_order = traverse_order;
        self
    }

    #[must_use]
    pub fn with_early_abort(mut self, early_abort: bool) -> Self {
        self.early_abort = early_abort;
        self
    }

    /// Whether a node at `depth` may still be inserted into the frontier.
    #[must_use]
    pub fn admits_depth(&self, depth: u32) -> bool {
        !matches!(self.max_depth, Some(limit) if depth >= limit)
    }

    /// Whether the loop stops at the first popped node without potential.
    #[must_use]
    pub fn aborts_early(&self) -> bool {
        self.early_abort && self.traverse_order.supports_early_abort()
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "result_count": self.result_count,
            "alpha": f64_token(self.alpha),
            "max_depth": self.max_depth,
            "traverse_order": self.traverse_order.as_str(),
            "early_abort": self.early_abort,
        })
    }

    /// Digest of [`SearchPolicy::to_json_value`]. `log_interval` only
    /// affects logging and is excluded.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchPolicy,
            &canonical_json_bytes(&self.to_json_value())?,
        ))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            result_count: 1,
            alpha: 1.0,
            max_depth: None,
            traverse_order: TraverseOrder::BestFsPotential,
            early_abort: true,
            log_interval: 10_000,
        }
    }
}
