//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (exhausted frontier, early abort, cooperative stop) are expressed via
//! [`crate::diagnostics::TerminationReason`] and always come with a
//! well-formed result list.

use thiserror::Error;

/// Rejected search configuration. Returned before any node is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// `k` must be at least 1.
    #[error("result count must be at least 1, got {result_count}")]
    InvalidResultCount { result_count: usize },
    /// `alpha` must lie in `(0, 1]`.
    #[error("approximation factor alpha must lie in (0, 1], got {alpha}")]
    InvalidAlpha { alpha: f64 },
    /// A multi-root search was given no roots.
    #[error("at least one root is required")]
    EmptyRootSet,
    /// The driver needs at least one optimistic estimator.
    #[error("at least one optimistic estimator is required")]
    EmptyEstimatorChain,
    /// A traversal order name did not match any known order.
    #[error("unknown traverse order {name:?}")]
    UnknownTraverseOrder { name: String },
}
