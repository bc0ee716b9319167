//! Search counters and termination reasons.

use serde_json::{json, Value};

use lodestone_kernel::proof::canon::f64_token;

/// Why the main loop stopped. Every variant still yields a well-formed,
/// sorted result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminationReason {
    /// No nodes left to pop.
    FrontierExhausted,
    /// The popped node had no potential under an order that pops in
    /// non-increasing potential, so no remaining node has any.
    EarlyAbort { potential: f64, threshold: f64 },
    /// A [`crate::StopFlag`] was raised.
    StopRequested,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontierExhausted => "frontier_exhausted",
            Self::EarlyAbort { .. } => "early_abort",
            Self::StopRequested => "stop_requested",
        }
    }

    /// Whether the results are guaranteed `alpha`-approximate top-k.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::StopRequested)
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::EarlyAbort {
                potential,
                threshold,
            } => json!({
                "kind": self.as_str(),
                "potential": f64_token(*potential),
                "threshold": f64_token(*threshold),
            }),
            Self::FrontierExhausted | Self::StopRequested => json!({ "kind": self.as_str() }),
        }
    }
}

/// Counters accumulated by one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDiagnostics {
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Children discarded by the estimator chain on insertion.
    pub discarded_by_potential: u64,
    /// Of those, how many each estimator stage discarded.
    pub discarded_by_estimator: Vec<u64>,
    /// Children rejected by a pruning rule.
    pub discarded_by_pruning: u64,
    /// Popped nodes skipped because the threshold had risen past them.
    pub skipped_on_pop: u64,
    /// Frontier size when the loop stopped.
    pub frontier_size: usize,
    /// Largest frontier size reached.
    pub max_frontier_size: usize,
    /// Deepest node created.
    pub max_depth: u32,
    /// Value of the best node, first encounter.
    pub best_value: f64,
    /// Depth of that node.
    pub best_depth: u32,
}

impl SearchDiagnostics {
    #[must_use]
    pub fn new(estimator_count: usize) -> Self {
        Self {
            nodes_created: 0,
            expansions: 0,
            discarded_by_potential: 0,
            discarded_by_estimator: vec![0; estimator_count],
            discarded_by_pruning: 0,
            skipped_on_pop: 0,
            frontier_size: 0,
            max_frontier_size: 0,
            max_depth: 0,
            best_value: f64::NEG_INFINITY,
            best_depth: 0,
        }
    }

    /// Children never inserted into the frontier.
    #[must_use]
    pub fn nodes_discarded(&self) -> u64 {
        self.discarded_by_potential + self.discarded_by_pruning
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "nodes_created": self.nodes_created,
            "expansions": self.expansions,
            "discarded_by_potential": self.discarded_by_potential,
            "discarded_by_estimator": self.discarded_by_estimator,
            "discarded_by_pruning": self.discarded_by_pruning,
            "skipped_on_pop": self.skipped_on_pop,
            "frontier_size": self.frontier_size,
            "max_frontier_size": self.max_frontier_size,
            "max_depth": self.max_depth,
            "best_value": f64_token(self.best_value),
            "best_depth": self.best_depth,
        })
    }
}
