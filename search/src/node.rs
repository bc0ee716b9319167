//! Evaluated search nodes and the frontier ordering key.

use std::cmp::Ordering;

use crate::order::{cmp_nan_smallest, TraverseOrder};

/// An immutable, evaluated candidate pattern.
///
/// `node_id` doubles as creation order: ids are handed out by the driver
/// from a single monotonic counter, so a smaller id is always older.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<N> {
    /// Monotonic node identifier (root = 0).
    pub node_id: u64,
    /// The node this one was refined from (`None` for root).
    pub parent_id: Option<u64>,
    /// The refinement-space element.
    pub content: N,
    /// Objective value.
    pub value: f64,
    /// Upper bound on the value of anything reachable from here.
    /// Unbounded (`+inf`) until the estimator chain has run.
    pub potential: f64,
    /// Refinement steps from the root.
    pub depth: u32,
}

/// The frontier ordering key. Greater pops first.
///
/// `level` is the depth for breadth-first orders and zero otherwise;
/// `score` is the potential or value the order ranks by. Shallower level
/// wins, then higher score (NaN lowest), then older node.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub level: u32,
    pub score: f64,
    pub node_id: u64,
}

impl FrontierKey {
    /// The key `order` assigns to `node`.
    ///
    /// Stack and queue orders never look at the key; they get the
    /// potential key so the type stays total.
    #[must_use]
    pub fn for_node<N>(order: TraverseOrder, node: &SearchNode<N>) -> Self {
        let (level, score) = match order {
            TraverseOrder::BestFsPotential | TraverseOrder::Dfs | TraverseOrder::Fifo => {
                (0, node.potential)
            }
            TraverseOrder::BestFsValue => (0, node.value),
            TraverseOrder::BreadthFsPotential => (node.depth, node.potential),
            TraverseOrder::BreadthFsValue => (node.depth, node.value),
        };
        Self {
            level,
            score,
            node_id: node.node_id,
        }
    }
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .level
            .cmp(&self.level)
            .then(cmp_nan_smallest(self.score, other.score))
            .then(other.node_id.cmp(&self.node_id))
    }
}
