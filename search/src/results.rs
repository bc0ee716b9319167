//! Bounded top-k result set.
//!
//! A min-heap of at most `k` nodes whose top is the current worst result.
//! A candidate is admitted while the set is not full, or when its value
//! beats the worst; the worst is then evicted. Among equally-valued worst
//! entries the newest goes first, so the earliest discoveries survive.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::SearchNode;
use crate::order::{cmp_nan_smallest, greater_or_second_nan};

#[derive(Debug)]
struct Kept<N>(SearchNode<N>);

impl<N> PartialEq for Kept<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Kept<N> {}

impl<N> PartialOrd for Kept<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Kept<N> {
    // Greater = worse: lower value, then newer.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_nan_smallest(other.0.value, self.0.value)
            .then(self.0.node_id.cmp(&other.0.node_id))
    }
}

/// The best value ever admitted, recorded on first encounter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestRecord {
    pub node_id: u64,
    pub value: f64,
    pub depth: u32,
}

/// The `k` best nodes seen so far.
#[derive(Debug)]
pub struct ResultSet<N> {
    capacity: usize,
    heap: BinaryHeap<Kept<N>>,
    best: Option<BestRecord>,
}

impl<N: Clone> ResultSet<N> {
    /// An empty set holding at most `capacity` nodes. `capacity` is
    /// validated by the caller to be at least one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::new(),
            best: None,
        }
    }

    /// Offer `node`; it is cloned in only when admitted.
    ///
    /// Returns `true` if the node was admitted.
    pub fn offer(&mut self, node: &SearchNode<N>) -> bool {
        if self.heap.len() >= self.capacity {
            let beats_worst = self
                .heap
                .peek()
                .is_some_and(|worst| greater_or_second_nan(node.value, worst.0.value));
            if !beats_worst {
                return false;
            }
            let _ = self.heap.pop();
        }
        let improves_best = match self.best {
            None => true,
            Some(best) => greater_or_second_nan(node.value, best.value),
        };
        if improves_best {
            self.best = Some(BestRecord {
                node_id: node.node_id,
                value: node.value,
                depth: node.depth,
            });
        }
        self.heap.push(Kept(node.clone()));
        true
    }

    /// Value of the current `k`-th best result, or `-inf` while fewer than
    /// `k` results are held.
    #[must_use]
    pub fn kth_value(&self) -> f64 {
        if self.heap.len() < self.capacity {
            return f64::NEG_INFINITY;
        }
        self.heap.peek().map_or(f64::NEG_INFINITY, |worst| worst.0.value)
    }

    #[must_use]
    pub fn best(&self) -> Option<BestRecord> {
        self.best
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held nodes, best first; equal values keep discovery order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<SearchNode<N>> {
        let mut ranked: Vec<SearchNode<N>> = self.heap.into_iter().map(|k| k.0).collect();
        ranked.sort_by(|a, b| {
            cmp_nan_smallest(b.value, a.value).then(a.node_id.cmp(&b.node_id))
        });
        ranked
    }
}
