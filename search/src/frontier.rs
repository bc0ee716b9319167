//! Frontier storage for every traversal order.
//!
//! Priority orders share one `BinaryHeap` keyed by [`FrontierKey`]; depth
//! first and FIFO use a plain stack and queue. The driver owns the only
//! instance, so callers never observe it directly.

use std::collections::{BinaryHeap, VecDeque};

use crate::node::{FrontierKey, SearchNode};
use crate::order::TraverseOrder;

#[derive(Debug)]
struct FrontierEntry<N> {
    key: FrontierKey,
    node: SearchNode<N>,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store<N> {
    Heap(BinaryHeap<FrontierEntry<N>>),
    Stack(Vec<SearchNode<N>>),
    Queue(VecDeque<SearchNode<N>>),
}

/// Pending nodes, popped in the order a [`TraverseOrder`] prescribes.
#[derive(Debug)]
pub struct Frontier<N> {
    order: TraverseOrder,
    store: Store<N>,
    high_water: usize,
}

impl<N> Frontier<N> {
    /// An empty frontier for `order`.
    #[must_use]
    pub fn new(order: TraverseOrder) -> Self {
        let store = match order {
            TraverseOrder::Dfs => Store::Stack(Vec::new()),
            TraverseOrder::Fifo => Store::Queue(VecDeque::new()),
            TraverseOrder::BestFsPotential
            | TraverseOrder::BestFsValue
            | TraverseOrder::BreadthFsPotential
            | TraverseOrder::BreadthFsValue => Store::Heap(BinaryHeap::new()),
        };
        Self {
            order,
            store,
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: SearchNode<N>) {
        match &mut self.store {
            Store::Heap(heap) => heap.push(FrontierEntry {
                key: FrontierKey::for_node(self.order, &node),
                node,
            }),
            Store::Stack(stack) => stack.push(node),
            Store::Queue(queue) => queue.push_back(node),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove and return the next node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode<N>> {
        match &mut self.store {
            Store::Heap(heap) => heap.pop().map(|e| e.node),
            Store::Stack(stack) => stack.pop(),
            Store::Queue(queue) => queue.pop_front(),
        }
    }

    /// The node [`Frontier::pop`] would return.
    #[must_use]
    pub fn peek(&self) -> Option<&SearchNode<N>> {
        match &self.store {
            Store::Heap(heap) => heap.peek().map(|e| &e.node),
            Store::Stack(stack) => stack.last(),
            Store::Queue(queue) => queue.front(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Heap(heap) => heap.len(),
            Store::Stack(stack) => stack.len(),
            Store::Queue(queue) => queue.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    #[must_use]
    pub fn order(&self) -> TraverseOrder {
        self.order
    }
}
