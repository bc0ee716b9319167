//! `WeightedSubsets`: synthetic lattice of signed item weights.
//!
//! A node is a set of item indices, grown one operator application at a
//! time; operator `i` adds item `i`. The value is the weight sum. The
//! optimistic estimate adds every positive weight still addable, which
//! is exact for the best descendant and therefore admissible.
//!
//! Weights built by [`WeightedSubsets::regime`] are multiples of 1/4, so
//! every sum is exact and brute-force comparisons can use `==`.

use lodestone_search::generators::{Operator, OperatorNode, OperatorTree};
use lodestone_search::{OperatorOrder, OpusTree};

use crate::contract::SearchWorld;

/// Weighted-subset search world.
#[derive(Debug)]
pub struct WeightedSubsets {
    weights: Vec<f64>,
    tree: OperatorTree<'static, Vec<usize>>,
}

impl WeightedSubsets {
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Self {
        let tree = OperatorTree::new(add_item_operators(weights.len()));
        Self { weights, tree }
    }

    /// The same operators as an OPUS tree, for searches that hand
    /// operators out among surviving siblings. Its nodes carry no
    /// operator cursor, so bound them with [`Self::unordered_estimate`].
    #[must_use]
    pub fn opus_tree(&self, order: OperatorOrder) -> OpusTree<'static, Vec<usize>> {
        OpusTree::new(add_item_operators(self.weights.len()), order)
    }

    /// Weight of `items` plus every positive weight not yet in it.
    #[must_use]
    pub fn unordered_estimate(&self, items: &[usize]) -> f64 {
        let missing: f64 = self
            .weights
            .iter()
            .enumerate()
            .filter(|(i, w)| **w > 0.0 && !items.contains(i))
            .map(|(_, w)| w)
            .sum();
        self.weight_of(items) + missing
    }

    /// `items` weights in `[-4, 4]` derived from `seed`, deterministic on
    /// every platform.
    #[must_use]
    pub fn regime(items: usize, seed: u64) -> Self {
        let mut state = seed;
        let weights = (0..items)
            .map(|_| {
                state = splitmix64(state);
                // 33 steps of 1/4 from -4 to 4.
                let step = i32::try_from(state % 33).unwrap_or(0);
                f64::from(step - 16) / 4.0
            })
            .collect();
        Self::new(weights)
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of the weights of `items`.
    #[must_use]
    pub fn weight_of(&self, items: &[usize]) -> f64 {
        items.iter().map(|&i| self.weights[i]).sum()
    }

    /// Values of all `2^n` subsets, best first.
    ///
    /// # Panics
    ///
    /// Panics if there are 64 or more items.
    #[must_use]
    pub fn brute_force_values(&self) -> Vec<f64> {
        let n = self.weights.len();
        assert!(n < 64, "brute force over {n} items");
        let mut values: Vec<f64> = (0..1_u64 << n)
            .map(|mask| {
                (0..n)
                    .filter(|&i| mask & (1 << i) != 0)
                    .map(|i| self.weights[i])
                    .sum()
            })
            .collect();
        values.sort_by(|a, b| b.total_cmp(a));
        values
    }
}

impl SearchWorld for WeightedSubsets {
    type Node = OperatorNode<Vec<usize>>;

    fn world_id(&self) -> &str {
        "weighted_subsets"
    }

    fn root(&self) -> Self::Node {
        self.tree.root(Vec::new())
    }

    fn successors(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.tree.successors(node)
    }

    fn value(&self, node: &Self::Node) -> f64 {
        self.weight_of(&node.content)
    }

    fn optimistic_estimate(&self, node: &Self::Node) -> f64 {
        let addable: f64 = self.weights[node.next_operator.min(self.weights.len())..]
            .iter()
            .filter(|w| **w > 0.0)
            .sum();
        self.value(node) + addable
    }

    fn render(&self, node: &Self::Node) -> String {
        if node.content.is_empty() {
            return "∅".to_string();
        }
        let items: Vec<String> = node.content.iter().map(ToString::to_string).collect();
        format!("{{{}}}", items.join(","))
    }
}

/// Operator `i` appends item `i`.
fn add_item_operators(count: usize) -> Vec<Operator<'static, Vec<usize>>> {
    (0..count)
        .map(|item| -> Operator<'static, Vec<usize>> {
            Box::new(move |items: &Vec<usize>| {
                let mut grown = items.clone();
                grown.push(item);
                grown
            })
        })
        .collect()
}

fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
