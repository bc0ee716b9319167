//! OPUS refinement: operators handed out only among surviving siblings.
//!
//! Each node carries the set of operators still active below it. When a
//! node is expanded, every active operator produces one child. Children
//! that a pruning rule or the estimator chain drops take their operator
//! with them: no sibling receives it, so no descendant of a sibling can
//! reapply it. The survivors split the remaining operators
//! non-redundantly, the `i`-th survivor receiving the operators of the
//! survivors after it.
//!
//! The hand-out happens in [`OpusTree::assign`], which is wired into the
//! driver with [`crate::SearchBuilder::on_survivors`]:
//!
//! ```
//! use lodestone_search::{OperatorOrder, OpusTree, SearchBuilder};
//! use lodestone_search::generators::Operator;
//!
//! let operators: Vec<Operator<'_, u32>> = vec![
//!     Box::new(|n: &u32| n | 1),
//!     Box::new(|n: &u32| n | 2),
//! ];
//! let tree = OpusTree::new(operators, OperatorOrder::OpusPaper);
//! let outcome = SearchBuilder::new(
//!     tree.root(0),
//!     |n| tree.successors(n),
//!     |n| f64::from(n.content),
//!     |n| n.content,
//! )
//! .estimator(|_| 3.0)
//! .on_survivors(|survivors| tree.assign(survivors))
//! .build()
//! .unwrap()
//! .run();
//! assert_eq!(outcome.into_patterns(), vec![3]);
//! ```

use std::str::FromStr;

use crate::generators::{Operator, SharedSuffix};
use crate::node::SearchNode;
use crate::order::cmp_nan_smallest;

/// Order in which surviving siblings receive operators. The first
/// survivor in this order gets the largest active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperatorOrder {
    /// Ascending potential: the least promising child gets the most
    /// operators, so the most promising subtrees stay small.
    #[default]
    OpusPaper,
    /// Creation order.
    Trivial,
}

impl OperatorOrder {
    pub const ALL: [Self; 2] = [Self::OpusPaper, Self::Trivial];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpusPaper => "opus_paper",
            Self::Trivial => "trivial",
        }
    }

    /// Reorder `survivors` for the hand-out. Stable, NaN potentials first.
    pub fn arrange<N>(self, survivors: &mut [SearchNode<N>]) {
        match self {
            Self::OpusPaper => {
                survivors.sort_by(|a, b| cmp_nan_smallest(a.potential, b.potential));
            }
            Self::Trivial => {}
        }
    }
}

impl std::fmt::Display for OperatorOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown operator order {s:?}"))
    }
}

/// Content plus the operators still active below it.
#[derive(Debug, Clone, PartialEq)]
pub struct OpusNode<N> {
    pub content: N,
    /// Index of the operator that produced this node; `None` for the root.
    pub operator: Option<usize>,
    /// Operator indices, in hand-out order. Empty until
    /// [`OpusTree::assign`] has run for the node.
    pub active: SharedSuffix,
}

/// A refinement tree over an ordered operator list with OPUS hand-out.
pub struct OpusTree<'a, N> {
    operators: Vec<Operator<'a, N>>,
    order: OperatorOrder,
}

impl<'a, N> OpusTree<'a, N> {
    #[must_use]
    pub fn new(operators: Vec<Operator<'a, N>>, order: OperatorOrder) -> Self {
        Self { operators, order }
    }

    #[must_use]
    pub fn order(&self) -> OperatorOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// A root with every operator active.
    #[must_use]
    pub fn root(&self, content: N) -> OpusNode<N> {
        OpusNode {
            content,
            operator: None,
            active: SharedSuffix::new((0..self.operators.len()).collect::<Vec<_>>()),
        }
    }

    /// One root per operator, operator `i` applied to `base`. Root `i`
    /// keeps the operators after `i` active, so every operator
    /// combination is still reachable exactly once. Meant for
    /// [`crate::SearchBuilder::from_roots`].
    #[must_use]
    pub fn singleton_roots(&self, base: &N) -> Vec<OpusNode<N>> {
        let all = SharedSuffix::new((0..self.operators.len()).collect::<Vec<_>>());
        self.operators
            .iter()
            .enumerate()
            .map(|(index, operator)| OpusNode {
                content: operator(base),
                operator: Some(index),
                active: all.after(index),
            })
            .collect()
    }

    /// One child per active operator, in active order. Children start
    /// with no active operators.
    #[must_use]
    pub fn successors(&self, node: &OpusNode<N>) -> Vec<OpusNode<N>> {
        let pending = SharedSuffix::new(Vec::new());
        node.active
            .as_slice()
            .iter()
            .filter_map(|&index| {
                let operator = self.operators.get(index)?;
                Some(OpusNode {
                    content: operator(&node.content),
                    operator: Some(index),
                    active: pending.clone(),
                })
            })
            .collect()
    }

    /// Hand the surviving siblings' operators out among them.
    ///
    /// Arranges `survivors` by the tree's [`OperatorOrder`]; the
    /// survivor at position `i` then receives the operators of the
    /// survivors at positions `i + 1..`. All of them share one list.
    pub fn assign(&self, survivors: &mut [SearchNode<OpusNode<N>>]) {
        self.order.arrange(survivors);
        let handed_out: Vec<usize> = survivors
            .iter()
            .filter_map(|s| s.content.operator)
            .collect();
        let shared = SharedSuffix::new(handed_out);
        for (position, survivor) in survivors.iter_mut().enumerate() {
            survivor.content.active = shared.after(position);
        }
    }
}

impl<N> std::fmt::Debug for OpusTree<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpusTree")
            .field("operators", &self.operators.len())
            .field("order", &self.order)
            .finish()
    }
}
