//! `FrequentItemsets`: closed conjunctions ranked by support.
//!
//! The value of a non-empty conjunction is its support size; the empty
//! conjunction is worth 0. Support size is also an optimistic estimate,
//! since refining a conjunction can only shrink its support.

use lodestone_kernel::context::{IndexSet, LogicalDescriptor, PropositionalContext};
use lodestone_search::{ClosedPatternExpander, ClosureSystem, LcmNode, Propositions};

use crate::contract::SearchWorld;

/// Five objects, four propositions. The most frequent non-empty
/// conjunction is `a` alone, holding for four objects.
///
/// ```text
///        a  b  c  d
///   o0   x  x
///   o1   x  x     x
///   o2   x  x  x
///   o3   x     x
///   o4         x  x
/// ```
#[must_use]
pub fn fixture_context() -> PropositionalContext {
    PropositionalContext::from_supports(
        5,
        [
            ("a", IndexSet::new([0, 1, 2, 3])),
            ("b", IndexSet::new([0, 1, 2])),
            ("c", IndexSet::new([2, 3, 4])),
            ("d", IndexSet::new([1, 4])),
        ],
    )
    .unwrap_or_else(|e| unreachable!("fixture supports are in range: {e}"))
}

/// Closed-pattern search over a propositional context.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<'c> {
    system: Propositions<'c>,
}

impl<'c> FrequentItemsets<'c> {
    /// Every proposition is eligible.
    #[must_use]
    pub fn new(ctx: &'c PropositionalContext) -> Self {
        Self {
            system: Propositions::all(ctx),
        }
    }

    #[must_use]
    pub fn with_system(system: Propositions<'c>) -> Self {
        Self { system }
    }

    #[must_use]
    pub fn context(&self) -> &'c PropositionalContext {
        self.system.context()
    }

    fn expander(&self) -> ClosedPatternExpander<'_, Propositions<'c>> {
        ClosedPatternExpander::new(&self.system)
    }
}

impl SearchWorld for FrequentItemsets<'_> {
    type Node = LcmNode<LogicalDescriptor>;

    fn world_id(&self) -> &str {
        "frequent_itemsets"
    }

    fn root(&self) -> Self::Node {
        self.expander().root()
    }

    fn successors(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.expander().successors(node)
    }

    fn value(&self, node: &Self::Node) -> f64 {
        if node.closure.is_empty() {
            return 0.0;
        }
        support_value(self.system.support_size(&node.closure))
    }

    fn optimistic_estimate(&self, node: &Self::Node) -> f64 {
        support_value(self.system.support_size(&node.closure))
    }

    fn render(&self, node: &Self::Node) -> String {
        node.closure.render(self.context())
    }
}

#[allow(clippy::cast_precision_loss)]
fn support_value(size: usize) -> f64 {
    size as f64
}

/// Every conjunction over `ctx`, empty one included, in subset-mask order.
///
/// Exponential in the number of propositions; for cross-checks on small
/// contexts only.
#[must_use]
pub fn all_conjunctions(ctx: &PropositionalContext) -> Vec<LogicalDescriptor> {
    let n = ctx.len();
    (0..1_u64 << n)
        .map(|mask| {
            LogicalDescriptor::from_elements(ctx, (0..n).filter(|&i| mask & (1 << i) != 0))
        })
        .collect()
}

/// Largest support of a non-empty conjunction, by exhaustive enumeration.
#[must_use]
pub fn brute_force_max_support(ctx: &PropositionalContext) -> usize {
    all_conjunctions(ctx)
        .iter()
        .filter(|d| !d.is_empty())
        .map(|d| d.support().len())
        .max()
        .unwrap_or(0)
}

/// The distinct closures of all conjunctions, as element lists.
#[must_use]
pub fn brute_force_closed_patterns(ctx: &PropositionalContext) -> Vec<Vec<usize>> {
    let mut closed: Vec<Vec<usize>> = all_conjunctions(ctx)
        .iter()
        .map(|d| d.support_preserving_specialization(ctx, 0..ctx.len()).elements().to_vec())
        .collect();
    closed.sort();
    closed.dedup();
    closed
}
