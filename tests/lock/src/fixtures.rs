//! Fixture runs shared by several lock tests.
//!
//! Helpers panic on setup failures; these are test-only invariants.

use lodestone_harness::runner::search_world;
use lodestone_harness::worlds::weighted_subsets::WeightedSubsets;
use lodestone_kernel::context::{IndexSet, PropositionalContext};
use lodestone_search::{
    ClosedPatternExpander, Propositions, SearchBuilder, SearchOutcome, SearchPolicy, StopFlag,
    TraverseOrder,
};

/// Seeds used by every regime sweep.
pub const SEEDS: [u64; 6] = [1, 2, 3, 5, 8, 13];

/// Run the weighted-subset regime `(items, seed)` under `policy`.
///
/// # Panics
///
/// Panics if `policy` is rejected.
#[must_use]
pub fn run_weighted(items: usize, seed: u64, policy: SearchPolicy) -> SearchOutcome<String> {
    let world = WeightedSubsets::regime(items, seed);
    search_world(&world, policy, StopFlag::new()).unwrap()
}

/// Every closed pattern of `ctx`, found by running the driver over the
/// closed-pattern expander with an unbounded result set and no pruning.
/// Each pattern is returned as its sorted proposition names.
///
/// # Panics
///
/// Panics if the search cannot be built.
#[must_use]
pub fn closed_patterns_by_search(ctx: &PropositionalContext, order: TraverseOrder) -> Vec<Vec<String>> {
    let system = Propositions::all(ctx);
    let expander = ClosedPatternExpander::new(&system);
    let outcome = SearchBuilder::new(
        expander.root(),
        |n| expander.successors(n),
        |_| 0.0,
        |n| names(ctx, n.closure.elements()),
    )
    .estimator(|_| f64::INFINITY)
    .policy(
        SearchPolicy::default()
            .with_result_count(usize::MAX)
            .with_traverse_order(order),
    )
    .build()
    .unwrap()
    .run();
    outcome.into_patterns()
}

/// Sorted names of the propositions at `elements`.
#[must_use]
pub fn names(ctx: &PropositionalContext, elements: &[usize]) -> Vec<String> {
    let mut names: Vec<String> = elements
        .iter()
        .map(|&e| ctx.proposition(e).name.clone())
        .collect();
    names.sort();
    names
}

/// An eight-object, six-proposition table with several implications
/// and shared supports.
#[must_use]
pub fn mixed_table() -> (Vec<&'static str>, Vec<Vec<bool>>) {
    let names = vec!["u", "v", "w", "x", "y", "z"];
    let rows = vec![
        vec![true, true, false, true, false, true],
        vec![true, false, true, true, false, true],
        vec![false, true, true, false, true, true],
        vec![true, true, true, true, false, true],
        vec![false, false, true, false, true, false],
        vec![true, true, false, true, true, true],
        vec![false, true, false, false, false, true],
        vec![true, false, false, true, false, false],
    ];
    (names, rows)
}

/// [`mixed_table`] with its columns permuted by `order`
/// (`order[i]` is the source column of new column `i`).
///
/// # Panics
///
/// Panics if `order` is not a permutation of the column indices.
#[must_use]
pub fn permuted_context(order: &[usize]) -> PropositionalContext {
    let (names, rows) = mixed_table();
    let names: Vec<&str> = order.iter().map(|&c| names[c]).collect();
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| order.iter().map(|&c| row[c]).collect())
        .collect();
    PropositionalContext::from_table(names, &rows).unwrap()
}

/// Four objects; `p2` holds on every object `p1` holds on. `p1` and `p2`
/// are listed in `p1_first` order, with an unrelated `q` last.
#[must_use]
pub fn implication_context(p1_first: bool) -> PropositionalContext {
    let p1 = ("p1", IndexSet::new([0, 1]));
    let p2 = ("p2", IndexSet::new([0, 1, 2]));
    let q = ("q", IndexSet::new([1, 3]));
    let supports = if p1_first { [p1, p2, q] } else { [p2, p1, q] };
    PropositionalContext::from_supports(4, supports).unwrap()
}
