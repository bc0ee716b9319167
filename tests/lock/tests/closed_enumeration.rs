//! The closed-pattern expander emits every distinct closed pattern
//! exactly once, whatever the input order of the propositions.

use std::collections::BTreeSet;

use lock_tests::fixtures::{closed_patterns_by_search, names, permuted_context};
use lodestone_harness::worlds::frequent_itemsets::brute_force_closed_patterns;
use lodestone_search::TraverseOrder;

const PERMUTATIONS: [[usize; 6]; 4] = [
    [0, 1, 2, 3, 4, 5],
    [5, 4, 3, 2, 1, 0],
    [2, 0, 5, 1, 3, 4],
    [3, 5, 1, 4, 0, 2],
];

fn as_set(patterns: Vec<Vec<String>>) -> BTreeSet<Vec<String>> {
    let count = patterns.len();
    let set: BTreeSet<Vec<String>> = patterns.into_iter().collect();
    assert_eq!(set.len(), count, "a closed pattern was emitted twice");
    set
}

#[test]
fn search_finds_exactly_the_brute_force_closures() {
    let ctx = permuted_context(&PERMUTATIONS[0]);
    let expected: BTreeSet<Vec<String>> = brute_force_closed_patterns(&ctx)
        .iter()
        .map(|elements| names(&ctx, elements))
        .collect();
    for order in TraverseOrder::ALL {
        assert_eq!(
            as_set(closed_patterns_by_search(&ctx, order)),
            expected,
            "order={order}"
        );
    }
}

#[test]
fn element_order_does_not_change_the_enumeration() {
    let baseline = as_set(closed_patterns_by_search(
        &permuted_context(&PERMUTATIONS[0]),
        TraverseOrder::Fifo,
    ));
    for permutation in &PERMUTATIONS[1..] {
        let ctx = permuted_context(permutation);
        let found = as_set(closed_patterns_by_search(&ctx, TraverseOrder::Dfs));
        assert_eq!(found, baseline, "permutation={permutation:?}");
    }
}
