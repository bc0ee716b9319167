//! With `alpha = 1` and an admissible estimator, the driver returns the
//! exact top-k values under every traversal order.

use lock_tests::fixtures::{run_weighted, SEEDS};
use lodestone_harness::contract::SearchWorld;
use lodestone_harness::worlds::weighted_subsets::WeightedSubsets;
use lodestone_search::{SearchBuilder, SearchPolicy, TraverseOrder};

#[test]
fn top_k_matches_brute_force_for_every_order() {
    for seed in SEEDS {
        let expected = WeightedSubsets::regime(10, seed).brute_force_values();
        for k in [1, 3, 10] {
            for order in TraverseOrder::ALL {
                let policy = SearchPolicy::default()
                    .with_result_count(k)
                    .with_traverse_order(order);
                let outcome = run_weighted(10, seed, policy);
                assert_eq!(
                    outcome.values(),
                    expected[..k].to_vec(),
                    "seed={seed} k={k} order={order}"
                );
            }
        }
    }
}

#[test]
fn results_sorted_and_unique() {
    for seed in SEEDS {
        let outcome = run_weighted(9, seed, SearchPolicy::default().with_result_count(20));
        let values = outcome.values();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "seed={seed}: {values:?}");
        let mut patterns: Vec<&String> = outcome.patterns().collect();
        patterns.sort();
        patterns.dedup();
        assert_eq!(patterns.len(), outcome.results.len(), "seed={seed}");
    }
}

#[test]
fn looser_estimators_in_chain_keep_exactness() {
    let world = WeightedSubsets::regime(10, 21);
    let expected = world.brute_force_values();
    let loose_total: f64 = world.weights().iter().filter(|w| **w > 0.0).sum();
    let outcome = SearchBuilder::new(
        world.root(),
        |n| world.successors(n),
        |n| world.value(n),
        |n| world.render(&n),
    )
    .estimator(move |_| loose_total)
    .estimator(|n| world.optimistic_estimate(n))
    .policy(SearchPolicy::default().with_result_count(4))
    .build()
    .unwrap()
    .run();
    assert_eq!(outcome.values(), expected[..4].to_vec());
}
