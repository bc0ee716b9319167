//! Four propositions on five objects: the most frequent non-empty
//! conjunction, found by search and cross-checked by brute force.

use std::time::Duration;

use lodestone_harness::contract::SearchWorld;
use lodestone_harness::runner::{run_with_deadline, search_world};
use lodestone_harness::worlds::frequent_itemsets::{
    all_conjunctions, brute_force_max_support, fixture_context, FrequentItemsets,
};
use lodestone_kernel::context::LogicalDescriptor;
use lodestone_search::generators::MinimalGeneratorExpander;
use lodestone_search::{
    best_first, Propositions, SearchBuilder, SearchPolicy, StopFlag, SubsetExpander,
    TerminationReason, TraverseOrder,
};

#[test]
fn most_frequent_conjunction() {
    let ctx = fixture_context();
    let world = FrequentItemsets::new(&ctx);
    let outcome = search_world(&world, SearchPolicy::default(), StopFlag::new()).unwrap();

    let best = outcome.best().unwrap();
    assert_eq!(best.pattern, "a");
    assert_eq!(best.value, 4.0);
    assert_eq!(best.depth, 1);
    assert_eq!(brute_force_max_support(&ctx), 4);
    assert!(outcome.termination.is_complete());
}

#[test]
fn every_order_agrees() {
    let ctx = fixture_context();
    let world = FrequentItemsets::new(&ctx);
    for order in TraverseOrder::ALL {
        let policy = SearchPolicy::default().with_traverse_order(order);
        let outcome = search_world(&world, policy, StopFlag::new()).unwrap();
        assert_eq!(outcome.into_patterns(), vec!["a".to_string()], "order={order}");
    }
}

#[test]
fn top_three_supports_match_brute_force() {
    let ctx = fixture_context();
    let world = FrequentItemsets::new(&ctx);
    let outcome = search_world(
        &world,
        SearchPolicy::default().with_result_count(3),
        StopFlag::new(),
    )
    .unwrap();

    // Closed patterns are distinct by support, so compare against the
    // distinct supports of all non-empty conjunctions.
    let mut supports: Vec<Vec<u32>> = all_conjunctions(&ctx)
        .iter()
        .filter(|d| !d.is_empty())
        .map(|d| d.support().as_slice().to_vec())
        .collect();
    supports.sort();
    supports.dedup();
    let mut sizes: Vec<usize> = supports.iter().map(Vec::len).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    #[allow(clippy::cast_precision_loss)]
    let expected: Vec<f64> = sizes[..3].iter().map(|&s| s as f64).collect();
    assert_eq!(outcome.values(), expected);
    // Equal values rank by creation order: `c` is a child of the root,
    // `a & b` a grandchild.
    assert_eq!(outcome.results[1].pattern, "c");
    assert_eq!(outcome.results[2].pattern, "a & b");
}

#[test]
fn all_subsets_and_best_first_agree() {
    let ctx = fixture_context();
    let system = Propositions::all(&ctx);
    let expander = SubsetExpander::new(&system);
    let value = |d: &LogicalDescriptor| {
        if d.is_empty() {
            0.0
        } else {
            d.support().len() as f64
        }
    };
    let outcome = best_first(
        expander.root(),
        |n| expander.successors(n),
        |n| value(&n.closure),
        |n| n.closure.support().len() as f64,
        |n| n.closure.render(&ctx),
        1,
        1.0,
        None,
    )
    .unwrap()
    .run();
    assert_eq!(outcome.into_patterns(), vec!["a".to_string()]);
}

#[test]
fn minimal_generators_find_the_same_optimum() {
    let ctx = fixture_context();
    let expander = MinimalGeneratorExpander::new(&ctx);
    let outcome = SearchBuilder::new(
        expander.root(),
        |n| expander.successors(n),
        |n| {
            if n.descriptor.is_empty() {
                0.0
            } else {
                n.descriptor.support().len() as f64
            }
        },
        |n| n.descriptor.render(&ctx),
    )
    .estimator(|n| n.descriptor.support().len() as f64)
    .build()
    .unwrap()
    .run();
    assert_eq!(outcome.into_patterns(), vec!["a".to_string()]);
}

#[test]
fn under_a_deadline() {
    let outcome = run_with_deadline(
        |stop| {
            let ctx = fixture_context();
            let world = FrequentItemsets::new(&ctx);
            search_world(&world, SearchPolicy::default(), stop)
        },
        Duration::from_secs(30),
        Duration::from_secs(1),
    )
    .unwrap();
    assert_ne!(outcome.termination, TerminationReason::StopRequested);
    assert_eq!(outcome.into_patterns(), vec!["a".to_string()]);
}

#[test]
fn root_and_values_follow_the_world() {
    let ctx = fixture_context();
    let world = FrequentItemsets::new(&ctx);
    let children = world.successors(&world.root());
    let rendered: Vec<String> = children.iter().map(|c| world.render(c)).collect();
    // `b` is reached through `a & b`, its closure.
    assert_eq!(rendered, vec!["a", "c", "d"]);
    let values: Vec<f64> = children.iter().map(|c| world.value(c)).collect();
    assert_eq!(values, vec![4.0, 3.0, 2.0]);
}
