//! A raised stop flag ends the search before the next pop, and the
//! result list is still non-empty and sorted.

use std::cell::Cell;
use std::time::Duration;

use lodestone_harness::contract::SearchWorld;
use lodestone_harness::runner::{run_with_deadline, search_world};
use lodestone_harness::worlds::weighted_subsets::WeightedSubsets;
use lodestone_search::{SearchBuilder, SearchPolicy, StopFlag, TerminationReason, TraverseOrder};

#[test]
fn stop_after_n_created_nodes() {
    let world = WeightedSubsets::regime(16, 77);
    for threshold in [1_u64, 10, 100, 1000] {
        for order in TraverseOrder::ALL {
            let stop = StopFlag::new();
            let created = Cell::new(1_u64);
            let calls_after_stop = Cell::new(0_u64);
            let outcome = SearchBuilder::new(
                world.root(),
                |n| {
                    if stop.is_stop_requested() {
                        calls_after_stop.set(calls_after_stop.get() + 1);
                    }
                    let children = world.successors(n);
                    created.set(created.get() + children.len() as u64);
                    if created.get() >= threshold {
                        stop.request_stop();
                    }
                    children
                },
                |n| world.value(n),
                |n| world.render(&n),
            )
            .estimator(|_| f64::INFINITY)
            .policy(
                SearchPolicy::default()
                    .with_result_count(5)
                    .with_traverse_order(order),
            )
            .stop_flag(stop.clone())
            .build()
            .unwrap()
            .run();

            assert_eq!(calls_after_stop.get(), 0, "threshold={threshold} order={order}");
            assert_eq!(outcome.termination, TerminationReason::StopRequested);
            assert!(outcome.diagnostics.expansions >= 1);
            assert!(!outcome.results.is_empty());
            let values = outcome.values();
            assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn flag_raised_from_another_thread() {
    let outcome = run_with_deadline(
        |stop| {
            let world = WeightedSubsets::regime(60, 5);
            // An unbounded estimator keeps every node alive.
            SearchBuilder::new(
                world.root(),
                |n| world.successors(n),
                |n| world.value(n),
                |n| world.render(&n),
            )
            .estimator(|_| f64::INFINITY)
            .policy(SearchPolicy::default().with_traverse_order(TraverseOrder::Dfs))
            .stop_flag(stop)
            .build()
            .map(lodestone_search::BranchAndBound::run)
        },
        Duration::from_millis(100),
        Duration::from_secs(30),
    )
    .unwrap();
    assert_eq!(outcome.termination, TerminationReason::StopRequested);
    assert_eq!(outcome.results.len(), 1);
    assert!(outcome.diagnostics.expansions > 0);
}

#[test]
fn completed_run_is_not_marked_stopped() {
    let world = WeightedSubsets::regime(8, 3);
    let stop = StopFlag::new();
    let outcome = search_world(&world, SearchPolicy::default(), stop.clone()).unwrap();
    assert!(outcome.termination.is_complete());
    assert!(!stop.is_stop_requested());
}
