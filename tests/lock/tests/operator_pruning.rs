//! OPUS operator hand-out: exact under admissible bounds, and a pruned
//! operator never reappears below a sibling.

use std::cell::RefCell;

use lock_tests::fixtures::SEEDS;
use lodestone_harness::worlds::weighted_subsets::WeightedSubsets;
use lodestone_search::{
    OperatorOrder, OpusNode, SearchBuilder, SearchOutcome, SearchPolicy, TraverseOrder,
};

const ITEMS: usize = 10;

fn run_opus(
    world: &WeightedSubsets,
    order: OperatorOrder,
    policy: SearchPolicy,
    prune: impl Fn(&[usize]) -> bool,
    created: &RefCell<Vec<Vec<usize>>>,
) -> SearchOutcome<Vec<usize>> {
    let tree = world.opus_tree(order);
    SearchBuilder::new(
        tree.root(Vec::new()),
        |n| tree.successors(n),
        |n: &OpusNode<Vec<usize>>| {
            created.borrow_mut().push(n.content.clone());
            world.weight_of(&n.content)
        },
        |n| {
            let mut items = n.content;
            items.sort_unstable();
            items
        },
    )
    .estimator(|n: &OpusNode<Vec<usize>>| world.unordered_estimate(&n.content))
    .pruning_rule(|n: &OpusNode<Vec<usize>>| prune(&n.content))
    .on_survivors(|survivors| tree.assign(survivors))
    .policy(policy)
    .build()
    .unwrap()
    .run()
}

#[test]
fn opus_matches_brute_force() {
    for seed in SEEDS {
        let world = WeightedSubsets::regime(ITEMS, seed);
        let expected = world.brute_force_values();
        for k in [1, 3, 10] {
            for traverse_order in TraverseOrder::ALL {
                for operator_order in OperatorOrder::ALL {
                    let policy = SearchPolicy::default()
                        .with_result_count(k)
                        .with_traverse_order(traverse_order);
                    let outcome =
                        run_opus(&world, operator_order, policy, |_| false, &RefCell::default());
                    assert_eq!(
                        outcome.values(),
                        expected[..k].to_vec(),
                        "seed={seed} k={k} order={traverse_order} operators={operator_order}"
                    );
                }
            }
        }
    }
}

#[test]
fn pruned_singleton_removes_its_operator_everywhere() {
    let world = WeightedSubsets::regime(6, 3);
    for traverse_order in TraverseOrder::ALL {
        for operator_order in OperatorOrder::ALL {
            for pruned in 0..6 {
                let created = RefCell::default();
                let policy = SearchPolicy::default()
                    .with_result_count(usize::MAX)
                    .with_traverse_order(traverse_order);
                let outcome = run_opus(
                    &world,
                    operator_order,
                    policy,
                    |items| items == [pruned],
                    &created,
                );
                let label =
                    format!("order={traverse_order} operators={operator_order} item={pruned}");
                // Every subset without the item, plus the pruned singleton itself.
                assert_eq!(outcome.diagnostics.nodes_created, 33, "{label}");
                assert_eq!(outcome.diagnostics.discarded_by_pruning, 1, "{label}");
                assert_eq!(outcome.results.len(), 33, "{label}");
                assert!(
                    created
                        .borrow()
                        .iter()
                        .all(|items| items.len() == 1 || !items.contains(&pruned)),
                    "{label}"
                );
            }
        }
    }
}
