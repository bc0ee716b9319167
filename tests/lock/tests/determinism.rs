//! In-process determinism: repeated runs produce byte-identical reports,
//! and persisted reports read back to the same digest.

use lock_tests::fixtures::run_weighted;
use lodestone_harness::report_file::{read_report, write_report};
use lodestone_harness::runner::search_world;
use lodestone_harness::worlds::frequent_itemsets::{fixture_context, FrequentItemsets};
use lodestone_search::{SearchPolicy, SearchReport, StopFlag, TraverseOrder};

const RUNS: usize = 10;

#[test]
fn repeated_runs_produce_identical_reports() {
    for order in TraverseOrder::ALL {
        let policy = SearchPolicy::default()
            .with_result_count(4)
            .with_traverse_order(order);
        let digests: Vec<String> = (0..RUNS)
            .map(|_| {
                let outcome = run_weighted(12, 7, policy.clone());
                let report = SearchReport::from_outcome(&outcome, Clone::clone).unwrap();
                report.digest().unwrap().as_str().to_string()
            })
            .collect();
        assert!(digests.windows(2).all(|w| w[0] == w[1]), "order={order}");
    }
}

#[test]
fn persisted_reports_are_byte_identical() {
    let ctx = fixture_context();
    let world = FrequentItemsets::new(&ctx);
    let policy = SearchPolicy::default().with_result_count(3);

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let mut digests = Vec::new();
    for dir in [a.path(), b.path()] {
        let outcome = search_world(&world, policy.clone(), StopFlag::new()).unwrap();
        let report = SearchReport::from_outcome(&outcome, Clone::clone).unwrap();
        digests.push(write_report(&report, dir).unwrap());
    }
    assert_eq!(digests[0], digests[1]);
    assert_eq!(
        std::fs::read(a.path().join("search_report.json")).unwrap(),
        std::fs::read(b.path().join("search_report.json")).unwrap()
    );
    let bytes = std::fs::read(a.path().join("search_report.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["schema"], "lodestone.search_report.v1");
    assert_eq!(parsed["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(parsed["results"][0]["pattern"], "a");

    let loaded = read_report(a.path()).unwrap();
    assert_eq!(loaded.digest().unwrap(), digests[0]);
}

/// The top five values of this regime are distinct, so every exact order
/// must agree on the ranked patterns.
#[test]
fn ranking_digest_is_independent_of_order() {
    let rankings: Vec<String> = TraverseOrder::ALL
        .into_iter()
        .map(|order| {
            let policy = SearchPolicy::default()
                .with_result_count(5)
                .with_traverse_order(order);
            let outcome = run_weighted(14, 99, policy);
            let report = SearchReport::from_outcome(&outcome, Clone::clone).unwrap();
            report.ranking_digest().unwrap().as_str().to_string()
        })
        .collect();
    assert!(rankings.windows(2).all(|w| w[0] == w[1]), "{rankings:?}");
}
