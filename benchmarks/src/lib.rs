//! Shared inputs for the lodestone benchmark suites.

use lodestone_kernel::context::PropositionalContext;
use lodestone_search::SearchNode;

/// `count` synthetic nodes with scattered values and potentials, ids in
/// creation order.
#[must_use]
pub fn synthetic_nodes(count: u64) -> Vec<SearchNode<u64>> {
    (0..count)
        .map(|id| {
            let scatter = id.wrapping_mul(0x9e37_79b9_7f4a_7c15) >> 40;
            #[allow(clippy::cast_precision_loss)]
            let value = (scatter % 1000) as f64;
            SearchNode {
                node_id: id,
                parent_id: id.checked_sub(1),
                content: id,
                value,
                potential: value + 100.0,
                depth: u32::try_from(id % 16).unwrap_or(0),
            }
        })
        .collect()
}

/// A dense-ish `objects x propositions` boolean table, deterministic in
/// its dimensions.
///
/// # Panics
///
/// Panics if `objects` does not fit into an object id.
#[must_use]
pub fn banded_context(objects: usize, propositions: usize) -> PropositionalContext {
    let rows: Vec<Vec<bool>> = (0..objects)
        .map(|o| {
            (0..propositions)
                .map(|p| (o * 7 + p * 3) % 5 < 3 || (o + p) % 11 == 0)
                .collect()
        })
        .collect();
    let names: Vec<String> = (0..propositions).map(|p| format!("p{p}")).collect();
    PropositionalContext::from_table(names, &rows).expect("banded table is rectangular")
}
