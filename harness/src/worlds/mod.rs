//! World implementations for the harness runner.

pub mod frequent_itemsets;
pub mod weighted_subsets;
