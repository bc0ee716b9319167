//! Lodestone Search: top-k branch-and-bound over refinement spaces.
//!
//! This crate holds the optimization engine and the canonical traversal
//! schemes. It depends only on `lodestone_kernel`, and only for the
//! propositional closure system and report digests.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestone_kernel  ←  lodestone_search  ←  lodestone_harness
//! (context, proof)     (driver, frontier)    (runner, worlds)
//! ```
//!
//! # Key types
//!
//! - [`SearchBuilder`] / [`BranchAndBound`] -- the search driver
//! - [`SearchPolicy`] -- result count, alpha, depth limit, traversal order
//! - [`TraverseOrder`] -- frontier pop order and early-abort eligibility
//! - [`SearchNode`] -- evaluated candidate with value and potential
//! - [`ClosedPatternExpander`] -- duplicate-free closed-pattern successors
//! - [`OpusTree`] -- operator refinement with pruning-aware operator hand-out
//! - [`SearchOutcome`] / [`SearchDiagnostics`] -- results and counters
//! - [`StopFlag`] -- cooperative cancellation handle

#![forbid(unsafe_code)]

pub mod closure;
pub mod diagnostics;
pub mod error;
pub mod estimator;
mod frontier;
pub mod generators;
pub mod lcm;
pub mod node;
pub mod opus;
pub mod order;
pub mod policy;
pub mod report;
mod results;
pub mod search;
pub mod stop;

pub use closure::{ClosureSystem, Propositions};
pub use diagnostics::{SearchDiagnostics, TerminationReason};
pub use error::SearchError;
pub use generators::{MinimalGeneratorExpander, OperatorTree};
pub use lcm::{ClosedPatternExpander, LcmNode, SubsetExpander};
pub use node::SearchNode;
pub use opus::{OperatorOrder, OpusNode, OpusTree};
pub use order::TraverseOrder;
pub use policy::SearchPolicy;
pub use report::SearchReport;
pub use search::{best_first, BranchAndBound, Ranked, SearchBuilder, SearchOutcome};
pub use stop::StopFlag;

/// Driver-private containers, reachable only for the benchmark suites.
#[doc(hidden)]
pub mod bench_support {
    pub use crate::frontier::Frontier;
    pub use crate::results::ResultSet;
}
