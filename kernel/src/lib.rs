//! Lodestone Kernel: the pattern representation consumed by the search layer.
//!
//! # API Surface
//!
//! - [`context::PropositionalContext`] -- ordered atomic propositions over a
//!   finite population, each with its support set
//! - [`context::LogicalDescriptor`] -- a conjunction of propositions with its
//!   support, refined by specialization and closure
//! - [`proof::hash::canonical_hash`] / [`proof::canon::canonical_json_bytes`]
//!   -- the single place that turns reports into stable digests
//!
//! # Module Dependency Direction
//!
//! `context` and `proof` are independent. Neither depends on the other.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod proof;
