//! Lodestone Harness: world-level orchestration for the search driver.
//!
//! Worlds supply a refinement space (root, successors, value, optimistic
//! estimate). The harness wires them into `lodestone_search`, runs them
//! under a deadline, and persists the resulting reports.
//!
//! The harness does NOT implement search logic; it delegates to the
//! search crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod report_file;
pub mod runner;
pub mod worlds;
