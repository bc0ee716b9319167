//! Proof module: canonical bytes and domain-separated digests.
//!
//! Search reports are compared across runs and processes by digest; this
//! module is the only place those digests are produced.

pub mod canon;
pub mod hash;
