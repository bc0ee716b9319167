//! Canonical, hashable summary of a search run.
//!
//! Two runs with the same inputs and policy produce byte-identical
//! reports, so the digest doubles as a determinism check.

use serde_json::{json, Value};

use lodestone_kernel::proof::canon::{canonical_json_bytes, f64_token, CanonError};
use lodestone_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::search::SearchOutcome;

/// Schema tag carried by every report.
pub const REPORT_SCHEMA: &str = "lodestone.search_report.v1";

/// A search outcome with its patterns rendered to strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    value: Value,
}

impl SearchReport {
    /// Summarize `outcome`, rendering each pattern with `render`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the policy cannot be digested.
    pub fn from_outcome<R>(
        outcome: &SearchOutcome<R>,
        render: impl Fn(&R) -> String,
    ) -> Result<Self, CanonError> {
        let value = json!({
            "schema": REPORT_SCHEMA,
            "policy": outcome.policy.to_json_value(),
            "policy_digest": outcome.policy.digest()?.as_str(),
            "termination": outcome.termination.to_json_value(),
            "diagnostics": outcome.diagnostics.to_json_value(),
            "results": ranking_json(outcome, render),
        });
        Ok(Self { value })
    }

    #[must_use]
    pub fn to_json_value(&self) -> &Value {
        &self.value
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if the report contains a non-integer number,
    /// which no constructor produces.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.value)
    }

    /// Digest of the whole report.
    ///
    /// # Errors
    ///
    /// See [`SearchReport::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchReport,
            &self.to_canonical_json_bytes()?,
        ))
    }

    /// Digest of the ranked results alone. Unaffected by traversal order
    /// whenever the orders agree on the ranking.
    ///
    /// # Errors
    ///
    /// See [`SearchReport::to_canonical_json_bytes`].
    pub fn ranking_digest(&self) -> Result<ContentHash, CanonError> {
        let ranking: Vec<Value> = self.value["results"]
            .as_array()
            .map(|results| {
                results
                    .iter()
                    .map(|r| json!({ "pattern": r["pattern"], "value": r["value"] }))
                    .collect()
            })
            .unwrap_or_default();
        Ok(canonical_hash(
            HashDomain::ResultRanking,
            &canonical_json_bytes(&Value::Array(ranking))?,
        ))
    }

    /// Rebuild from a JSON value, rejecting any other schema.
    #[must_use]
    pub fn from_json_value(value: Value) -> Option<Self> {
        (value["schema"] == REPORT_SCHEMA).then_some(Self { value })
    }
}

fn ranking_json<R>(outcome: &SearchOutcome<R>, render: impl Fn(&R) -> String) -> Value {
    Value::Array(
        outcome
            .results
            .iter()
            .enumerate()
            .map(|(rank, r)| {
                json!({
                    "rank": rank,
                    "pattern": render(&r.pattern),
                    "value": f64_token(r.value),
                    "depth": r.depth,
                    "node_id": r.node_id,
                })
            })
            .collect(),
    )
}
