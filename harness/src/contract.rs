//! World contract trait.

/// A refinement space the harness can search.
///
/// # Contract
///
/// - `successors` is deterministic: the same node always yields the same
///   children in the same order.
/// - `optimistic_estimate(n)` is at least `value(m)` for every `m`
///   reachable from `n`, `n` included.
pub trait SearchWorld {
    type Node: Clone;

    /// Unique world identifier.
    fn world_id(&self) -> &str;

    fn root(&self) -> Self::Node;

    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn value(&self, node: &Self::Node) -> f64;

    fn optimistic_estimate(&self, node: &Self::Node) -> f64;

    /// Stable human-readable form, used in reports.
    fn render(&self, node: &Self::Node) -> String;
}
