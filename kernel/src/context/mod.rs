//! Propositional context: atomic elements, support sets and descriptors.
//!
//! Elements are identified by their position in the context (`0..len`).
//! That index is the total order used by canonical enumeration.

pub mod descriptor;
pub mod index_set;
pub mod proposition;

pub use descriptor::LogicalDescriptor;
pub use index_set::IndexSet;
pub use proposition::{ContextError, Proposition, PropositionalContext};
