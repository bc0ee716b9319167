//! Successor generators over closure systems.
//!
//! [`ClosedPatternExpander`] is prefix-preserving closure extension: every
//! closed pattern is generated exactly once, from exactly one parent, no
//! matter how the atomic elements are ordered. [`SubsetExpander`] walks
//! every conjunction instead, also without duplicates.

use crate::closure::ClosureSystem;

/// A closed pattern plus the first element index its children may add.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LcmNode<P> {
    pub closure: P,
    pub min_augmentation_index: usize,
}

/// Closed-pattern successors for a [`ClosureSystem`].
#[derive(Debug, Clone, Copy)]
pub struct ClosedPatternExpander<'s, S> {
    system: &'s S,
}

impl<'s, S: ClosureSystem> ClosedPatternExpander<'s, S> {
    #[must_use]
    pub fn new(system: &'s S) -> Self {
        Self { system }
    }

    /// Closure of the empty pattern: every eligible element that holds
    /// unconditionally.
    #[must_use]
    pub fn root(&self) -> LcmNode<S::Pattern> {
        let empty = self.system.empty_pattern();
        LcmNode {
            closure: self.system.closure_over(&empty, 0..self.system.element_count()),
            min_augmentation_index: 0,
        }
    }

    /// Children of `node`, in increasing augmentation index.
    #[must_use]
    pub fn successors(&self, node: &LcmNode<S::Pattern>) -> Vec<LcmNode<S::Pattern>> {
        (node.min_augmentation_index..self.system.element_count())
            .filter_map(|i| self.refine(&node.closure, i))
            .collect()
    }

    /// Add element `i` and close, unless that would also add an element
    /// before `i`. Such a closure is reachable from another parent.
    fn refine(&self, current: &S::Pattern, i: usize) -> Option<LcmNode<S::Pattern>> {
        let system = self.system;
        if !system.is_eligible(i) || system.contains(current, i) {
            return None;
        }
        let generator = system.specialization(current, i);
        let breaks_prefix = (0..i).any(|j| {
            system.is_eligible(j) && !system.contains(current, j) && system.implies(&generator, j)
        });
        if breaks_prefix {
            return None;
        }
        Some(LcmNode {
            closure: system.closure_over(&generator, i + 1..system.element_count()),
            min_augmentation_index: i + 1,
        })
    }
}

/// Every conjunction of eligible elements, each reached by adding
/// elements in increasing index order.
#[derive(Debug, Clone, Copy)]
pub struct SubsetExpander<'s, S> {
    system: &'s S,
}

impl<'s, S: ClosureSystem> SubsetExpander<'s, S> {
    #[must_use]
    pub fn new(system: &'s S) -> Self {
        Self { system }
    }

    #[must_use]
    pub fn root(&self) -> LcmNode<S::Pattern> {
        LcmNode {
            closure: self.system.empty_pattern(),
            min_augmentation_index: 0,
        }
    }

    #[must_use]
    pub fn successors(&self, node: &LcmNode<S::Pattern>) -> Vec<LcmNode<S::Pattern>> {
        (node.min_augmentation_index..self.system.element_count())
            .filter(|&i| self.system.is_eligible(i))
            .map(|i| LcmNode {
                closure: self.system.specialization(&node.closure, i),
                min_augmentation_index: i + 1,
            })
            .collect()
    }
}
