//! Closure systems: element sets with an implication relation.
//!
//! A pattern is closed when it already contains every element it implies.
//! [`crate::lcm`] enumerates closed patterns of any [`ClosureSystem`].

use lodestone_kernel::context::{LogicalDescriptor, Proposition, PropositionalContext};

/// Patterns over elements `0..element_count()`, where adding an implied
/// element never changes what the pattern describes.
pub trait ClosureSystem {
    type Pattern: Clone;

    /// Number of atomic elements; their indices define the canonical order.
    fn element_count(&self) -> usize;

    /// Whether `element` may be used as an augmentation or closure element.
    fn is_eligible(&self, _element: usize) -> bool {
        true
    }

    fn empty_pattern(&self) -> Self::Pattern;

    fn contains(&self, pattern: &Self::Pattern, element: usize) -> bool;

    /// `pattern` with `element` added.
    fn specialization(&self, pattern: &Self::Pattern, element: usize) -> Self::Pattern;

    /// Whether `element` holds wherever `pattern` holds.
    fn implies(&self, pattern: &Self::Pattern, element: usize) -> bool;

    /// Number of objects `pattern` holds for.
    fn support_size(&self, pattern: &Self::Pattern) -> usize;

    /// Add every eligible candidate implied by `pattern`.
    fn closure_over(
        &self,
        pattern: &Self::Pattern,
        candidates: impl Iterator<Item = usize>,
    ) -> Self::Pattern {
        candidates.fold(pattern.clone(), |acc, element| {
            if self.is_eligible(element)
                && !self.contains(&acc, element)
                && self.implies(pattern, element)
            {
                self.specialization(&acc, element)
            } else {
                acc
            }
        })
    }
}

/// The propositions of a context as a closure system over
/// [`LogicalDescriptor`]s, optionally restricted to an eligible subset.
#[derive(Debug, Clone)]
pub struct Propositions<'c> {
    ctx: &'c PropositionalContext,
    eligible: Vec<bool>,
}

impl<'c> Propositions<'c> {
    /// Every proposition is eligible.
    #[must_use]
    pub fn all(ctx: &'c PropositionalContext) -> Self {
        Self {
            ctx,
            eligible: vec![true; ctx.len()],
        }
    }

    /// Only propositions accepted by `filter` are eligible.
    #[must_use]
    pub fn filtered(ctx: &'c PropositionalContext, filter: impl Fn(&Proposition) -> bool) -> Self {
        Self {
            ctx,
            eligible: ctx.propositions().iter().map(filter).collect(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &'c PropositionalContext {
        self.ctx
    }
}

impl ClosureSystem for Propositions<'_> {
    type Pattern = LogicalDescriptor;

    fn element_count(&self) -> usize {
        self.ctx.len()
    }

    fn is_eligible(&self, element: usize) -> bool {
        self.eligible.get(element).copied().unwrap_or(false)
    }

    fn empty_pattern(&self) -> LogicalDescriptor {
        LogicalDescriptor::empty(self.ctx)
    }

    fn contains(&self, pattern: &LogicalDescriptor, element: usize) -> bool {
        pattern.contains(element)
    }

    fn specialization(&self, pattern: &LogicalDescriptor, element: usize) -> LogicalDescriptor {
        pattern.specialization(self.ctx, element)
    }

    fn implies(&self, pattern: &LogicalDescriptor, element: usize) -> bool {
        pattern.empirically_implies(self.ctx, element)
    }

    fn support_size(&self, pattern: &LogicalDescriptor) -> usize {
        pattern.support().len()
    }

    fn closure_over(
        &self,
        pattern: &LogicalDescriptor,
        candidates: impl Iterator<Item = usize>,
    ) -> LogicalDescriptor {
        pattern.support_preserving_specialization(
            self.ctx,
            candidates.filter(|&element| self.is_eligible(element)),
        )
    }
}
