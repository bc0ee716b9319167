//! Conjunctive descriptors over a [`PropositionalContext`].

use super::index_set::IndexSet;
use super::proposition::PropositionalContext;

/// A conjunction of propositions together with the objects it holds for.
///
/// Elements are kept sorted by proposition index, so two descriptors with
/// the same element set compare equal regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalDescriptor {
    elements: Vec<usize>,
    support: IndexSet,
}

impl LogicalDescriptor {
    /// The empty conjunction; holds for the whole population.
    #[must_use]
    pub fn empty(ctx: &PropositionalContext) -> Self {
        Self {
            elements: Vec::new(),
            support: ctx.population(),
        }
    }

    /// The conjunction of the given proposition indices.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for `ctx`.
    #[must_use]
    pub fn from_elements(ctx: &PropositionalContext, elements: impl IntoIterator<Item = usize>) -> Self {
        let mut elements: Vec<usize> = elements.into_iter().collect();
        elements.sort_unstable();
        elements.dedup();
        let support = support_of(ctx, &elements);
        Self { elements, support }
    }

    /// Proposition indices, ascending.
    #[must_use]
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    #[must_use]
    pub fn support(&self) -> &IndexSet {
        &self.support
    }

    /// Number of propositions in the conjunction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn contains(&self, element: usize) -> bool {
        self.elements.binary_search(&element).is_ok()
    }

    /// Add `element`; the support shrinks to the intersection.
    #[must_use]
    pub fn specialization(&self, ctx: &PropositionalContext, element: usize) -> Self {
        let Err(pos) = self.elements.binary_search(&element) else {
            return self.clone();
        };
        let mut elements = self.elements.clone();
        elements.insert(pos, element);
        let support = self
            .support
            .intersection(&ctx.proposition(element).support);
        Self { elements, support }
    }

    /// Remove `element`, recomputing the support. `None` if absent.
    #[must_use]
    pub fn generalization(&self, ctx: &PropositionalContext, element: usize) -> Option<Self> {
        let pos = self.elements.binary_search(&element).ok()?;
        let mut elements = self.elements.clone();
        elements.remove(pos);
        let support = support_of(ctx, &elements);
        Some(Self { elements, support })
    }

    /// Whether `element` holds on every object this descriptor holds for.
    #[must_use]
    pub fn empirically_implies(&self, ctx: &PropositionalContext, element: usize) -> bool {
        ctx.holds_for(element, &self.support)
    }

    /// Add every candidate that is implied by this descriptor. The support
    /// is unchanged by construction.
    #[must_use]
    pub fn support_preserving_specialization(
        &self,
        ctx: &PropositionalContext,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut elements = self.elements.clone();
        for candidate in candidates {
            if !self.contains(candidate) && self.empirically_implies(ctx, candidate) {
                elements.push(candidate);
            }
        }
        elements.sort_unstable();
        elements.dedup();
        Self {
            elements,
            support: self.support.clone(),
        }
    }

    /// No element can be dropped without growing the support.
    #[must_use]
    pub fn is_minimal(&self, ctx: &PropositionalContext) -> bool {
        self.elements.iter().all(|&e| {
            self.generalization(ctx, e)
                .is_some_and(|g| g.support.len() != self.support.len())
        })
    }

    /// Greedily drop elements in index order while the support size is
    /// preserved. The result describes the same objects.
    #[must_use]
    pub fn lexicographically_last_minimal_generator(&self, ctx: &PropositionalContext) -> Self {
        let mut current = self.clone();
        for &element in &self.elements {
            if let Some(generalization) = current.generalization(ctx, element) {
                if generalization.support.len() == self.support.len() {
                    current = generalization;
                }
            }
        }
        current
    }

    /// Proposition names joined with `&`; `⊤` for the empty conjunction.
    #[must_use]
    pub fn render(&self, ctx: &PropositionalContext) -> String {
        if self.elements.is_empty() {
            return "⊤".to_string();
        }
        self.elements
            .iter()
            .map(|&e| ctx.proposition(e).name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

fn support_of(ctx: &PropositionalContext, elements: &[usize]) -> IndexSet {
    elements.iter().fold(ctx.population(), |acc, &e| {
        acc.intersection(&ctx.proposition(e).support)
    })
}
