//! Objective function and the chain of optimistic estimators.

/// Objective or estimator over refinement-space elements.
pub type ScoreFn<'a, N> = Box<dyn Fn(&N) -> f64 + 'a>;

/// Outcome of checking a node against the current pruning threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Potential {
    /// Every estimator left the node above the threshold; carries the
    /// tightest bound.
    Survives(f64),
    /// Estimator `stage` brought the bound down to or below the threshold.
    /// Later estimators were not run.
    Discarded { stage: usize, bound: f64 },
}

/// Value function plus an ordered, non-empty list of optimistic
/// estimators. The effective potential is the minimum over all of them.
pub struct Evaluator<'a, N> {
    value: ScoreFn<'a, N>,
    estimators: Vec<ScoreFn<'a, N>>,
}

impl<'a, N> Evaluator<'a, N> {
    #[must_use]
    pub fn new(value: ScoreFn<'a, N>, estimators: Vec<ScoreFn<'a, N>>) -> Self {
        Self { value, estimators }
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.estimators.len()
    }

    #[must_use]
    pub fn value(&self, content: &N) -> f64 {
        (self.value)(content)
    }

    /// Minimum over every estimator, with no early exit.
    #[must_use]
    pub fn full_potential(&self, content: &N) -> f64 {
        self.estimators
            .iter()
            .fold(f64::INFINITY, |bound, estimator| bound.min(estimator(content)))
    }

    /// Run the chain against `threshold`, stopping at the first estimator
    /// that leaves no potential.
    #[must_use]
    pub fn potential_against(&self, content: &N, threshold: f64) -> Potential {
        let mut bound = f64::INFINITY;
        for (stage, estimator) in self.estimators.iter().enumerate() {
            bound = bound.min(estimator(content));
            if !crate::order::has_potential(bound, threshold) {
                return Potential::Discarded { stage, bound };
            }
        }
        Potential::Survives(bound)
    }
}

impl<N> std::fmt::Debug for Evaluator<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("estimators", &self.estimators.len())
            .finish_non_exhaustive()
    }
}
