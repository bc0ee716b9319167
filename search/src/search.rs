//! Search entry point and expansion loop.
//!
//! The loop pops one node at a time, skips it if the threshold has risen
//! past its potential since insertion, and otherwise generates its
//! children. Every child is offered to the result set before any of them
//! is bounded, so the threshold used to discard siblings already reflects
//! the whole sibling group.

use tracing::{debug, info};

use crate::diagnostics::{SearchDiagnostics, TerminationReason};
use crate::error::SearchError;
use crate::estimator::{Evaluator, Potential, ScoreFn};
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::results::ResultSet;
use crate::stop::StopFlag;

/// Refinement operator: the children of a node, in a fixed order.
pub type SuccessorFn<'a, N> = Box<dyn Fn(&N) -> Vec<N> + 'a>;
/// Extra pruning predicate; `true` discards the child.
pub type PruningRule<'a, N> = Box<dyn Fn(&N) -> bool + 'a>;
/// Conversion from a kept node's content to the reported pattern.
pub type PatternFn<'a, N, R> = Box<dyn Fn(N) -> R + 'a>;
/// Rewrites the children of one expansion that survived pruning and the
/// estimator chain, before they enter the frontier. May reorder them.
pub type SurvivorFn<'a, N> = Box<dyn Fn(&mut [SearchNode<N>]) + 'a>;

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<R> {
    pub pattern: R,
    pub value: f64,
    pub depth: u32,
    pub node_id: u64,
}

/// Result of a search run.
///
/// `results` is sorted by non-increasing value and is well formed no
/// matter how the run terminated.
#[derive(Debug, Clone)]
pub struct SearchOutcome<R> {
    pub results: Vec<Ranked<R>>,
    pub diagnostics: SearchDiagnostics,
    pub termination: TerminationReason,
    /// The policy the run used.
    pub policy: SearchPolicy,
}

impl<R> SearchOutcome<R> {
    #[must_use]
    pub fn best(&self) -> Option<&Ranked<R>> {
        self.results.first()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &R> + '_ {
        self.results.iter().map(|r| &r.pattern)
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.value).collect()
    }

    #[must_use]
    pub fn into_patterns(self) -> Vec<R> {
        self.results.into_iter().map(|r| r.pattern).collect()
    }
}

/// Assembles a [`BranchAndBound`] run.
pub struct SearchBuilder<'a, N, R> {
    roots: Vec<N>,
    root_depth: u32,
    successors: SuccessorFn<'a, N>,
    value: ScoreFn<'a, N>,
    estimators: Vec<ScoreFn<'a, N>>,
    pruning_rules: Vec<PruningRule<'a, N>>,
    survivors: Option<SurvivorFn<'a, N>>,
    to_pattern: PatternFn<'a, N, R>,
    policy: SearchPolicy,
    stop: StopFlag,
}

impl<'a, N: Clone, R> SearchBuilder<'a, N, R> {
    /// A search starting from a single root at depth 0.
    pub fn new(
        root: N,
        successors: impl Fn(&N) -> Vec<N> + 'a,
        value: impl Fn(&N) -> f64 + 'a,
        to_pattern: impl Fn(N) -> R + 'a,
    ) -> Self {
        Self::seeded(vec![root], 0, successors, value, to_pattern)
    }

    /// A search seeded with several roots, all at depth 1, as if they
    /// were the children of an implicit empty root that is never
    /// evaluated. Node ids follow the order of `roots`.
    pub fn from_roots(
        roots: Vec<N>,
        successors: impl Fn(&N) -> Vec<N> + 'a,
        value: impl Fn(&N) -> f64 + 'a,
        to_pattern: impl Fn(N) -> R + 'a,
    ) -> Self {
        Self::seeded(roots, 1, successors, value, to_pattern)
    }

    fn seeded(
        roots: Vec<N>,
        root_depth: u32,
        successors: impl Fn(&N) -> Vec<N> + 'a,
        value: impl Fn(&N) -> f64 + 'a,
        to_pattern: impl Fn(N) -> R + 'a,
    ) -> Self {
        Self {
            roots,
            root_depth,
            successors: Box::new(successors),
            value: Box::new(value),
            estimators: Vec::new(),
            pruning_rules: Vec::new(),
            survivors: None,
            to_pattern: Box::new(to_pattern),
            policy: SearchPolicy::default(),
            stop: StopFlag::new(),
        }
    }

    /// Append an optimistic estimator. Cheaper estimators should come
    /// first; the chain stops at the first one that rules a child out.
    #[must_use]
    pub fn estimator(mut self, estimator: impl Fn(&N) -> f64 + 'a) -> Self {
        self.estimators.push(Box::new(estimator));
        self
    }

    /// Append a pruning predicate; children it returns `true` for are
    /// never inserted into the frontier.
    #[must_use]
    pub fn pruning_rule(mut self, rule: impl Fn(&N) -> bool + 'a) -> Self {
        self.pruning_rules.push(Box::new(rule));
        self
    }

    /// Install a hook that sees the surviving children of every
    /// expansion, in creation order, right before they are pushed.
    /// Children dropped by a pruning rule or by the estimator chain are
    /// not in the list.
    #[must_use]
    pub fn on_survivors(mut self, hook: impl Fn(&mut [SearchNode<N>]) + 'a) -> Self {
        self.survivors = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use an externally owned stop flag.
    #[must_use]
    pub fn stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyEstimatorChain`] without estimators,
    /// [`SearchError::EmptyRootSet`] without roots, or the policy's
    /// validation error.
    pub fn build(self) -> Result<BranchAndBound<'a, N, R>, SearchError> {
        self.policy.validate()?;
        if self.estimators.is_empty() {
            return Err(SearchError::EmptyEstimatorChain);
        }
        if self.roots.is_empty() {
            return Err(SearchError::EmptyRootSet);
        }
        Ok(BranchAndBound {
            roots: self.roots,
            root_depth: self.root_depth,
            successors: self.successors,
            evaluator: Evaluator::new(self.value, self.estimators),
            pruning_rules: self.pruning_rules,
            survivors: self.survivors,
            to_pattern: self.to_pattern,
            policy: self.policy,
            stop: self.stop,
        })
    }
}

/// A validated, ready-to-run search.
pub struct BranchAndBound<'a, N, R> {
    roots: Vec<N>,
    root_depth: u32,
    successors: SuccessorFn<'a, N>,
    evaluator: Evaluator<'a, N>,
    pruning_rules: Vec<PruningRule<'a, N>>,
    survivors: Option<SurvivorFn<'a, N>>,
    to_pattern: PatternFn<'a, N, R>,
    policy: SearchPolicy,
    stop: StopFlag,
}

impl<N, R> std::fmt::Debug for BranchAndBound<'_, N, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchAndBound")
            .field("policy", &self.policy)
            .field("roots", &self.roots.len())
            .field("evaluator", &self.evaluator)
            .field("pruning_rules", &self.pruning_rules.len())
            .field("survivor_hook", &self.survivors.is_some())
            .finish_non_exhaustive()
    }
}

impl<N: Clone, R> BranchAndBound<'_, N, R> {
    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// A handle that stops this search when raised, from any thread.
    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Run to termination.
    ///
    /// Every root is evaluated with the full estimator chain and always
    /// enters both the result set and the frontier.
    #[must_use]
    pub fn run(self) -> SearchOutcome<R> {
        let Self {
            roots,
            root_depth,
            successors,
            evaluator,
            pruning_rules,
            survivors: survivor_hook,
            to_pattern,
            policy,
            stop,
        } = self;

        info!(
            order = %policy.traverse_order,
            k = policy.result_count,
            alpha = policy.alpha,
            max_depth = ?policy.max_depth,
            estimators = evaluator.stage_count(),
            "search started"
        );

        let mut diagnostics = SearchDiagnostics::new(evaluator.stage_count());
        let mut frontier = Frontier::new(policy.traverse_order);
        let mut results = ResultSet::new(policy.result_count);
        let threshold = |results: &ResultSet<N>| results.kth_value() / policy.alpha;

        let mut next_id: u64 = 0;
        for content in roots {
            let root = SearchNode {
                node_id: next_id,
                parent_id: None,
                value: evaluator.value(&content),
                potential: evaluator.full_potential(&content),
                content,
                depth: root_depth,
            };
            next_id += 1;
            let _ = results.offer(&root);
            frontier.push(root);
        }
        diagnostics.nodes_created = next_id;
        diagnostics.max_depth = root_depth;

        let termination = loop {
            if stop.is_stop_requested() {
                break TerminationReason::StopRequested;
            }
            let Some(current) = frontier.pop() else {
                break TerminationReason::FrontierExhausted;
            };

            let current_threshold = threshold(&results);
            if !crate::order::has_potential(current.potential, current_threshold) {
                diagnostics.skipped_on_pop += 1;
                if policy.aborts_early() {
                    break TerminationReason::EarlyAbort {
                        potential: current.potential,
                        threshold: current_threshold,
                    };
                }
                continue;
            }
            if !policy.admits_depth(current.depth) {
                continue;
            }

            diagnostics.expansions += 1;
            let child_depth = current.depth + 1;
            let children: Vec<SearchNode<N>> = successors(&current.content)
                .into_iter()
                .map(|content| {
                    let node = SearchNode {
                        node_id: next_id,
                        parent_id: Some(current.node_id),
                        value: evaluator.value(&content),
                        potential: f64::INFINITY,
                        content,
                        depth: child_depth,
                    };
                    next_id += 1;
                    node
                })
                .collect();
            if children.is_empty() {
                continue;
            }

            let created_before = diagnostics.nodes_created;
            diagnostics.nodes_created += children.len() as u64;
            diagnostics.max_depth = diagnostics.max_depth.max(child_depth);

            for child in &children {
                let previous_best = results.best().map(|b| b.node_id);
                if results.offer(child) && results.best().map(|b| b.node_id) != previous_best {
                    debug!(
                        node_id = child.node_id,
                        value = child.value,
                        depth = child.depth,
                        "new best result"
                    );
                }
            }

            if policy.admits_depth(child_depth) {
                let mut survivors = Vec::with_capacity(children.len());
                for mut child in children {
                    if pruning_rules.iter().any(|rule| rule(&child.content)) {
                        diagnostics.discarded_by_pruning += 1;
                        continue;
                    }
                    match evaluator.potential_against(&child.content, threshold(&results)) {
                        Potential::Survives(bound) => {
                            child.potential = bound;
                            survivors.push(child);
                        }
                        Potential::Discarded { stage, .. } => {
                            diagnostics.discarded_by_potential += 1;
                            diagnostics.discarded_by_estimator[stage] += 1;
                        }
                    }
                }
                if let Some(hook) = &survivor_hook {
                    hook(survivors.as_mut_slice());
                }
                for child in survivors {
                    frontier.push(child);
                }
            }

            if crossed_interval(created_before, diagnostics.nodes_created, policy.log_interval) {
                info!(
                    created = diagnostics.nodes_created,
                    expansions = diagnostics.expansions,
                    discarded = diagnostics.nodes_discarded(),
                    frontier = frontier.len(),
                    max_depth = diagnostics.max_depth,
                    threshold = threshold(&results),
                    top_potential = frontier.peek().map(|n| n.potential),
                    "search progress"
                );
            }
        };

        diagnostics.frontier_size = frontier.len();
        diagnostics.max_frontier_size = frontier.high_water();
        if let Some(best) = results.best() {
            diagnostics.best_value = best.value;
            diagnostics.best_depth = best.depth;
        }

        info!(
            termination = termination.as_str(),
            created = diagnostics.nodes_created,
            expansions = diagnostics.expansions,
            discarded = diagnostics.nodes_discarded(),
            max_frontier = diagnostics.max_frontier_size,
            best_value = diagnostics.best_value,
            "search finished"
        );

        let results = results
            .into_ranked()
            .into_iter()
            .map(|node| Ranked {
                value: node.value,
                depth: node.depth,
                node_id: node.node_id,
                pattern: to_pattern(node.content),
            })
            .collect();

        SearchOutcome {
            results,
            diagnostics,
            termination,
            policy,
        }
    }
}

fn crossed_interval(before: u64, after: u64, interval: u64) -> bool {
    interval > 0 && before / interval < after / interval
}

/// Best-first search with a single estimator.
///
/// # Errors
///
/// Returns the policy's validation error for `result_count == 0` or
/// `alpha` outside `(0, 1]`.
#[allow(clippy::too_many_arguments)]
pub fn best_first<'a, N: Clone, R>(
    root: N,
    successors: impl Fn(&N) -> Vec<N> + 'a,
    value: impl Fn(&N) -> f64 + 'a,
    estimator: impl Fn(&N) -> f64 + 'a,
    to_pattern: impl Fn(N) -> R + 'a,
    result_count: usize,
    alpha: f64,
    max_depth: Option<u32>,
) -> Result<BranchAndBound<'a, N, R>, SearchError> {
    SearchBuilder::new(root, successors, value, to_pattern)
        .estimator(estimator)
        .policy(
            SearchPolicy::default()
                .with_result_count(result_count)
                .with_alpha(alpha)
                .with_max_depth(max_depth),
        )
        .build()
}
