//! Minimal-generator and operator-tree successor generators.
//!
//! Both hand each child the suffix of its parent's augmentation list that
//! comes after the child's own augmentation. Siblings share one immutable
//! list and differ only in their start offset.

use std::rc::Rc;

use lodestone_kernel::context::{LogicalDescriptor, PropositionalContext};

/// The tail `items[start..]` of a shared, immutable index list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSuffix {
    items: Rc<[usize]>,
    start: usize,
}

impl SharedSuffix {
    #[must_use]
    pub fn new(items: impl Into<Rc<[usize]>>) -> Self {
        Self {
            items: items.into(),
            start: 0,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.items[self.start..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The suffix after position `position` of this suffix.
    #[must_use]
    pub fn after(&self, position: usize) -> Self {
        Self {
            items: Rc::clone(&self.items),
            start: (self.start + position + 1).min(self.items.len()),
        }
    }

    /// Whether both suffixes view the same allocation.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

/// A minimal descriptor with the augmentations its children may still use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorNode {
    pub descriptor: LogicalDescriptor,
    pub augmentations: SharedSuffix,
}

/// Enumerates minimal generators: descriptors from which no proposition
/// can be dropped without growing the support.
#[derive(Debug, Clone, Copy)]
pub struct MinimalGeneratorExpander<'c> {
    ctx: &'c PropositionalContext,
}

impl<'c> MinimalGeneratorExpander<'c> {
    #[must_use]
    pub fn new(ctx: &'c PropositionalContext) -> Self {
        Self { ctx }
    }

    /// The empty descriptor with every proposition as augmentation.
    #[must_use]
    pub fn root(&self) -> GeneratorNode {
        GeneratorNode {
            descriptor: LogicalDescriptor::empty(self.ctx),
            augmentations: SharedSuffix::new((0..self.ctx.len()).collect::<Vec<_>>()),
        }
    }

    /// Keep each augmentation whose refinement shrinks the support and is
    /// still minimal. Child `i` may use the kept augmentations after `i`.
    #[must_use]
    pub fn successors(&self, node: &GeneratorNode) -> Vec<GeneratorNode> {
        let support_size = node.descriptor.support().len();
        let (kept, refinements): (Vec<usize>, Vec<LogicalDescriptor>) = node
            .augmentations
            .as_slice()
            .iter()
            .filter_map(|&a| {
                let refinement = node.descriptor.specialization(self.ctx, a);
                (refinement.support().len() < support_size && refinement.is_minimal(self.ctx))
                    .then_some((a, refinement))
            })
            .unzip();
        let shared = SharedSuffix::new(kept);
        refinements
            .into_iter()
            .enumerate()
            .map(|(position, descriptor)| GeneratorNode {
                descriptor,
                augmentations: shared.after(position),
            })
            .collect()
    }
}

/// Refinement operator over arbitrary content.
pub type Operator<'a, N> = Box<dyn Fn(&N) -> N + 'a>;

/// Content plus the operators still applicable below it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorNode<N> {
    pub content: N,
    /// Index of the operator that produced this node.
    pub operator: Option<usize>,
    /// Operators `next_operator..` may be applied to this node.
    pub next_operator: usize,
}

/// Applies operators in a fixed order, each at most once per branch, so
/// every operator combination appears once.
pub struct OperatorTree<'a, N> {
    operators: Vec<Operator<'a, N>>,
}

impl<'a, N> OperatorTree<'a, N> {
    #[must_use]
    pub fn new(operators: Vec<Operator<'a, N>>) -> Self {
        Self { operators }
    }

    #[must_use]
    pub fn root(&self, content: N) -> OperatorNode<N> {
        OperatorNode {
            content,
            operator: None,
            next_operator: 0,
        }
    }

    #[must_use]
    pub fn successors(&self, node: &OperatorNode<N>) -> Vec<OperatorNode<N>> {
        self.operators
            .iter()
            .enumerate()
            .skip(node.next_operator)
            .map(|(index, operator)| OperatorNode {
                content: operator(&node.content),
                operator: Some(index),
                next_operator: index + 1,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<N> std::fmt::Debug for OperatorTree<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorTree")
            .field("operators", &self.operators.len())
            .finish()
    }
}
