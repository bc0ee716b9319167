//! Atomic propositions and the context that orders them.

use thiserror::Error;

use super::index_set::IndexSet;

/// Failure while assembling a [`PropositionalContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A support set mentions an object outside the population.
    #[error("proposition {name:?} holds for object {object}, population has {population} objects")]
    ObjectOutOfRange {
        name: String,
        object: u32,
        population: u32,
    },
    /// A table row has a different width than the proposition list.
    #[error("table row {row} has {actual} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The table has more rows than fit into an object id.
    #[error("table has {rows} rows; object ids are limited to u32")]
    PopulationTooLarge { rows: usize },
}

/// A named atomic statement with the set of objects it holds for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
    /// Position in the context; the canonical element order.
    pub index: usize,
    pub name: String,
    pub support: IndexSet,
}

/// An ordered list of propositions over a population `0..population_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropositionalContext {
    population_size: u32,
    propositions: Vec<Proposition>,
}

impl PropositionalContext {
    /// Build from `(name, support)` pairs; element indices follow input order.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::ObjectOutOfRange`] if any support mentions an
    /// object id `>= population_size`.
    pub fn from_supports<S: Into<String>>(
        population_size: u32,
        supports: impl IntoIterator<Item = (S, IndexSet)>,
    ) -> Result<Self, ContextError> {
        let mut propositions = Vec::new();
        for (index, (name, support)) in supports.into_iter().enumerate() {
            let name = name.into();
            if let Some(object) = support.iter().find(|&o| o >= population_size) {
                return Err(ContextError::ObjectOutOfRange {
                    name,
                    object,
                    population: population_size,
                });
            }
            propositions.push(Proposition {
                index,
                name,
                support,
            });
        }
        Ok(Self {
            population_size,
            propositions,
        })
    }

    /// Build from a boolean table: one row per object, one column per
    /// proposition name.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::RowWidthMismatch`] for ragged rows and
    /// [`ContextError::PopulationTooLarge`] if the row count exceeds `u32`.
    pub fn from_table<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        rows: &[Vec<bool>],
    ) -> Result<Self, ContextError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let population_size = u32::try_from(rows.len())
            .map_err(|_| ContextError::PopulationTooLarge { rows: rows.len() })?;
        let mut columns: Vec<Vec<u32>> = vec![Vec::new(); names.len()];
        for (row_index, (object, row)) in (0..population_size).zip(rows).enumerate() {
            if row.len() != names.len() {
                return Err(ContextError::RowWidthMismatch {
                    row: row_index,
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, &holds) in row.iter().enumerate() {
                if holds {
                    columns[column].push(object);
                }
            }
        }
        Self::from_supports(
            population_size,
            names.into_iter().zip(columns.into_iter().map(IndexSet::new)),
        )
    }

    #[must_use]
    pub fn population_size(&self) -> u32 {
        self.population_size
    }

    /// All object ids.
    #[must_use]
    pub fn population(&self) -> IndexSet {
        IndexSet::full(self.population_size)
    }

    #[must_use]
    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    /// Number of propositions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    /// The proposition at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn proposition(&self, index: usize) -> &Proposition {
        &self.propositions[index]
    }

    /// Whether proposition `index` holds for every object in `objects`.
    #[must_use]
    pub fn holds_for(&self, index: usize, objects: &IndexSet) -> bool {
        objects.is_subset_of(&self.propositions[index].support)
    }
}
