//! Sorted sets of object ids.

/// An immutable, sorted, duplicate-free set of object ids.
///
/// Support sets are intersected on every specialization and tested for
/// inclusion on every implication check, so both run as linear merges over
/// the sorted representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexSet {
    ids: Vec<u32>,
}

impl IndexSet {
    /// Build from arbitrary ids; sorts and removes duplicates.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut ids: Vec<u32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// The empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// All ids `0..size`.
    #[must_use]
    pub fn full(size: u32) -> Self {
        Self {
            ids: (0..size).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Ids in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Set intersection.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.ids.len().min(other.ids.len()));
        let (mut i, mut j) = (0, 0);
        while i < self.ids.len() && j < other.ids.len() {
            match self.ids[i].cmp(&other.ids[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    out.push(self.ids[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        Self { ids: out }
    }

    /// Whether every id of `self` is also in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.ids.len() > other.ids.len() {
            return false;
        }
        let mut j = 0;
        for &id in &self.ids {
            while j < other.ids.len() && other.ids[j] < id {
                j += 1;
            }
            if j == other.ids.len() || other.ids[j] != id {
                return false;
            }
            j += 1;
        }
        true
    }
}

impl FromIterator<u32> for IndexSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self::new(iter)
    }
}
