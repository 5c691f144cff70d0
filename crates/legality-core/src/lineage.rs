//! Evolution lineage and the resolver contract.

use smallvec::SmallVec;

use crate::record::CreatureRecord;
use crate::species::Species;

/// Species reachable by de-evolving a record's species.
///
/// Ordered from the record's current species down to the lowest stage:
/// `current()` is the first element and `base()` the last. A lineage is never
/// empty.
///
/// # Example
///
/// ```
/// use legality_core::{EvolutionLineage, Species};
///
/// let lineage = EvolutionLineage::from_chain([Species(3), Species(2), Species(1)]);
/// assert_eq!(lineage.current(), Species(3));
/// assert_eq!(lineage.base(), Species(1));
/// assert!(lineage.contains(Species(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionLineage {
    chain: SmallVec<[Species; 4]>,
}

impl EvolutionLineage {
    /// Lineage of a species with no pre-evolutions.
    pub fn single(species: Species) -> Self {
        let mut chain = SmallVec::new();
        chain.push(species);
        Self { chain }
    }

    /// Builds a lineage from a current-first chain.
    ///
    /// The first species is the record's own; an empty input yields a
    /// lineage holding `Species(0)` so accessors stay total.
    pub fn from_chain<I: IntoIterator<Item = Species>>(chain: I) -> Self {
        let chain: SmallVec<[Species; 4]> = chain.into_iter().collect();
        if chain.is_empty() {
            return Self::single(Species(0));
        }
        Self { chain }
    }

    /// The record's own species.
    pub fn current(&self) -> Species {
        self.chain[0]
    }

    /// The lowest evolution stage (the species that hatches from an egg).
    pub fn base(&self) -> Species {
        self.chain[self.chain.len() - 1]
    }

    /// Returns true if `species` is anywhere in the lineage.
    pub fn contains(&self, species: Species) -> bool {
        self.chain.contains(&species)
    }

    /// Returns true if any species in the lineage satisfies `predicate`.
    pub fn any<F: FnMut(Species) -> bool>(&self, mut predicate: F) -> bool {
        self.chain.iter().any(|s| predicate(*s))
    }

    /// Iterates current-first.
    pub fn iter(&self) -> impl Iterator<Item = Species> + '_ {
        self.chain.iter().copied()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// Resolves the evolution lineage of a record.
///
/// Implementations must be deterministic: the same record always yields the
/// same ordered lineage.
pub trait LineageResolver: Send + Sync {
    fn lineage(&self, record: &CreatureRecord) -> EvolutionLineage;
}

impl<R: LineageResolver + ?Sized> LineageResolver for &R {
    fn lineage(&self, record: &CreatureRecord) -> EvolutionLineage {
        (**self).lineage(record)
    }
}

impl<R: LineageResolver + ?Sized> LineageResolver for std::sync::Arc<R> {
    fn lineage(&self, record: &CreatureRecord) -> EvolutionLineage {
        (**self).lineage(record)
    }
}
