//! Pre-evolution table: the catalog's reference lineage resolver.

use std::collections::HashMap;

use legality_core::{CreatureRecord, EvolutionLineage, LineageResolver, Species};
use serde::{Deserialize, Serialize};

/// Longest lineage the resolver will walk.
const MAX_STAGES: usize = 4;

/// Serialized form: evolution chains listed base stage first.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct EvolutionChains {
    #[serde(default)]
    chains: Vec<Vec<Species>>,
}

/// Maps each species to its pre-evolution.
///
/// Branching families are written as one chain per branch; a species may
/// appear in several chains as long as it always has the same pre-evolution.
///
/// # Example
///
/// ```
/// use legality_catalog::PreEvolutionTable;
/// use legality_core::{Ball, CreatureRecord, GameVersion, LineageResolver, Species};
///
/// let table = PreEvolutionTable::from_chains(vec![
///     vec![Species(133), Species(134)],
///     vec![Species(133), Species(700)],
/// ]).unwrap();
///
/// let record = CreatureRecord::new(Species(700), Ball::POKE, GameVersion::X);
/// let lineage = table.lineage(&record);
/// assert_eq!(lineage.current(), Species(700));
/// assert_eq!(lineage.base(), Species(133));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(try_from = "EvolutionChains", into = "EvolutionChains")]
pub struct PreEvolutionTable {
    chains: Vec<Vec<Species>>,
    parents: HashMap<Species, Species>,
}

impl PreEvolutionTable {
    /// Builds the table, rejecting chains that contradict each other.
    pub fn from_chains(chains: Vec<Vec<Species>>) -> Result<Self, String> {
        let mut parents = HashMap::new();
        for chain in &chains {
            if chain.len() > MAX_STAGES {
                return Err(format!("evolution chain {:?} exceeds {} stages", chain, MAX_STAGES));
            }
            for (i, species) in chain.iter().enumerate() {
                if chain[..i].contains(species) {
                    return Err(format!("evolution chain {:?} repeats {}", chain, species));
                }
            }
            for pair in chain.windows(2) {
                let (parent, child) = (pair[0], pair[1]);
                if let Some(existing) = parents.insert(child, parent) {
                    if existing != parent {
                        return Err(format!(
                            "species {} has two pre-evolutions ({} and {})",
                            child, existing, parent
                        ));
                    }
                }
            }
        }
        Ok(Self { chains, parents })
    }

    /// Immediate pre-evolution of `species`, if any.
    pub fn parent(&self, species: Species) -> Option<Species> {
        self.parents.get(&species).copied()
    }

    /// Lineage of `species`, current species first.
    pub fn lineage_of(&self, species: Species) -> EvolutionLineage {
        let mut chain = vec![species];
        let mut current = species;
        while let Some(parent) = self.parent(current) {
            // chains are acyclic but may still join into a loop across entries
            if chain.len() >= MAX_STAGES || chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        EvolutionLineage::from_chain(chain)
    }

    /// Number of species with a known pre-evolution.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl LineageResolver for PreEvolutionTable {
    fn lineage(&self, record: &CreatureRecord) -> EvolutionLineage {
        self.lineage_of(record.species)
    }
}

impl TryFrom<EvolutionChains> for PreEvolutionTable {
    type Error = String;

    fn try_from(value: EvolutionChains) -> Result<Self, Self::Error> {
        Self::from_chains(value.chains)
    }
}

impl From<PreEvolutionTable> for EvolutionChains {
    fn from(table: PreEvolutionTable) -> Self {
        EvolutionChains {
            chains: table.chains,
        }
    }
}
