//! Lineage resolvers for tests.

use legality_catalog::{PreEvolutionTable, RuleCatalog};
use legality_core::{CreatureRecord, EvolutionLineage, LineageResolver, Species};

/// Resolver that returns the same lineage for every record.
///
/// # Example
///
/// ```
/// use legality_core::{Ball, CreatureRecord, GameVersion, LineageResolver, Species};
/// use legality_test::FixedLineage;
///
/// let resolver = FixedLineage::new(&[700, 133]);
/// let record = CreatureRecord::new(Species(700), Ball::POKE, GameVersion::X);
/// assert_eq!(resolver.lineage(&record).base(), Species(133));
/// ```
#[derive(Debug, Clone)]
pub struct FixedLineage {
    lineage: EvolutionLineage,
}

impl FixedLineage {
    /// Creates a resolver from dex numbers, current species first.
    pub fn new(chain: &[u16]) -> Self {
        Self {
            lineage: EvolutionLineage::from_chain(chain.iter().copied().map(Species)),
        }
    }
}

impl LineageResolver for FixedLineage {
    fn lineage(&self, _record: &CreatureRecord) -> EvolutionLineage {
        self.lineage.clone()
    }
}

/// Resolver that treats every species as unevolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfLineage;

impl LineageResolver for SelfLineage {
    fn lineage(&self, record: &CreatureRecord) -> EvolutionLineage {
        EvolutionLineage::single(record.species)
    }
}

/// The embedded catalog's pre-evolution table.
pub fn builtin_lineage() -> &'static PreEvolutionTable {
    &RuleCatalog::builtin().evolution
}
