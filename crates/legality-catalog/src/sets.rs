//! Species membership sets used by catalog rules.

use std::collections::HashSet;

use legality_core::{EvolutionLineage, Form, Species, SpeciesForm};
use serde::{Deserialize, Serialize};

/// A set of species.
///
/// Deserialised from a plain list of dex numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Vec<Species>", into = "Vec<Species>")]
pub struct SpeciesSet {
    members: HashSet<Species>,
}

impl SpeciesSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, species: Species) -> bool {
        self.members.contains(&species)
    }

    /// Returns true if any species in `lineage` is a member.
    pub fn intersects(&self, lineage: &EvolutionLineage) -> bool {
        lineage.any(|s| self.contains(s))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<Vec<Species>> for SpeciesSet {
    fn from(list: Vec<Species>) -> Self {
        list.into_iter().collect()
    }
}

impl From<SpeciesSet> for Vec<Species> {
    fn from(set: SpeciesSet) -> Self {
        let mut list: Vec<_> = set.members.into_iter().collect();
        list.sort_unstable();
        list
    }
}

impl FromIterator<Species> for SpeciesSet {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// A set of species/form pairs, written as `"species-form"` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SpeciesFormSet {
    members: HashSet<SpeciesForm>,
}

impl SpeciesFormSet {
    #[inline]
    pub fn contains(&self, species: Species, form: Form) -> bool {
        self.members.contains(&SpeciesForm::new(species, form))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl TryFrom<Vec<String>> for SpeciesFormSet {
    type Error = legality_core::LegalityError;

    fn try_from(list: Vec<String>) -> Result<Self, Self::Error> {
        let members = list
            .iter()
            .map(|entry| entry.parse::<SpeciesForm>())
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { members })
    }
}

impl From<SpeciesFormSet> for Vec<String> {
    fn from(set: SpeciesFormSet) -> Self {
        let mut keys: Vec<_> = set.members.into_iter().collect();
        keys.sort_unstable();
        keys.into_iter().map(|k| k.to_string()).collect()
    }
}

impl FromIterator<SpeciesForm> for SpeciesFormSet {
    fn from_iter<I: IntoIterator<Item = SpeciesForm>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Inclusive dex number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesRange {
    pub first: Species,
    pub last: Species,
}

impl SpeciesRange {
    #[inline]
    pub fn contains(&self, species: Species) -> bool {
        self.first <= species && species <= self.last
    }
}

/// Species numbered above a threshold, minus named exceptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LateSpecies {
    pub above: Species,
    #[serde(default)]
    pub except: SpeciesSet,
}

impl LateSpecies {
    #[inline]
    pub fn contains(&self, species: Species) -> bool {
        species > self.above && !self.except.contains(species)
    }
}
