//! Rule catalog and analysis configuration for legality verification.
//!
//! The catalog holds every species list, location and ball band the
//! verifiers consult. It ships embedded in the crate and can be replaced by a
//! TOML or YAML file through [`AnalysisConfig`].
//!
//! # Examples
//!
//! ```
//! use legality_catalog::{ContainerBand, RuleCatalog};
//! use legality_core::{Ball, CreatureRecord, GameVersion, Species};
//!
//! let catalog = RuleCatalog::builtin();
//! let record = CreatureRecord::new(Species(25), Ball::FAST, GameVersion::HeartGold);
//!
//! assert!(catalog.wild_balls(&record).contains(Ball::FAST));
//! assert_eq!(ContainerBand::of(Ball::FAST), ContainerBand::Apricorn);
//! ```

pub mod band;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evolution;
pub mod sets;
pub mod wild;

#[cfg(test)]
mod tests;

pub use band::ContainerBand;
pub use catalog::{
    BandBan, BeastRules, EvolutionOnly, Gen6EggRules, Gen7EggRules, HiddenAbilityBan,
    LocationBalls, LocationInGeneration, Quirks, RuleCatalog, SpeciesInGeneration, TierRules,
};
pub use config::{AnalysisConfig, BatchThreadCount, UncheckedPolicy};
pub use error::{CatalogError, Result};
pub use evolution::PreEvolutionTable;
pub use sets::{LateSpecies, SpeciesFormSet, SpeciesRange, SpeciesSet};
pub use wild::{WildBallEntry, WildBallTable};
