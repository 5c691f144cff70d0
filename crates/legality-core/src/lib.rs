//! Legality Core - record, origin and verdict types
//!
//! This crate provides the data model shared by the legality crates:
//! - Identifier types for species, forms and capture balls
//! - The creature record under verification
//! - Candidate origins (gifts, trades, encounters, eggs)
//! - Evolution lineage and the resolver contract
//! - Verdicts with stable result codes

pub mod ball;
pub mod error;
pub mod lineage;
pub mod origin;
pub mod record;
pub mod species;
pub mod verdict;


pub use ball::{Ball, BallSet};
pub use error::{LegalityError, Result};
pub use lineage::{EvolutionLineage, LineageResolver};
pub use origin::{
    CandidateOrigin, DistributionGift, EggEncounter, FixedBall, LinkGift, SlotType,
    StaticEncounter, TradeEncounter, UnclassifiedOrigin, WildSlotEncounter,
};
pub use record::{AbilitySlot, CreatureRecord, GameVersion, Gender, Generation};
pub use species::{Form, Species, SpeciesForm};
pub use verdict::{CheckCategory, Outcome, ResultCode, Verdict};
