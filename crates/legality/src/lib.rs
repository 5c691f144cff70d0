//! Legality - verify that a creature record could have been obtained legitimately
//!
//! Checks recorded attributes, currently the capture ball, against the
//! candidate origin an encounter resolver matched for the record.
//!
//! # Example
//!
//! ```
//! use legality::prelude::*;
//!
//! let record = CreatureRecord::new(Species(25), Ball::MASTER, GameVersion::X);
//! let origin = CandidateOrigin::Egg(EggEncounter { species: Species(172) });
//!
//! let report = legality::analyze(&record, &origin, Generation::GEN6);
//! assert!(!report.is_legal());
//! assert_eq!(
//!     report.get(CheckCategory::Ball).map(|v| v.code),
//!     Some(ResultCode::BallEggMaster)
//! );
//! ```

pub mod console;


// Record, origin and verdict types
pub use legality_core::{
    AbilitySlot, Ball, BallSet, CandidateOrigin, CheckCategory, CreatureRecord,
    DistributionGift, EggEncounter, EvolutionLineage, FixedBall, Form, GameVersion, Gender,
    Generation, LegalityError, LineageResolver, LinkGift, Outcome, ResultCode, SlotType, Species,
    SpeciesForm, StaticEncounter, TradeEncounter, UnclassifiedOrigin, Verdict, WildSlotEncounter,
};

// Rule catalog and configuration
pub use legality_catalog::{
    AnalysisConfig, BatchThreadCount, CatalogError, ContainerBand, PreEvolutionTable,
    RuleCatalog, UncheckedPolicy,
};

// Verifier pipeline
pub use legality_verify::{
    AnalysisContext, BallVerifier, LegalityReport, Pipeline, Verifier, VerifierSet, VerifyError,
};

/// Analyses one record with the built-in verifiers and catalog.
pub fn analyze(
    record: &CreatureRecord,
    origin: &CandidateOrigin,
    generation: Generation,
) -> LegalityReport {
    Pipeline::new((BallVerifier::builtin(),))
        .analyze(&AnalysisContext::new(record, origin, generation))
}

pub mod prelude {
    pub use super::{
        AbilitySlot, Ball, CandidateOrigin, CheckCategory, CreatureRecord, EggEncounter, Form,
        GameVersion, Gender, Generation, Outcome, ResultCode, SlotType, Species, StaticEncounter,
        Verdict, WildSlotEncounter,
    };
    pub use super::{AnalysisConfig, RuleCatalog, UncheckedPolicy};
    pub use super::{AnalysisContext, BallVerifier, LegalityReport, Pipeline, Verifier};
}
