//! Verifier pipeline and ball legality rules.
//!
//! A [`Pipeline`] runs a tuple of [`Verifier`]s over an [`AnalysisContext`]
//! and collects their verdicts in a [`LegalityReport`]. The
//! [`BallVerifier`] judges the capture ball against the candidate origin.
//!
//! # Examples
//!
//! ```
//! use legality_core::{Ball, CandidateOrigin, CheckCategory, CreatureRecord, EggEncounter};
//! use legality_core::{GameVersion, Species};
//! use legality_verify::{AnalysisContext, BallVerifier, Pipeline};
//!
//! let pipeline = Pipeline::new((BallVerifier::builtin(),));
//! let record = CreatureRecord::new(Species(700), Ball::DREAM, GameVersion::Y);
//! let origin = CandidateOrigin::Egg(EggEncounter { species: Species(133) });
//!
//! let report = pipeline.analyze(&AnalysisContext::for_record(&record, &origin));
//! assert!(report.is_legal());
//! assert!(report.get(CheckCategory::Ball).unwrap().is_valid());
//! ```

pub mod api;
pub mod ball;
pub mod error;
pub mod pipeline;

pub use api::{AnalysisContext, LegalityReport, Verifier, VerifierSet};
pub use ball::BallVerifier;
pub use error::{Result, VerifyError};
pub use pipeline::Pipeline;
