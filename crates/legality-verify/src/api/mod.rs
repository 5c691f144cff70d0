//! Statically dispatched verifier API.
//!
//! This module provides:
//! - `Verifier` trait for a single record facet
//! - `VerifierSet` trait for tuple-based verifier evaluation
//! - `AnalysisContext` shared by every verifier in a pass
//! - `LegalityReport` aggregating the verdicts of a pass

pub mod context;
pub mod report;
pub mod verifier;


pub use context::AnalysisContext;
pub use report::LegalityReport;
pub use verifier::{Verifier, VerifierSet};
