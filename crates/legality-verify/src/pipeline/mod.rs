//! Runs a verifier set over one record or a batch of records.

#[cfg(test)]
mod tests;

use std::time::Instant;

use legality_catalog::{AnalysisConfig, BatchThreadCount, UncheckedPolicy};
use rayon::prelude::*;
use tracing::info;

use crate::api::{AnalysisContext, LegalityReport, VerifierSet};
use crate::error::Result;

/// Verifier pipeline.
///
/// Each verifier runs once per context, in tuple order, and the verdicts are
/// collected into a [`LegalityReport`].
///
/// # Examples
///
/// ```
/// use legality_core::{Ball, CheckCategory, CreatureRecord, GameVersion, Species};
/// use legality_core::{CandidateOrigin, EggEncounter};
/// use legality_verify::{AnalysisContext, BallVerifier, Pipeline};
///
/// let pipeline = Pipeline::new((BallVerifier::builtin(),));
///
/// let record = CreatureRecord::new(Species(25), Ball::MASTER, GameVersion::X);
/// let origin = CandidateOrigin::Egg(EggEncounter { species: Species(172) });
/// let report = pipeline.analyze(&AnalysisContext::for_record(&record, &origin));
///
/// assert!(!report.is_legal());
/// assert!(report.get(CheckCategory::Ball).unwrap().is_invalid());
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<V> {
    verifiers: V,
    unchecked: UncheckedPolicy,
    batch_threads: BatchThreadCount,
}

impl<V: VerifierSet> Pipeline<V> {
    /// Creates a pipeline with default settings.
    pub fn new(verifiers: V) -> Self {
        Self {
            verifiers,
            unchecked: UncheckedPolicy::default(),
            batch_threads: BatchThreadCount::default(),
        }
    }

    /// Creates a pipeline taking its settings from `config`.
    pub fn with_config(verifiers: V, config: &AnalysisConfig) -> Self {
        Self {
            verifiers,
            unchecked: config.unchecked,
            batch_threads: config.batch_threads,
        }
    }

    pub fn with_unchecked_policy(mut self, policy: UncheckedPolicy) -> Self {
        self.unchecked = policy;
        self
    }

    pub fn with_batch_threads(mut self, threads: BatchThreadCount) -> Self {
        self.batch_threads = threads;
        self
    }

    pub fn verifiers(&self) -> &V {
        &self.verifiers
    }

    /// Analyses one record.
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> LegalityReport {
        LegalityReport::new(self.verifiers.verify_all(ctx), self.unchecked)
    }

    /// Analyses a batch of records, returning reports in input order.
    ///
    /// # Errors
    ///
    /// Returns error if a dedicated thread pool cannot be built.
    pub fn analyze_batch(&self, contexts: &[AnalysisContext<'_>]) -> Result<Vec<LegalityReport>> {
        let start = Instant::now();
        info!(
            event = "batch_start",
            records = contexts.len(),
            verifiers = self.verifiers.verifier_count(),
            threads = ?self.batch_threads,
        );

        let reports: Vec<LegalityReport> = match self.batch_threads {
            BatchThreadCount::None => contexts.iter().map(|ctx| self.analyze(ctx)).collect(),
            BatchThreadCount::Auto => contexts.par_iter().map(|ctx| self.analyze(ctx)).collect(),
            BatchThreadCount::Count(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| contexts.par_iter().map(|ctx| self.analyze(ctx)).collect())
            }
        };

        let illegal = reports.iter().filter(|r| !r.is_legal()).count();
        info!(
            event = "batch_end",
            records = reports.len(),
            illegal = illegal,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(reports)
    }
}
