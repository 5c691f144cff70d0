//! Tests for the verifier pipeline.

use legality_catalog::{AnalysisConfig, BatchThreadCount, UncheckedPolicy};
use legality_core::{
    Ball, CandidateOrigin, CheckCategory, CreatureRecord, GameVersion, Generation, ResultCode,
    Species, Verdict,
};
use legality_test::origin::{egg, trade, wild};

use super::Pipeline;
use crate::api::{AnalysisContext, Verifier};
use crate::ball::BallVerifier;

/// Flags every shiny record.
struct ShinyLock;

impl Verifier for ShinyLock {
    fn category(&self) -> CheckCategory {
        CheckCategory::Shiny
    }

    fn name(&self) -> &str {
        "shiny_lock"
    }

    fn verify(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        Some(if ctx.record.is_shiny {
            Verdict::invalid(CheckCategory::Shiny, ResultCode::BallEncounterMismatch)
        } else {
            Verdict::valid(CheckCategory::Shiny, ResultCode::BallEncounterMatch)
        })
    }
}

fn records() -> Vec<(CreatureRecord, CandidateOrigin)> {
    vec![
        (
            CreatureRecord::new(Species(25), Ball::FRIEND, GameVersion::X),
            egg(172),
        ),
        (
            CreatureRecord::new(Species(25), Ball::MASTER, GameVersion::X),
            egg(172),
        ),
        (
            CreatureRecord::new(Species(83), Ball::POKE, GameVersion::X).with_shiny(true),
            trade(83, Ball::POKE),
        ),
        (
            CreatureRecord::new(Species(600), Ball::NONE, GameVersion::X),
            egg(599),
        ),
        (
            CreatureRecord::new(Species(25), Ball::POKE, GameVersion::Crystal),
            wild(25, Generation::GEN2),
        ),
    ]
}

fn contexts(records: &[(CreatureRecord, CandidateOrigin)]) -> Vec<AnalysisContext<'_>> {
    records
        .iter()
        .map(|(record, origin)| AnalysisContext::for_record(record, origin))
        .collect()
}

fn legality(reports: &[crate::LegalityReport]) -> Vec<bool> {
    reports.iter().map(|r| r.is_legal()).collect()
}

#[test]
fn test_each_verifier_reports_independently() {
    let pipeline = Pipeline::new((BallVerifier::builtin(), ShinyLock));
    let records = records();
    let ctx = AnalysisContext::for_record(&records[2].0, &records[2].1);

    let report = pipeline.analyze(&ctx);
    assert_eq!(report.len(), 2);
    assert!(report.get(CheckCategory::Ball).unwrap().is_valid());
    assert!(report.get(CheckCategory::Shiny).unwrap().is_invalid());
    assert!(!report.is_legal());
}

#[test]
fn test_not_applicable_verifier_is_omitted() {
    let pipeline = Pipeline::new((BallVerifier::builtin(), ShinyLock));
    let records = records();
    let ctx = AnalysisContext::for_record(&records[4].0, &records[4].1);

    let report = pipeline.analyze(&ctx);
    assert!(report.get(CheckCategory::Ball).is_none());
    assert_eq!(report.len(), 1);
}

#[test]
fn test_batch_preserves_order() {
    let records = records();
    let contexts = contexts(&records);
    let expected = vec![true, false, true, true, true];

    for threads in [
        BatchThreadCount::None,
        BatchThreadCount::Auto,
        BatchThreadCount::Count(2),
    ] {
        let pipeline = Pipeline::new((BallVerifier::builtin(),)).with_batch_threads(threads);
        let reports = pipeline.analyze_batch(&contexts).unwrap();
        assert_eq!(legality(&reports), expected, "{:?}", threads);
    }
}

#[test]
fn test_unchecked_policy_from_config() {
    let records = records();
    let contexts = contexts(&records);
    let config = AnalysisConfig::new()
        .with_unchecked(UncheckedPolicy::Fail)
        .with_batch_threads(BatchThreadCount::None);

    let pipeline = Pipeline::with_config((BallVerifier::builtin(),), &config);
    let reports = pipeline.analyze_batch(&contexts).unwrap();

    assert_eq!(legality(&reports), vec![true, false, true, false, true]);
    assert_eq!(reports[3].unchecked().count(), 1);
}

#[test]
fn test_empty_batch() {
    let pipeline = Pipeline::new(());
    assert!(pipeline.analyze_batch(&[]).unwrap().is_empty());
}

#[test]
fn test_pipeline_over_custom_catalog() {
    let catalog = legality_catalog::RuleCatalog::builtin().clone();
    let verifier = BallVerifier::with_catalog(&catalog);
    let pipeline = Pipeline::new((&verifier,)).with_unchecked_policy(UncheckedPolicy::Fail);

    let record = CreatureRecord::new(Species(25), Ball::FRIEND, GameVersion::X);
    let origin = egg(172);
    assert!(pipeline
        .analyze(&AnalysisContext::for_record(&record, &origin))
        .is_legal());
    assert_eq!(pipeline.verifiers().0.catalog().revision, catalog.revision);
}
