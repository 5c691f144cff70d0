// Tests for tuple verifier sets.

use legality_core::{Ball, CheckCategory, CreatureRecord, GameVersion, ResultCode, Species, Verdict};
use legality_test::origin::wild;

use super::{Verifier, VerifierSet};
use crate::api::context::AnalysisContext;

struct Fixed {
    name: &'static str,
    category: CheckCategory,
    verdict: Option<Verdict>,
}

impl Verifier for Fixed {
    fn category(&self) -> CheckCategory {
        self.category
    }

    fn name(&self) -> &str {
        self.name
    }

    fn verify(&self, _ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        self.verdict
    }
}

fn valid(name: &'static str, category: CheckCategory) -> Fixed {
    Fixed {
        name,
        category,
        verdict: Some(Verdict::valid(category, ResultCode::BallEncounterMatch)),
    }
}

fn silent(name: &'static str) -> Fixed {
    Fixed {
        name,
        category: CheckCategory::Moves,
        verdict: None,
    }
}

fn record() -> CreatureRecord {
    CreatureRecord::new(Species(25), Ball::POKE, GameVersion::Platinum)
}

#[test]
fn test_empty_set() {
    let record = record();
    let origin = wild(25, record.origin_generation());
    let ctx = AnalysisContext::for_record(&record, &origin);

    assert_eq!(().verifier_count(), 0);
    assert!(().verify_all(&ctx).is_empty());
}

#[test]
fn test_verdicts_follow_tuple_order() {
    let record = record();
    let origin = wild(25, record.origin_generation());
    let ctx = AnalysisContext::for_record(&record, &origin);

    let set = (
        valid("ball", CheckCategory::Ball),
        valid("encounter", CheckCategory::Encounter),
        valid("gender", CheckCategory::Gender),
    );

    let categories: Vec<_> = set.verify_all(&ctx).iter().map(|v| v.category).collect();
    assert_eq!(
        categories,
        vec![CheckCategory::Ball, CheckCategory::Encounter, CheckCategory::Gender]
    );
    assert_eq!(set.names(), vec!["ball", "encounter", "gender"]);
}

#[test]
fn test_not_applicable_verifiers_emit_nothing() {
    let record = record();
    let origin = wild(25, record.origin_generation());
    let ctx = AnalysisContext::for_record(&record, &origin);

    let set = (silent("moves"), valid("ball", CheckCategory::Ball));
    assert_eq!(set.verifier_count(), 2);
    assert_eq!(set.verify_all(&ctx).len(), 1);
}

#[test]
fn test_references_are_verifiers() {
    let record = record();
    let origin = wild(25, record.origin_generation());
    let ctx = AnalysisContext::for_record(&record, &origin);

    let ball = valid("ball", CheckCategory::Ball);
    let set = (&ball, &ball);
    assert_eq!(set.verify_all(&ctx).len(), 2);
}
