// Tests for ball legality.

mod fixed;

use legality_core::{Ball, CandidateOrigin, CreatureRecord, GameVersion, Species, Verdict};

use super::BallVerifier;
use crate::api::{AnalysisContext, Verifier};

fn record(species: u16, ball: Ball, game: GameVersion) -> CreatureRecord {
    CreatureRecord::new(Species(species), ball, game)
}

fn verify(record: &CreatureRecord, origin: &CandidateOrigin) -> Option<Verdict> {
    BallVerifier::builtin().verify(&AnalysisContext::for_record(record, origin))
}

fn check(record: &CreatureRecord, origin: &CandidateOrigin) -> Verdict {
    verify(record, origin).expect("ball verdict for a supported format")
}

/// Balls 0..=30 that pass for `origin`, the rest of the record unchanged.
fn passing_balls(record: &CreatureRecord, origin: &CandidateOrigin) -> Vec<u8> {
    (0..=30u8)
        .filter(|&id| {
            let mut candidate = record.clone();
            candidate.ball = Ball(id);
            check(&candidate, origin).is_valid()
        })
        .collect()
}
