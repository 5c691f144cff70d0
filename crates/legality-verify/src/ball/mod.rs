//! Ball (capture container) legality.
//!
//! Decides whether the ball recorded on a creature is consistent with the
//! candidate origin the encounter resolver matched. Rules are ordered guard
//! clauses; the first that applies decides the verdict. Every species list
//! and location they consult comes from the [`RuleCatalog`].

mod egg;

#[cfg(test)]
mod tests;

use legality_catalog::{PreEvolutionTable, RuleCatalog};
use legality_core::{
    Ball, BallSet, CandidateOrigin, CheckCategory, Generation, LineageResolver, ResultCode,
    SlotType, Verdict,
};
use tracing::trace;

use crate::api::{AnalysisContext, Verifier};

const CATEGORY: CheckCategory = CheckCategory::Ball;

/// Verifies the ball a record was caught in, hatched in or received in.
///
/// The lineage resolver is only consulted for eggs, once per call.
///
/// # Examples
///
/// ```
/// use legality_core::{Ball, CreatureRecord, GameVersion, Generation, ResultCode, Species};
/// use legality_core::{CandidateOrigin, SlotType, WildSlotEncounter};
/// use legality_verify::{AnalysisContext, BallVerifier, Verifier};
///
/// let verifier = BallVerifier::builtin();
/// let origin = CandidateOrigin::WildSlot(WildSlotEncounter {
///     species: Species(123),
///     generation: Generation::GEN4,
///     location: 1,
///     slot: SlotType::BugContest,
/// });
///
/// let record = CreatureRecord::new(Species(123), Ball::SPORT, GameVersion::HeartGold);
/// let verdict = verifier.verify(&AnalysisContext::for_record(&record, &origin)).unwrap();
/// assert!(verdict.is_valid());
///
/// let record = CreatureRecord::new(Species(123), Ball::POKE, GameVersion::HeartGold);
/// let verdict = verifier.verify(&AnalysisContext::for_record(&record, &origin)).unwrap();
/// assert_eq!(verdict.code, ResultCode::BallEncounterMismatch);
/// ```
#[derive(Debug, Clone)]
pub struct BallVerifier<'c, L = &'c PreEvolutionTable> {
    catalog: &'c RuleCatalog,
    lineage: L,
}

impl BallVerifier<'static> {
    /// Verifier over the embedded catalog and its pre-evolution table.
    pub fn builtin() -> Self {
        Self::with_catalog(RuleCatalog::builtin())
    }
}

impl<'c> BallVerifier<'c> {
    /// Verifier over `catalog`, resolving lineages with its pre-evolution table.
    pub fn with_catalog(catalog: &'c RuleCatalog) -> Self {
        Self::new(catalog, &catalog.evolution)
    }
}

impl<'c, L: LineageResolver> BallVerifier<'c, L> {
    /// Verifier over `catalog` with an external lineage resolver.
    pub fn new(catalog: &'c RuleCatalog, lineage: L) -> Self {
        Self { catalog, lineage }
    }

    pub fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Verdict {
        if let Some(verdict) = self.check_fixed(ctx) {
            return verdict;
        }
        if let Some(verdict) = self.check_quirks(ctx) {
            return verdict;
        }

        let record = ctx.record;
        match ctx.origin {
            CandidateOrigin::Static(encounter) => {
                let dream_world = &self.catalog.quirks.dream_world;
                let legal = if dream_world.matches(encounter.location, encounter.generation) {
                    dream_world.balls
                } else {
                    self.catalog.wild_balls(record)
                };
                in_set(record.ball, legal)
            }
            CandidateOrigin::WildSlot(encounter) => {
                let generation = ctx.generation;
                if self.catalog.quirks.hub.matches(encounter.location, encounter.generation) {
                    matches_encounter(record.ball == Ball::POKE)
                } else if (Generation::GEN3..=Generation::GEN4).contains(&generation)
                    && encounter.slot.is_safari()
                {
                    matches_encounter(record.ball == Ball::SAFARI)
                } else if generation == Generation::GEN4 && encounter.slot == SlotType::BugContest {
                    matches_encounter(record.ball == Ball::SPORT)
                } else {
                    in_set(record.ball, self.catalog.wild_balls(record))
                }
            }
            CandidateOrigin::Egg(egg) => self.check_egg(ctx, egg),
            CandidateOrigin::Distribution(_)
            | CandidateOrigin::LinkGift(_)
            | CandidateOrigin::Trade(_)
            | CandidateOrigin::Unclassified(_) => matches_encounter(record.ball == Ball::POKE),
        }
    }

    /// Origins that hand the record over in a known ball.
    fn check_fixed(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let ball = ctx.record.ball;
        let verdict = match ctx.origin {
            CandidateOrigin::Distribution(gift) => {
                let untracked = self.catalog.quirks.untracked_gift;
                let recorded = gift.ball.unwrap_or(Ball::NONE);
                if gift.generation == untracked.generation
                    && gift.species == untracked.species
                    && recorded == Ball::NONE
                {
                    matches_encounter(ball == Ball::POKE)
                } else {
                    matches_encounter(ball == recorded)
                }
            }
            CandidateOrigin::LinkGift(gift) => matches_encounter(ball == gift.ball),
            CandidateOrigin::Trade(trade) => matches_encounter(ball == trade.ball),
            CandidateOrigin::Static(encounter) if encounter.gift => {
                matches_encounter(encounter.ball.allows(ball))
            }
            _ => return None,
        };
        Some(verdict)
    }

    /// Species-keyed special cases that override the origin's own rules.
    fn check_quirks(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let record = ctx.record;
        let quirks = &self.catalog.quirks;

        let evolution_only = quirks.evolution_only;
        if record.species == evolution_only.species
            && ctx.generation > evolution_only.after_generation
        {
            return Some(matches_encounter(record.ball == Ball::POKE));
        }

        if record.ball == Ball::HEAVY
            && record.origin_game.is_sun_moon()
            && !ctx.origin.is_egg()
            && quirks.heavy_ball_banned.contains(ctx.origin.species())
        {
            return Some(invalid(ResultCode::BallHeavyUnobtainable));
        }

        None
    }
}

impl<L: LineageResolver> Verifier for BallVerifier<'_, L> {
    fn category(&self) -> CheckCategory {
        CATEGORY
    }

    fn name(&self) -> &str {
        "ball"
    }

    fn verify(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        // Balls were not stored before generation 3.
        if ctx.record.format <= 2 || ctx.generation <= Generation::GEN2 {
            trace!(
                event = "ball_not_applicable",
                format = ctx.record.format,
                generation = ctx.generation.get(),
            );
            return None;
        }
        if !ctx.generation.is_supported() {
            return Some(unverified());
        }
        Some(self.check(ctx))
    }
}

#[inline]
fn valid(code: ResultCode) -> Verdict {
    Verdict::valid(CATEGORY, code)
}

#[inline]
fn invalid(code: ResultCode) -> Verdict {
    Verdict::invalid(CATEGORY, code)
}

#[inline]
fn unverified() -> Verdict {
    Verdict::unchecked(CATEGORY, ResultCode::BallUnverified)
}

fn matches_encounter(ok: bool) -> Verdict {
    if ok {
        valid(ResultCode::BallEncounterMatch)
    } else {
        invalid(ResultCode::BallEncounterMismatch)
    }
}

fn in_set(ball: Ball, legal: BallSet) -> Verdict {
    matches_encounter(legal.contains(ball))
}
