//! Ball inheritance for hatched eggs.
//!
//! From generation 6 a mother (and in generation 7 either parent) can pass
//! her ball to the egg, subject to species lists per ball band.

use legality_catalog::{BandBan, ContainerBand, Gen6EggRules, Gen7EggRules, TierRules};
use legality_core::{
    Ball, CreatureRecord, EggEncounter, EvolutionLineage, Gender, Generation, LineageResolver,
    ResultCode, Verdict,
};

use super::{invalid, matches_encounter, unverified, valid, BallVerifier};
use crate::api::AnalysisContext;

impl<L: LineageResolver> BallVerifier<'_, L> {
    pub(super) fn check_egg(&self, ctx: &AnalysisContext<'_>, egg: &EggEncounter) -> Verdict {
        let record = ctx.record;
        if ctx.generation < Generation::GEN6 {
            return matches_encounter(record.ball == Ball::POKE);
        }

        match record.ball {
            Ball::POKE => return valid(ResultCode::BallEncounterMatch),
            Ball::MASTER => return invalid(ResultCode::BallEggMaster),
            Ball::CHERISH => return invalid(ResultCode::BallEggCherish),
            _ => {}
        }

        let lineage = self.lineage.lineage(record);
        match ctx.generation {
            Generation::GEN6 => self.check_gen6(&self.catalog.gen6, record, egg, &lineage),
            Generation::GEN7 => self.check_gen7(&self.catalog.gen7, record, &lineage),
            _ => unverified(),
        }
    }

    fn check_gen6(
        &self,
        rules: &Gen6EggRules,
        record: &CreatureRecord,
        egg: &EggEncounter,
        lineage: &EvolutionLineage,
    ) -> Verdict {
        // Only a mother passes the ball on in this generation.
        if record.gender == Gender::Genderless || rules.breeds_male_only.contains(egg.species) {
            return matches_encounter(record.ball == Ball::POKE);
        }
        if record.ball >= rules.max_ball {
            return invalid(ResultCode::BallOutOfRange);
        }

        match ContainerBand::of(record.ball) {
            ContainerBand::Safari => check_tier(&rules.safari, record, lineage),
            ContainerBand::Apricorn => check_tier(&rules.apricorn, record, lineage),
            ContainerBand::Sport => check_tier(&rules.sport, record, lineage),
            ContainerBand::Dream => check_dream(&rules.dream, record, lineage),
            ContainerBand::QuickHealDusk => check_band_ban(&rules.quick_heal_dusk, record),
            ContainerBand::Gen3 => check_band_ban(&rules.gen3, record),
            ContainerBand::Base
            | ContainerBand::Master
            | ContainerBand::Cherish
            | ContainerBand::Beast
            | ContainerBand::Other => {
                if rules.late_species.contains(record.species) {
                    inherited_if(self.catalog.wild_balls(record).contains(record.ball))
                } else {
                    unverified()
                }
            }
        }
    }

    fn check_gen7(
        &self,
        rules: &Gen7EggRules,
        record: &CreatureRecord,
        lineage: &EvolutionLineage,
    ) -> Verdict {
        if rules.base_only.contains(record.species) {
            return matches_encounter(record.ball == Ball::POKE);
        }

        match ContainerBand::of(record.ball) {
            ContainerBand::Safari => return check_tier(&rules.safari, record, lineage),
            ContainerBand::Apricorn => return check_tier(&rules.apricorn, record, lineage),
            ContainerBand::Sport => return check_tier(&rules.sport, record, lineage),
            ContainerBand::Dream => return check_dream(&rules.dream, record, lineage),
            ContainerBand::QuickHealDusk => return check_band_ban(&rules.quick_heal_dusk, record),
            ContainerBand::Gen3 => return check_band_ban(&rules.gen3, record),
            ContainerBand::Beast => {
                let beast = &rules.beast;
                if record.ability.is_hidden()
                    && beast.hidden_banned.contains(lineage.current(), record.form)
                {
                    return invalid(ResultCode::BallHiddenAbilityConflict);
                }
                if beast.allows(record.species, lineage) {
                    return valid(ResultCode::BallInherited);
                }
            }
            ContainerBand::Base
            | ContainerBand::Master
            | ContainerBand::Cherish
            | ContainerBand::Other => {}
        }

        if record.species > rules.wild_fallback_above {
            return matches_encounter(self.catalog.wild_balls(record).contains(record.ball));
        }
        if record.ball >= rules.max_ball {
            return invalid(ResultCode::BallOutOfRange);
        }
        unverified()
    }
}

/// Inheritance first, then the hidden ability ban.
fn check_tier(tier: &TierRules, record: &CreatureRecord, lineage: &EvolutionLineage) -> Verdict {
    if !tier.inheritable_by(lineage) {
        return invalid(ResultCode::BallSpeciesNotInheritable);
    }
    if record.ability.is_hidden() && tier.hidden_ban.bans(record.species, record.form, lineage) {
        return invalid(ResultCode::BallHiddenAbilityConflict);
    }
    valid(ResultCode::BallInherited)
}

/// Hidden ability ban first, then inheritance.
fn check_dream(tier: &TierRules, record: &CreatureRecord, lineage: &EvolutionLineage) -> Verdict {
    if record.ability.is_hidden() && tier.hidden_ban.bans(record.species, record.form, lineage) {
        return invalid(ResultCode::BallHiddenAbilityConflict);
    }
    inherited_if(tier.inheritable_by(lineage))
}

fn check_band_ban(band: &BandBan, record: &CreatureRecord) -> Verdict {
    if band.banned.contains(record.species) {
        return invalid(ResultCode::BallSpeciesNotInheritable);
    }
    if record.ability.is_hidden() && band.hidden_banned.contains(record.species, record.form) {
        return invalid(ResultCode::BallHiddenAbilityConflict);
    }
    valid(ResultCode::BallInherited)
}

fn inherited_if(ok: bool) -> Verdict {
    if ok {
        valid(ResultCode::BallInherited)
    } else {
        invalid(ResultCode::BallSpeciesNotInheritable)
    }
}
