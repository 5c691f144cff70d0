//! Candidate origin constructors.
//!
//! # Example
//!
//! ```
//! use legality_core::{Ball, Generation, Species};
//! use legality_test::origin::{egg, static_gift};
//!
//! assert!(egg(133).is_egg());
//! assert_eq!(static_gift(25, Generation::GEN7, Ball::POKE).species(), Species(25));
//! ```

use legality_core::{
    Ball, CandidateOrigin, DistributionGift, EggEncounter, FixedBall, Generation, LinkGift,
    SlotType, Species, StaticEncounter, TradeEncounter, UnclassifiedOrigin, WildSlotEncounter,
};

/// Location id with no special meaning to any rule.
pub const PLAIN_LOCATION: u16 = 1;

pub fn distribution(species: u16, generation: Generation, ball: Option<Ball>) -> CandidateOrigin {
    CandidateOrigin::Distribution(DistributionGift {
        species: Species(species),
        generation,
        ball,
    })
}

pub fn link_gift(species: u16, ball: Ball) -> CandidateOrigin {
    CandidateOrigin::LinkGift(LinkGift {
        species: Species(species),
        ball,
    })
}

pub fn trade(species: u16, ball: Ball) -> CandidateOrigin {
    CandidateOrigin::Trade(TradeEncounter {
        species: Species(species),
        ball,
    })
}

/// Gift static encounter handed over in a fixed ball.
pub fn static_gift(
    species: u16,
    generation: Generation,
    ball: impl Into<FixedBall>,
) -> CandidateOrigin {
    CandidateOrigin::Static(StaticEncounter {
        species: Species(species),
        generation,
        location: PLAIN_LOCATION,
        gift: true,
        ball: ball.into(),
    })
}

/// Capturable static encounter at `location`.
pub fn static_capture(species: u16, generation: Generation, location: u16) -> CandidateOrigin {
    CandidateOrigin::Static(StaticEncounter {
        species: Species(species),
        generation,
        location,
        gift: false,
        ball: FixedBall::One(Ball::POKE),
    })
}

/// Wild grass encounter at a location with no special rules.
pub fn wild(species: u16, generation: Generation) -> CandidateOrigin {
    wild_slot(species, generation, PLAIN_LOCATION, SlotType::Grass)
}

pub fn wild_slot(
    species: u16,
    generation: Generation,
    location: u16,
    slot: SlotType,
) -> CandidateOrigin {
    CandidateOrigin::WildSlot(WildSlotEncounter {
        species: Species(species),
        generation,
        location,
        slot,
    })
}

pub fn egg(species: u16) -> CandidateOrigin {
    CandidateOrigin::Egg(EggEncounter {
        species: Species(species),
    })
}

pub fn unclassified(species: u16) -> CandidateOrigin {
    CandidateOrigin::Unclassified(UnclassifiedOrigin {
        species: Species(species),
    })
}
