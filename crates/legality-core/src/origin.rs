//! Candidate origins: the events under which a record may have entered the game.
//!
//! An upstream encounter resolver produces these; each variant carries only
//! the fields the rules read for it.

use smallvec::SmallVec;

use crate::ball::{Ball, BallSet};
use crate::record::Generation;
use crate::species::Species;

/// A fixed-ball encounter's legal ball(s).
///
/// Nearly every fixed encounter has exactly one ball; a handful allow a small
/// fixed choice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FixedBall {
    One(Ball),
    AnyOf(SmallVec<[Ball; 4]>),
}

impl FixedBall {
    /// Returns true if `ball` is one of the fixed choices.
    pub fn allows(&self, ball: Ball) -> bool {
        match self {
            FixedBall::One(fixed) => *fixed == ball,
            FixedBall::AnyOf(choices) => choices.contains(&ball),
        }
    }

    /// Returns the fixed choices as a set.
    pub fn to_set(&self) -> BallSet {
        match self {
            FixedBall::One(fixed) => BallSet::single(*fixed),
            FixedBall::AnyOf(choices) => choices.iter().copied().collect(),
        }
    }
}

impl From<Ball> for FixedBall {
    fn from(ball: Ball) -> Self {
        FixedBall::One(ball)
    }
}

/// Event distribution (mystery gift) with a recorded ball.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionGift {
    pub species: Species,
    pub generation: Generation,
    /// Ball stored in the gift data; some early gifts store none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ball: Option<Ball>,
}

/// Gift received by linking with another game or service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkGift {
    pub species: Species,
    pub ball: Ball,
}

/// In-game NPC trade.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeEncounter {
    pub species: Species,
    pub ball: Ball,
}

/// Fixed overworld encounter or gift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticEncounter {
    pub species: Species,
    pub generation: Generation,
    pub location: u16,
    /// Gifts arrive in a fixed ball; capturable statics do not.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gift: bool,
    pub ball: FixedBall,
}

/// Encounter slot kinds that influence the capture ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotType {
    #[default]
    Grass,
    Surf,
    OldRod,
    GoodRod,
    SuperRod,
    RockSmash,
    Headbutt,
    HoneyTree,
    Swarm,
    Horde,
    FriendSafari,
    Sos,
    BugContest,
    Safari,
    SafariSurf,
    SafariOldRod,
    SafariGoodRod,
    SafariSuperRod,
    SafariRockSmash,
}

impl SlotType {
    /// Returns true for slots inside a Safari Zone.
    pub fn is_safari(self) -> bool {
        matches!(
            self,
            SlotType::Safari
                | SlotType::SafariSurf
                | SlotType::SafariOldRod
                | SlotType::SafariGoodRod
                | SlotType::SafariSuperRod
                | SlotType::SafariRockSmash
        )
    }
}

/// Random wild encounter from an area's slot table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildSlotEncounter {
    pub species: Species,
    pub generation: Generation,
    pub location: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: SlotType,
}

/// Hatched from an egg; the ball is inherited, never fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EggEncounter {
    /// Species that hatched from the egg.
    pub species: Species,
}

/// Origin the resolver matched but could not classify further.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnclassifiedOrigin {
    pub species: Species,
}

/// A hypothesised legitimate origin for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CandidateOrigin {
    Distribution(DistributionGift),
    LinkGift(LinkGift),
    Trade(TradeEncounter),
    Static(StaticEncounter),
    WildSlot(WildSlotEncounter),
    Egg(EggEncounter),
    Unclassified(UnclassifiedOrigin),
}

impl CandidateOrigin {
    /// Species the origin produced.
    pub fn species(&self) -> Species {
        match self {
            CandidateOrigin::Distribution(g) => g.species,
            CandidateOrigin::LinkGift(l) => l.species,
            CandidateOrigin::Trade(t) => t.species,
            CandidateOrigin::Static(s) => s.species,
            CandidateOrigin::WildSlot(w) => w.species,
            CandidateOrigin::Egg(e) => e.species,
            CandidateOrigin::Unclassified(u) => u.species,
        }
    }

    /// Returns true if the origin is a hatched egg.
    pub fn is_egg(&self) -> bool {
        matches!(self, CandidateOrigin::Egg(_))
    }

    /// Short label for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CandidateOrigin::Distribution(_) => "distribution",
            CandidateOrigin::LinkGift(_) => "link_gift",
            CandidateOrigin::Trade(_) => "trade",
            CandidateOrigin::Static(_) => "static",
            CandidateOrigin::WildSlot(_) => "wild_slot",
            CandidateOrigin::Egg(_) => "egg",
            CandidateOrigin::Unclassified(_) => "unclassified",
        }
    }
}
