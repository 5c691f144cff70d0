//! Named ball bands.
//!
//! Inheritance rules are written against bands of ball ids rather than
//! individual values. Classification is exhaustive so rule code can match on
//! it.

use std::ops::RangeInclusive;

use legality_core::Ball;

/// Balls introduced in generation 3, excluding the Poke and Safari balls.
pub const GEN3: RangeInclusive<u8> = 2..=12;

/// Dusk, Heal and Quick balls.
pub const QUICK_HEAL_DUSK: RangeInclusive<u8> = 13..=15;

/// Apricorn balls: Fast, Level, Lure, Heavy, Love, Friend, Moon.
pub const APRICORN: RangeInclusive<u8> = 17..=23;

/// Band a ball id falls in.
///
/// # Example
///
/// ```
/// use legality_catalog::ContainerBand;
/// use legality_core::Ball;
///
/// assert_eq!(ContainerBand::of(Ball::HEAVY), ContainerBand::Apricorn);
/// assert_eq!(ContainerBand::of(Ball::NET), ContainerBand::Gen3);
/// assert_eq!(ContainerBand::of(Ball::SAFARI), ContainerBand::Safari);
/// assert_eq!(ContainerBand::of(Ball(40)), ContainerBand::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerBand {
    /// The Poke Ball, legal for almost anything.
    Base,
    Master,
    Safari,
    Cherish,
    Apricorn,
    Sport,
    Dream,
    QuickHealDusk,
    Gen3,
    Beast,
    /// No ball, or an id no band claims.
    Other,
}

impl ContainerBand {
    /// Classifies a ball id.
    pub fn of(ball: Ball) -> Self {
        match ball {
            Ball::POKE => ContainerBand::Base,
            Ball::MASTER => ContainerBand::Master,
            Ball::SAFARI => ContainerBand::Safari,
            Ball::CHERISH => ContainerBand::Cherish,
            Ball::SPORT => ContainerBand::Sport,
            Ball::DREAM => ContainerBand::Dream,
            Ball::BEAST => ContainerBand::Beast,
            Ball(id) if APRICORN.contains(&id) => ContainerBand::Apricorn,
            Ball(id) if QUICK_HEAL_DUSK.contains(&id) => ContainerBand::QuickHealDusk,
            Ball(id) if GEN3.contains(&id) => ContainerBand::Gen3,
            _ => ContainerBand::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_ball_has_one_band() {
        let expected = [
            (0, ContainerBand::Other),
            (1, ContainerBand::Master),
            (2, ContainerBand::Gen3),
            (3, ContainerBand::Gen3),
            (4, ContainerBand::Base),
            (5, ContainerBand::Safari),
            (12, ContainerBand::Gen3),
            (13, ContainerBand::QuickHealDusk),
            (15, ContainerBand::QuickHealDusk),
            (16, ContainerBand::Cherish),
            (17, ContainerBand::Apricorn),
            (23, ContainerBand::Apricorn),
            (24, ContainerBand::Sport),
            (25, ContainerBand::Dream),
            (26, ContainerBand::Beast),
            (27, ContainerBand::Other),
            (255, ContainerBand::Other),
        ];
        for (id, band) in expected {
            assert_eq!(ContainerBand::of(Ball(id)), band, "ball {}", id);
        }
    }
}
