//! Capture ball identifiers and compact ball sets.

use std::fmt;

use crate::error::LegalityError;

/// The ball a creature was captured in, as stored on the record.
///
/// Values follow the in-game item ordering used from generation 3 onward.
/// Ball 0 means no ball was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ball(pub u8);

impl Ball {
    pub const NONE: Ball = Ball(0);
    pub const MASTER: Ball = Ball(1);
    pub const ULTRA: Ball = Ball(2);
    pub const GREAT: Ball = Ball(3);
    pub const POKE: Ball = Ball(4);
    pub const SAFARI: Ball = Ball(5);
    pub const NET: Ball = Ball(6);
    pub const DIVE: Ball = Ball(7);
    pub const NEST: Ball = Ball(8);
    pub const REPEAT: Ball = Ball(9);
    pub const TIMER: Ball = Ball(10);
    pub const LUXURY: Ball = Ball(11);
    pub const PREMIER: Ball = Ball(12);
    pub const DUSK: Ball = Ball(13);
    pub const HEAL: Ball = Ball(14);
    pub const QUICK: Ball = Ball(15);
    pub const CHERISH: Ball = Ball(16);
    pub const FAST: Ball = Ball(17);
    pub const LEVEL: Ball = Ball(18);
    pub const LURE: Ball = Ball(19);
    pub const HEAVY: Ball = Ball(20);
    pub const LOVE: Ball = Ball(21);
    pub const FRIEND: Ball = Ball(22);
    pub const MOON: Ball = Ball(23);
    pub const SPORT: Ball = Ball(24);
    pub const DREAM: Ball = Ball(25);
    pub const BEAST: Ball = Ball(26);

    const NAMES: [&'static str; 27] = [
        "None", "Master", "Ultra", "Great", "Poke", "Safari", "Net", "Dive", "Nest", "Repeat",
        "Timer", "Luxury", "Premier", "Dusk", "Heal", "Quick", "Cherish", "Fast", "Level", "Lure",
        "Heavy", "Love", "Friend", "Moon", "Sport", "Dream", "Beast",
    ];

    /// Returns the raw item value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the English ball name, if the value is a known ball.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(self.0 as usize).copied()
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} Ball", name),
            None => write!(f, "Ball({})", self.0),
        }
    }
}

impl From<u8> for Ball {
    fn from(value: u8) -> Self {
        Ball(value)
    }
}

/// A set of balls stored as a bitmask.
///
/// Ball ids at or above [`BallSet::CAPACITY`] can never be members; a hacked
/// record carrying such a value simply fails every membership test.
///
/// # Example
///
/// ```
/// use legality_core::{Ball, BallSet};
///
/// let set = BallSet::from_balls([Ball::POKE, Ball::DREAM]);
/// assert!(set.contains(Ball::DREAM));
/// assert!(!set.contains(Ball::MASTER));
/// assert!(!set.contains(Ball(200)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BallSet {
    mask: u64,
}

impl BallSet {
    /// Number of distinct ball ids a set can hold.
    pub const CAPACITY: u8 = 64;

    /// The empty set.
    pub const EMPTY: BallSet = BallSet { mask: 0 };

    /// Creates a set holding a single ball.
    pub const fn single(ball: Ball) -> Self {
        if ball.0 < Self::CAPACITY {
            BallSet { mask: 1u64 << ball.0 }
        } else {
            Self::EMPTY
        }
    }

    /// Creates a set from balls known to be in range.
    ///
    /// Out-of-range balls are ignored; use [`BallSet::try_from_balls`] when
    /// the input comes from external data.
    pub fn from_balls<I: IntoIterator<Item = Ball>>(balls: I) -> Self {
        balls
            .into_iter()
            .fold(Self::EMPTY, |set, ball| set.with(ball))
    }

    /// Creates a set, rejecting balls the set cannot represent.
    pub fn try_from_balls<I: IntoIterator<Item = Ball>>(balls: I) -> Result<Self, LegalityError> {
        balls.into_iter().try_fold(Self::EMPTY, |set, ball| {
            if ball.0 < Self::CAPACITY {
                Ok(set.with(ball))
            } else {
                Err(LegalityError::BallOutOfRange(ball.0))
            }
        })
    }

    /// Returns a copy of this set with `ball` added.
    pub const fn with(self, ball: Ball) -> Self {
        BallSet {
            mask: self.mask | Self::single(ball).mask,
        }
    }

    /// Returns the union of two sets.
    pub const fn union(self, other: BallSet) -> Self {
        BallSet {
            mask: self.mask | other.mask,
        }
    }

    /// Returns true if `ball` is a member.
    #[inline]
    pub const fn contains(self, ball: Ball) -> bool {
        ball.0 < Self::CAPACITY && self.mask & (1u64 << ball.0) != 0
    }

    /// Returns the number of members.
    pub const fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true if the set has no members.
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Iterates members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Ball> {
        (0..Self::CAPACITY)
            .map(Ball)
            .filter(move |ball| self.contains(*ball))
    }
}

impl fmt::Debug for BallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|b| b.0)).finish()
    }
}

impl FromIterator<Ball> for BallSet {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        Self::from_balls(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BallSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|b| b.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BallSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let balls = <Vec<Ball> as serde::Deserialize>::deserialize(deserializer)?;
        BallSet::try_from_balls(balls).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_names() {
        assert_eq!(Ball::POKE.to_string(), "Poke Ball");
        assert_eq!(Ball::BEAST.name(), Some("Beast"));
        assert_eq!(Ball(99).to_string(), "Ball(99)");
    }

    #[test]
    fn test_ball_set_rejects_out_of_range() {
        assert_eq!(
            BallSet::try_from_balls([Ball::POKE, Ball(64)]),
            Err(LegalityError::BallOutOfRange(64))
        );
        assert!(BallSet::try_from_balls([Ball(63)]).is_ok());
    }

    #[test]
    fn test_ball_set_iter_sorted() {
        let set = BallSet::from_balls([Ball::SPORT, Ball::POKE, Ball::MASTER]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![Ball::MASTER, Ball::POKE, Ball::SPORT]);
    }

    #[test]
    fn test_ball_set_union() {
        let a = BallSet::single(Ball::POKE);
        let b = BallSet::single(Ball::DREAM);
        let both = a.union(b);
        assert!(both.contains(Ball::POKE) && both.contains(Ball::DREAM));
        assert_eq!(both.len(), 2);
        assert!(BallSet::EMPTY.is_empty());
    }
}
