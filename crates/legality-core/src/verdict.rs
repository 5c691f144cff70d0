//! Verdicts produced by verifiers.
//!
//! A verdict is tri-state: `Unchecked` is kept apart from `Invalid` so that
//! data the rules do not cover is flagged rather than failed.

use std::fmt;

use crate::error::LegalityError;

/// Outcome of a single verifier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The attribute is consistent with the candidate origin.
    Valid,
    /// The attribute cannot come from the candidate origin.
    Invalid,
    /// The rules do not decide this combination.
    Unchecked,
}

/// Facet of a record a verifier judges.
///
/// Reports are keyed by category; each registered verifier owns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckCategory {
    Encounter,
    Ball,
    Ability,
    Gender,
    Form,
    Shiny,
    Moves,
}

impl CheckCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckCategory::Encounter => "encounter",
            CheckCategory::Ball => "ball",
            CheckCategory::Ability => "ability",
            CheckCategory::Gender => "gender",
            CheckCategory::Form => "form",
            CheckCategory::Shiny => "shiny",
            CheckCategory::Moves => "moves",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable result code attached to every verdict.
///
/// The numeric values are part of the public contract; downstream tooling
/// keys translations and filters off them. Never renumber a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u16)]
pub enum ResultCode {
    BallHeavyUnobtainable = 116,
    BallEggMaster = 117,
    BallEncounterMismatch = 118,
    BallEncounterMatch = 119,
    BallEggCherish = 120,
    BallSpeciesNotInheritable = 121,
    BallHiddenAbilityConflict = 122,
    BallInherited = 123,
    BallUnverified = 125,
    BallOutOfRange = 126,
}

impl ResultCode {
    const ALL: [ResultCode; 10] = [
        ResultCode::BallHeavyUnobtainable,
        ResultCode::BallEggMaster,
        ResultCode::BallEncounterMismatch,
        ResultCode::BallEncounterMatch,
        ResultCode::BallEggCherish,
        ResultCode::BallSpeciesNotInheritable,
        ResultCode::BallHiddenAbilityConflict,
        ResultCode::BallInherited,
        ResultCode::BallUnverified,
        ResultCode::BallOutOfRange,
    ];

    /// Returns the stable numeric code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Looks up a code by its numeric value.
    pub fn from_code(code: u16) -> Result<Self, LegalityError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or(LegalityError::UnknownResultCode(code))
    }

    /// Default English description; presentation layers may substitute their own.
    pub fn message(self) -> &'static str {
        match self {
            ResultCode::BallHeavyUnobtainable => {
                "Heavy Ball capture is not possible for this species in this game."
            }
            ResultCode::BallEggMaster => "Master Ball cannot be passed down through breeding.",
            ResultCode::BallEncounterMismatch => "Ball is not possible for the encounter.",
            ResultCode::BallEncounterMatch => "Ball matches the encounter.",
            ResultCode::BallEggCherish => "Cherish Ball cannot be passed down through breeding.",
            ResultCode::BallSpeciesNotInheritable => "Ball cannot be inherited by this species.",
            ResultCode::BallHiddenAbilityConflict => {
                "Ball cannot be inherited together with the hidden ability."
            }
            ResultCode::BallInherited => "Ball is inheritable by this species.",
            ResultCode::BallUnverified => "Ball could not be verified for this combination.",
            ResultCode::BallOutOfRange => "Ball is not available in the origin generation.",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:03}", self.code())
    }
}

/// Result of one verifier invocation.
///
/// # Example
///
/// ```
/// use legality_core::{CheckCategory, Outcome, ResultCode, Verdict};
///
/// let verdict = Verdict::invalid(CheckCategory::Ball, ResultCode::BallEggMaster);
/// assert_eq!(verdict.outcome, Outcome::Invalid);
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.code.code(), 117);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub outcome: Outcome,
    pub category: CheckCategory,
    pub code: ResultCode,
}

impl Verdict {
    pub const fn new(outcome: Outcome, category: CheckCategory, code: ResultCode) -> Self {
        Self {
            outcome,
            category,
            code,
        }
    }

    pub const fn valid(category: CheckCategory, code: ResultCode) -> Self {
        Self::new(Outcome::Valid, category, code)
    }

    pub const fn invalid(category: CheckCategory, code: ResultCode) -> Self {
        Self::new(Outcome::Invalid, category, code)
    }

    pub const fn unchecked(category: CheckCategory, code: ResultCode) -> Self {
        Self::new(Outcome::Unchecked, category, code)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.outcome == Outcome::Invalid
    }

    #[inline]
    pub fn is_unchecked(&self) -> bool {
        self.outcome == Outcome::Unchecked
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Valid => "valid",
            Outcome::Invalid => "invalid",
            Outcome::Unchecked => "unchecked",
        };
        write!(
            f,
            "[{}] {} {}: {}",
            self.category,
            outcome,
            self.code,
            self.code.message()
        )
    }
}
