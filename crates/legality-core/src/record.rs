//! The creature record under verification.

use std::fmt;
use std::str::FromStr;

use crate::ball::Ball;
use crate::error::LegalityError;
use crate::species::{Form, Species, SpeciesForm};

/// Recorded gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gender {
    #[default]
    Male,
    Female,
    Genderless,
}

/// Which ability slot the record uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbilitySlot {
    #[default]
    First,
    Second,
    Hidden,
}

impl AbilitySlot {
    /// Decodes the stored ability number (1, 2 or 4).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(AbilitySlot::First),
            2 => Some(AbilitySlot::Second),
            4 => Some(AbilitySlot::Hidden),
            _ => None,
        }
    }

    /// Returns true for the hidden ability slot.
    #[inline]
    pub fn is_hidden(self) -> bool {
        self == AbilitySlot::Hidden
    }
}

/// Game generation number.
///
/// Generations 1 through 7 are understood by the rule catalog; anything else
/// is carried through so verifiers can report it instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Generation(u8);

impl Generation {
    pub const GEN1: Generation = Generation(1);
    pub const GEN2: Generation = Generation(2);
    pub const GEN3: Generation = Generation(3);
    pub const GEN4: Generation = Generation(4);
    pub const GEN5: Generation = Generation(5);
    pub const GEN6: Generation = Generation(6);
    pub const GEN7: Generation = Generation(7);

    /// Latest generation with catalog coverage.
    pub const LATEST: Generation = Generation::GEN7;

    /// Creates a generation from its number.
    #[inline]
    pub const fn of(number: u8) -> Self {
        Generation(number)
    }

    /// Returns the generation number.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true if the rule catalog covers this generation.
    pub const fn is_supported(self) -> bool {
        self.0 >= 1 && self.0 <= Self::LATEST.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gen {}", self.0)
    }
}

/// The game a record originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameVersion {
    Red,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,
    Colosseum,
    Diamond,
    Pearl,
    Platinum,
    HeartGold,
    SoulSilver,
    Black,
    White,
    Black2,
    White2,
    X,
    Y,
    OmegaRuby,
    AlphaSapphire,
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
}

impl GameVersion {
    const ALL: [(GameVersion, &'static str); 29] = [
        (GameVersion::Red, "red"),
        (GameVersion::Blue, "blue"),
        (GameVersion::Yellow, "yellow"),
        (GameVersion::Gold, "gold"),
        (GameVersion::Silver, "silver"),
        (GameVersion::Crystal, "crystal"),
        (GameVersion::Ruby, "ruby"),
        (GameVersion::Sapphire, "sapphire"),
        (GameVersion::Emerald, "emerald"),
        (GameVersion::FireRed, "fire_red"),
        (GameVersion::LeafGreen, "leaf_green"),
        (GameVersion::Colosseum, "colosseum"),
        (GameVersion::Diamond, "diamond"),
        (GameVersion::Pearl, "pearl"),
        (GameVersion::Platinum, "platinum"),
        (GameVersion::HeartGold, "heart_gold"),
        (GameVersion::SoulSilver, "soul_silver"),
        (GameVersion::Black, "black"),
        (GameVersion::White, "white"),
        (GameVersion::Black2, "black2"),
        (GameVersion::White2, "white2"),
        (GameVersion::X, "x"),
        (GameVersion::Y, "y"),
        (GameVersion::OmegaRuby, "omega_ruby"),
        (GameVersion::AlphaSapphire, "alpha_sapphire"),
        (GameVersion::Sun, "sun"),
        (GameVersion::Moon, "moon"),
        (GameVersion::UltraSun, "ultra_sun"),
        (GameVersion::UltraMoon, "ultra_moon"),
    ];

    /// Returns the generation the game belongs to.
    pub fn generation(self) -> Generation {
        use GameVersion::*;
        match self {
            Red | Blue | Yellow => Generation::GEN1,
            Gold | Silver | Crystal => Generation::GEN2,
            Ruby | Sapphire | Emerald | FireRed | LeafGreen | Colosseum => Generation::GEN3,
            Diamond | Pearl | Platinum | HeartGold | SoulSilver => Generation::GEN4,
            Black | White | Black2 | White2 => Generation::GEN5,
            X | Y | OmegaRuby | AlphaSapphire => Generation::GEN6,
            Sun | Moon | UltraSun | UltraMoon => Generation::GEN7,
        }
    }

    /// Returns true for the first pair of generation 7 games.
    ///
    /// Their catch-rate formula was revised in the Ultra pair, which changes
    /// which balls certain captures can be in.
    pub fn is_sun_moon(self) -> bool {
        matches!(self, GameVersion::Sun | GameVersion::Moon)
    }

    /// Returns the snake_case identifier used in data files.
    pub fn as_str(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(game, _)| *game == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVersion {
    type Err = LegalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .find(|(_, name)| *name == wanted)
            .map(|(game, _)| *game)
            .ok_or_else(|| LegalityError::UnknownGameVersion(s.to_string()))
    }
}

/// A persisted creature record, as loaded from save or gift data.
///
/// Verifiers borrow the record read-only; nothing in this workspace mutates
/// it once built.
///
/// # Example
///
/// ```
/// use legality_core::{AbilitySlot, Ball, CreatureRecord, GameVersion, Gender, Species};
///
/// let record = CreatureRecord::new(Species(133), Ball::DREAM, GameVersion::X)
///     .with_gender(Gender::Female)
///     .with_ability(AbilitySlot::Hidden);
///
/// assert_eq!(record.format, 6);
/// assert!(record.ability.is_hidden());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureRecord {
    pub species: Species,
    #[cfg_attr(feature = "serde", serde(default))]
    pub form: Form,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ability: AbilitySlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Gender,
    pub ball: Ball,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_shiny: bool,
    /// Generation of the storage format the record was read from.
    pub format: u8,
    pub origin_game: GameVersion,
}

impl CreatureRecord {
    /// Creates a record stored in its origin game's own format.
    pub fn new(species: Species, ball: Ball, origin_game: GameVersion) -> Self {
        Self {
            species,
            form: Form::default(),
            ability: AbilitySlot::default(),
            gender: Gender::default(),
            ball,
            is_shiny: false,
            format: origin_game.generation().get(),
            origin_game,
        }
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    pub fn with_ability(mut self, ability: AbilitySlot) -> Self {
        self.ability = ability;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_format(mut self, format: u8) -> Self {
        self.format = format;
        self
    }

    pub fn with_shiny(mut self, is_shiny: bool) -> Self {
        self.is_shiny = is_shiny;
        self
    }

    /// Returns the species/form key of this record.
    pub fn species_form(&self) -> SpeciesForm {
        SpeciesForm::new(self.species, self.form)
    }

    /// Generation the record originated in.
    pub fn origin_generation(&self) -> Generation {
        self.origin_game.generation()
    }
}
