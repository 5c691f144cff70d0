//! The rule catalog.
//!
//! Every species list, location and threshold the ball rules consult lives
//! here as data. The catalog is parsed once, validated, and never mutated.

use std::path::Path;
use std::sync::OnceLock;

use legality_core::{
    Ball, BallSet, CreatureRecord, EvolutionLineage, Form, Generation, Species,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::evolution::PreEvolutionTable;
use crate::sets::{LateSpecies, SpeciesFormSet, SpeciesRange, SpeciesSet};
use crate::wild::WildBallTable;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

static BUILTIN: OnceLock<RuleCatalog> = OnceLock::new();

/// Complete rule catalog.
///
/// # Examples
///
/// ```
/// use legality_catalog::RuleCatalog;
/// use legality_core::{Ball, Species};
///
/// let catalog = RuleCatalog::builtin();
/// assert!(catalog.revision >= 1);
/// assert_eq!(catalog.gen6.max_ball, Ball(26));
/// assert!(catalog.gen6.breeds_male_only.contains(Species(128)));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleCatalog {
    /// Data revision; bump whenever a table changes.
    pub revision: u32,

    pub quirks: Quirks,

    /// Wild capture balls per origin game.
    pub wild: WildBallTable,

    /// Egg inheritance rules for generation 6 origins.
    pub gen6: Gen6EggRules,

    /// Egg inheritance rules for generation 7 origins.
    pub gen7: Gen7EggRules,

    #[serde(default)]
    pub evolution: PreEvolutionTable,
}

/// One-off special cases keyed by species or location.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Quirks {
    /// Distribution whose gift data never stored a ball.
    pub untracked_gift: SpeciesInGeneration,

    /// Species only obtainable by evolving a sibling after a given generation.
    pub evolution_only: EvolutionOnly,

    /// Species whose Sun/Moon captures could never be in a Heavy Ball.
    pub heavy_ball_banned: SpeciesSet,

    /// Dream World static encounter location and its balls.
    pub dream_world: LocationBalls,

    /// Hub location where every wild slot arrives in a Poke Ball.
    pub hub: LocationInGeneration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesInGeneration {
    pub species: Species,
    pub generation: Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvolutionOnly {
    pub species: Species,
    /// Rule applies to origins strictly after this generation.
    pub after_generation: Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationInGeneration {
    pub location: u16,
    pub generation: Generation,
}

impl LocationInGeneration {
    #[inline]
    pub fn matches(&self, location: u16, generation: Generation) -> bool {
        self.location == location && self.generation == generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationBalls {
    pub location: u16,
    pub generation: Generation,
    pub balls: BallSet,
}

impl LocationBalls {
    #[inline]
    pub fn matches(&self, location: u16, generation: Generation) -> bool {
        self.location == location && self.generation == generation
    }
}

/// When a hidden ability rules out an otherwise inheritable ball.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenAbilityBan {
    /// Hidden ability never conflicts.
    #[default]
    Never,
    /// Any hidden ability record is banned.
    Always,
    /// Banned if any lineage species is listed.
    Lineage(SpeciesSet),
    /// Banned if the record's own species is listed.
    Species(SpeciesSet),
    /// Banned if the lineage's base species with the record's form is listed.
    BaseForm(SpeciesFormSet),
}

impl HiddenAbilityBan {
    /// Returns true if a hidden-ability record with this lineage is banned.
    pub fn bans(&self, species: Species, form: Form, lineage: &EvolutionLineage) -> bool {
        match self {
            HiddenAbilityBan::Never => false,
            HiddenAbilityBan::Always => true,
            HiddenAbilityBan::Lineage(set) => set.intersects(lineage),
            HiddenAbilityBan::Species(set) => set.contains(species),
            HiddenAbilityBan::BaseForm(set) => set.contains(lineage.base(), form),
        }
    }
}

/// Inheritance rules for one ball band.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TierRules {
    /// Species that can pass the ball on through the mother.
    pub inheritable: SpeciesSet,

    /// Species that can pass the ball on through a male parent.
    #[serde(default)]
    pub male_inheritable: SpeciesSet,

    #[serde(default)]
    pub hidden_ban: HiddenAbilityBan,
}

impl TierRules {
    /// Returns true if any lineage species can pass the ball on.
    pub fn inheritable_by(&self, lineage: &EvolutionLineage) -> bool {
        self.inheritable.intersects(lineage) || self.male_inheritable.intersects(lineage)
    }
}

/// Species-keyed bans for a ball band.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BandBan {
    pub banned: SpeciesSet,

    /// Species/form pairs banned only with the hidden ability.
    #[serde(default)]
    pub hidden_banned: SpeciesFormSet,
}

/// Generation 6 egg inheritance rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Gen6EggRules {
    /// First ball id that did not exist yet.
    pub max_ball: Ball,
    /// Egg species whose lines only breed through a male parent.
    pub breeds_male_only: SpeciesSet,
    pub safari: TierRules,
    pub apricorn: TierRules,
    pub sport: TierRules,
    pub dream: TierRules,
    pub quick_heal_dusk: BandBan,
    pub gen3: BandBan,
    /// Species new enough that the wild ball table decides the rest.
    pub late_species: LateSpecies,
}

/// Beast Ball rules for generation 7 eggs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BeastRules {
    /// Current species/form pairs that never had the hidden ability in the wild.
    pub hidden_banned: SpeciesFormSet,
    /// Species introduced in generation 7 that can be caught in a Beast Ball.
    pub native_range: SpeciesRange,
    /// Older species found in the wild in generation 7.
    pub past_gen_natives: SpeciesSet,
    /// Natives that cannot actually be captured.
    pub past_gen_uncapturable: SpeciesSet,
    /// Older species obtainable by scanning codes.
    pub past_gen_scans: SpeciesSet,
}

impl BeastRules {
    /// Returns true if one of the allow conditions holds.
    pub fn allows(&self, species: Species, lineage: &EvolutionLineage) -> bool {
        self.native_range.contains(species)
            || lineage.any(|s| {
                self.past_gen_natives.contains(s) && !self.past_gen_uncapturable.contains(s)
            })
            || self.past_gen_scans.intersects(lineage)
    }
}

/// Generation 7 egg inheritance rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Gen7EggRules {
    pub max_ball: Ball,
    /// Species that only ever hatch in a Poke Ball.
    pub base_only: SpeciesRange,
    pub safari: TierRules,
    pub apricorn: TierRules,
    pub sport: TierRules,
    pub dream: TierRules,
    pub quick_heal_dusk: BandBan,
    pub gen3: BandBan,
    pub beast: BeastRules,
    /// Species above this number fall back to the wild ball table.
    pub wild_fallback_above: Species,
}

impl RuleCatalog {
    /// Returns the catalog embedded in the crate.
    ///
    /// Parsed on first use and shared for the life of the process.
    pub fn builtin() -> &'static RuleCatalog {
        BUILTIN.get_or_init(|| {
            let catalog = Self::from_toml_str(BUILTIN_CATALOG)
                .expect("embedded rule catalog must parse and validate");
            info!(event = "catalog_loaded", source = "builtin", revision = catalog.revision);
            catalog
        })
    }

    /// Loads a catalog file, choosing the parser by extension.
    ///
    /// `.yaml`/`.yml` files are read as YAML; anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        info!(
            event = "catalog_loaded",
            source = %path.display(),
            revision = catalog.revision,
        );
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses and validates a catalog from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog back to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Balls a wild capture of `record` could use in its origin game.
    pub fn wild_balls(&self, record: &CreatureRecord) -> BallSet {
        self.wild.balls_for_record(record)
    }

    /// Checks internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.revision == 0 {
            return Err(invalid("revision must be at least 1"));
        }

        for generation in 3..=Generation::LATEST.get() {
            if !self.wild.covers(Generation::of(generation)) {
                return Err(invalid(format!(
                    "wild ball table has no catch-all row for generation {}",
                    generation
                )));
            }
        }

        check_max_ball("gen6", self.gen6.max_ball)?;
        check_max_ball("gen7", self.gen7.max_ball)?;
        if self.gen7.max_ball <= self.gen6.max_ball {
            return Err(invalid("gen7.max_ball must exceed gen6.max_ball"));
        }

        let tiers = [
            ("gen6.safari", &self.gen6.safari),
            ("gen6.apricorn", &self.gen6.apricorn),
            ("gen6.sport", &self.gen6.sport),
            ("gen6.dream", &self.gen6.dream),
            ("gen7.safari", &self.gen7.safari),
            ("gen7.apricorn", &self.gen7.apricorn),
            ("gen7.sport", &self.gen7.sport),
            ("gen7.dream", &self.gen7.dream),
        ];
        for (name, tier) in tiers {
            if tier.inheritable.is_empty() {
                return Err(invalid(format!("{}.inheritable must not be empty", name)));
            }
        }

        for (name, range) in [
            ("gen7.base_only", self.gen7.base_only),
            ("gen7.beast.native_range", self.gen7.beast.native_range),
        ] {
            if range.first > range.last {
                return Err(invalid(format!("{} is reversed", name)));
            }
        }

        if self.quirks.dream_world.balls.is_empty() {
            return Err(invalid("quirks.dream_world.balls must not be empty"));
        }

        Ok(())
    }
}

fn check_max_ball(name: &str, max_ball: Ball) -> Result<()> {
    if max_ball.get() <= Ball::POKE.get() || max_ball.get() > BallSet::CAPACITY {
        return Err(invalid(format!(
            "{}.max_ball {} is outside {}..={}",
            name,
            max_ball.get(),
            Ball::POKE.get() + 1,
            BallSet::CAPACITY
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::Invalid(message.into())
}
