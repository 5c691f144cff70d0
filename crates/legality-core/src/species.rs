//! Species and form identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::LegalityError;

/// National dex species number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Species(pub u16);

impl Species {
    /// Returns the raw dex number.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

impl From<u16> for Species {
    fn from(value: u16) -> Self {
        Species(value)
    }
}

/// Alternate form index (0 is the default form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Form(pub u8);

impl Form {
    /// Returns the raw form index.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A species paired with one of its forms.
///
/// Some catalog rules only apply to a cosmetic form of a species, e.g. one
/// flower colour out of five.
///
/// # Example
///
/// ```
/// use legality_core::{Form, Species, SpeciesForm};
///
/// let key = SpeciesForm::new(Species(669), Form(3));
/// assert_eq!(key.to_string(), "669-3");
/// assert_eq!("669-3".parse::<SpeciesForm>().unwrap(), key);
/// assert_eq!("25".parse::<SpeciesForm>().unwrap(), SpeciesForm::base(Species(25)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesForm {
    pub species: Species,
    pub form: Form,
}

impl SpeciesForm {
    /// Creates a species/form key.
    pub const fn new(species: Species, form: Form) -> Self {
        Self { species, form }
    }

    /// Creates a key for the default form.
    pub const fn base(species: Species) -> Self {
        Self::new(species, Form(0))
    }
}

impl fmt::Display for SpeciesForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.species.0, self.form.0)
    }
}

impl FromStr for SpeciesForm {
    type Err = LegalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LegalityError::MalformedIdentifier(s.to_string());
        let (species, form) = match s.split_once('-') {
            Some((species, form)) => (species, form),
            None => (s, "0"),
        };
        let species = species.trim().parse::<u16>().map_err(|_| malformed())?;
        let form = form.trim().parse::<u8>().map_err(|_| malformed())?;
        Ok(Self::new(Species(species), Form(form)))
    }
}
