//! Batch input files.
//!
//! A batch is a TOML document with one `[[entry]]` table per record:
//!
//! ```toml
//! [[entry]]
//! name = "eevee"
//! generation = 6
//! record = { species = 133, ball = 25, format = 6, origin_game = "x", gender = "female" }
//! origin = { kind = "egg", species = 133 }
//! ```
//!
//! `generation` defaults to the generation of the record's origin game.

use std::path::Path;

use legality::{AnalysisContext, CandidateOrigin, CreatureRecord, Generation};
use serde::Deserialize;

use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// One record and the origin it is checked against.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub generation: Option<Generation>,
    pub record: CreatureRecord,
    pub origin: CandidateOrigin,
}

impl Entry {
    pub fn generation(&self) -> Generation {
        self.generation
            .unwrap_or_else(|| self.record.origin_generation())
    }

    pub fn context(&self) -> AnalysisContext<'_> {
        AnalysisContext::new(&self.record, &self.origin, self.generation())
    }
}

pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entries(&contents)
}

pub fn parse_entries(s: &str) -> Result<Vec<Entry>> {
    let batch: BatchFile = toml::from_str(s)?;
    Ok(batch.entries)
}
