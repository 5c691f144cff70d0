//! Analysis configuration.
//!
//! Controls which rule catalog is used, how unresolved checks are treated
//! and how batches are parallelised, without code changes.
//!
//! # Examples
//!
//! ```
//! use legality_catalog::{AnalysisConfig, BatchThreadCount, UncheckedPolicy};
//!
//! let config = AnalysisConfig::from_toml_str(r#"
//!     unchecked = "fail"
//!     batch_threads = { count = 4 }
//! "#).unwrap();
//!
//! assert_eq!(config.unchecked, UncheckedPolicy::Fail);
//! assert_eq!(config.batch_threads, BatchThreadCount::Count(4));
//! assert!(config.catalog.is_none());
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use legality_catalog::AnalysisConfig;
//!
//! let config = AnalysisConfig::load("legality.toml").unwrap_or_default();
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::error::{CatalogError, Result};

/// Analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Rule catalog file replacing the embedded one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// How `Unchecked` verdicts affect overall legality.
    #[serde(default)]
    pub unchecked: UncheckedPolicy,

    /// Number of threads for batch analysis.
    #[serde(default)]
    pub batch_threads: BatchThreadCount,
}

impl AnalysisConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the external catalog file.
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// Sets the unchecked policy.
    pub fn with_unchecked(mut self, policy: UncheckedPolicy) -> Self {
        self.unchecked = policy;
        self
    }

    /// Sets the batch thread count.
    pub fn with_batch_threads(mut self, threads: BatchThreadCount) -> Self {
        self.batch_threads = threads;
        self
    }

    /// Returns the configured catalog, or the embedded one if none is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use legality_catalog::{AnalysisConfig, RuleCatalog};
    ///
    /// let catalog = AnalysisConfig::new().load_catalog().unwrap();
    /// assert_eq!(catalog.revision, RuleCatalog::builtin().revision);
    /// ```
    pub fn load_catalog(&self) -> Result<Cow<'static, RuleCatalog>> {
        match &self.catalog {
            Some(path) => RuleCatalog::load(path).map(Cow::Owned),
            None => Ok(Cow::Borrowed(RuleCatalog::builtin())),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.batch_threads == BatchThreadCount::Count(0) {
            return Err(CatalogError::Invalid(
                "batch_threads count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Treatment of `Unchecked` verdicts when judging a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UncheckedPolicy {
    /// Unchecked verdicts are reported but do not make a record illegal.
    #[default]
    Report,

    /// Any unchecked verdict makes the record illegal.
    Fail,
}

/// Batch thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchThreadCount {
    /// Use rayon's global pool.
    #[default]
    Auto,

    /// Analyse sequentially on the calling thread.
    None,

    /// Dedicated pool with this many threads.
    Count(usize),
}
