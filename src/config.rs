//! File-based configuration of a censor.
//!
//! A configuration is a JSON document; every field is optional:
//!
//! ```json
//! {
//!   "engine": "both",
//!   "marker": "[censored]",
//!   "wrap": { "prefix": "<em>", "suffix": "</em>" },
//!   "lexicon": "words.txt",
//!   "fuzzy": { "tolerance_ratio": 0.25, "offset_policy": "anywhere" },
//!   "pattern": { "family": "roots", "min_wrap_len": 3 }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::censor::combined::CombinedCensor;
use crate::censor::{Censor, DEFAULT_MARKER, Wrap};
use crate::error::{AntimatError, Result};
use crate::fuzzy::FuzzyCensor;
use crate::fuzzy::config::FuzzyConfig;
use crate::lexicon::provider::{CachedLexiconProvider, FileLexiconProvider};
use crate::pattern::{self, PatternConfig, PatternMatcher};

/// Which detection engine a configuration builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Compiled patterns only. Needs no lexicon.
    #[default]
    Pattern,
    /// Edit-distance scanning against a lexicon.
    Fuzzy,
    /// Both engines combined.
    Both,
}

impl EngineKind {
    /// The configuration name of the engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Pattern => "pattern",
            EngineKind::Fuzzy => "fuzzy",
            EngineKind::Both => "both",
        }
    }

    /// Check if the engine scans against a lexicon.
    pub fn needs_lexicon(&self) -> bool {
        matches!(self, EngineKind::Fuzzy | EngineKind::Both)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = AntimatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pattern" => Ok(EngineKind::Pattern),
            "fuzzy" => Ok(EngineKind::Fuzzy),
            "both" => Ok(EngineKind::Both),
            other => Err(AntimatError::invalid_argument(format!(
                "unknown engine '{other}', expected pattern, fuzzy or both"
            ))),
        }
    }
}

/// Everything needed to build a ready-to-use censor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensorConfig {
    pub engine: EngineKind,
    /// Replacement for masked fragments. May be empty.
    pub marker: String,
    pub wrap: Wrap,
    /// Lexicon file for the fuzzy engine.
    pub lexicon: Option<PathBuf>,
    pub fuzzy: FuzzyConfig,
    pub pattern: PatternConfig,
}

impl Default for CensorConfig {
    fn default() -> Self {
        CensorConfig {
            engine: EngineKind::default(),
            marker: DEFAULT_MARKER.to_string(),
            wrap: Wrap::default(),
            lexicon: None,
            fuzzy: FuzzyConfig::default(),
            pattern: PatternConfig::default(),
        }
    }
}

impl CensorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a configuration file.
    ///
    /// Only the syntax is checked here; call [`CensorConfig::validate`] once
    /// any command line overrides have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = CensorConfig::from_json(&fs::read_to_string(path)?)?;
        debug!(
            "Loaded configuration from {} (engine: {})",
            path.display(),
            config.engine
        );
        Ok(config)
    }

    /// Check that the configuration can build a censor.
    pub fn validate(&self) -> Result<()> {
        self.fuzzy.validate()?;
        if self.engine.needs_lexicon() && self.lexicon.is_none() {
            return Err(AntimatError::config(format!(
                "engine '{}' needs a lexicon file",
                self.engine
            )));
        }
        Ok(())
    }

    /// Build the configured censor.
    ///
    /// # Examples
    ///
    /// ```
    /// use antimat::config::CensorConfig;
    ///
    /// let censor = CensorConfig::default().build_censor().unwrap();
    /// assert_eq!(censor.name(), "pattern");
    /// assert!(censor.test("х у й").unwrap());
    /// ```
    pub fn build_censor(&self) -> Result<Box<dyn Censor>> {
        self.validate()?;

        let censor: Box<dyn Censor> = match self.engine {
            EngineKind::Pattern => self.pattern_censor()?,
            EngineKind::Fuzzy => self.fuzzy_censor()?,
            EngineKind::Both => Box::new(CombinedCensor::new(vec![
                self.pattern_censor()?,
                self.fuzzy_censor()?,
            ])?),
        };
        debug!("Built '{}' censor", censor.name());
        Ok(censor)
    }

    fn pattern_censor(&self) -> Result<Box<dyn Censor>> {
        if self.pattern.is_builtin() {
            return Ok(Box::new(pattern::builtin(self.pattern.family)?));
        }
        Ok(Box::new(PatternMatcher::compile(self.pattern.clone())?))
    }

    fn fuzzy_censor(&self) -> Result<Box<dyn Censor>> {
        let path = self
            .lexicon
            .as_ref()
            .ok_or_else(|| AntimatError::config("the fuzzy engine needs a lexicon file"))?;
        let provider = CachedLexiconProvider::new(FileLexiconProvider::new(path));
        Ok(Box::new(FuzzyCensor::with_config(
            provider,
            self.fuzzy.clone(),
        )?))
    }
}
