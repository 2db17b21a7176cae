//! The fuzzy, lexicon-driven detection engine.
//!
//! Text is split into scanning units (see [`crate::analysis`]) and every unit
//! is compared against each lexicon word with a bounded Levenshtein distance.
//! This catches look-alike substitutions ("пр1мер"), dropped or doubled
//! letters and words spelled out with spaces ("п р и м е р").
//!
//! Replacement is literal: a matched fragment is masked wherever it occurs in
//! the text. Fragments assembled from spaced-out letters do not occur in the
//! source text verbatim, so `test` reports them but `replace` leaves them as
//! they are.

pub mod config;
pub mod scanner;

use log::debug;

use crate::censor::{Censor, Match};
use crate::error::Result;
use crate::fuzzy::config::FuzzyConfig;
use crate::fuzzy::scanner::FuzzyScanner;
use crate::lexicon::provider::LexiconProvider;

/// A [`FuzzyScanner`] bound to a lexicon source.
///
/// One lexicon snapshot is fetched per operation, so a provider that reloads
/// its words is picked up on the next call.
///
/// # Examples
///
/// ```
/// use antimat::censor::Censor;
/// use antimat::fuzzy::FuzzyCensor;
/// use antimat::lexicon::provider::StaticLexiconProvider;
///
/// let censor = FuzzyCensor::new(StaticLexiconProvider::from_words(["пример"]).unwrap());
/// assert!(censor.test("п р и м е р").unwrap());
/// assert_eq!(censor.replace("примерчик", "***").unwrap(), "***чик");
/// ```
pub struct FuzzyCensor<P> {
    scanner: FuzzyScanner,
    provider: P,
}

impl<P: LexiconProvider> FuzzyCensor<P> {
    /// Create a censor with the default scanner configuration.
    pub fn new(provider: P) -> Self {
        FuzzyCensor {
            scanner: FuzzyScanner::new(),
            provider,
        }
    }

    /// Create a censor with a custom scanner configuration.
    pub fn with_config(provider: P, config: FuzzyConfig) -> Result<Self> {
        Ok(FuzzyCensor {
            scanner: FuzzyScanner::with_config(config)?,
            provider,
        })
    }

    /// The underlying scanner.
    pub fn scanner(&self) -> &FuzzyScanner {
        &self.scanner
    }

    /// The lexicon source.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: LexiconProvider> Censor for FuzzyCensor<P> {
    fn find(&self, text: &str) -> Result<Vec<Match>> {
        let lexicon = self.provider.canonical_words()?;
        let matches: Vec<Match> = self.scanner.scan(text, &lexicon)?.collect();
        debug!(
            "fuzzy: {} matches against {} words from '{}'",
            matches.len(),
            lexicon.len(),
            self.provider.name()
        );
        Ok(matches)
    }

    fn test(&self, text: &str) -> Result<bool> {
        let lexicon = self.provider.canonical_words()?;
        let mut matches = self.scanner.scan(text, &lexicon)?;
        Ok(matches.next().is_some())
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}
