//! The shared test / replace / wrap contract.
//!
//! Both detection engines, [`FuzzyCensor`](crate::fuzzy::FuzzyCensor) and
//! [`PatternMatcher`](crate::pattern::PatternMatcher), implement [`Censor`].
//! Callers pick one, or combine several with
//! [`CombinedCensor`](combined::CombinedCensor).
//!
//! # Examples
//!
//! ```
//! use antimat::censor::{Censor, DEFAULT_MARKER, Wrap};
//! use antimat::fuzzy::FuzzyCensor;
//! use antimat::lexicon::provider::StaticLexiconProvider;
//!
//! let provider = StaticLexiconProvider::from_words(["пример"]).unwrap();
//! let censor = FuzzyCensor::new(provider);
//!
//! assert!(censor.test("вот пр1мер текста").unwrap());
//! assert_eq!(
//!     censor.replace("вот пр1мер текста", DEFAULT_MARKER).unwrap(),
//!     "вот [censored] текста"
//! );
//! assert_eq!(
//!     censor.wrap("вот пр1мер", &Wrap::new("<b>", "</b>")).unwrap(),
//!     "вот <b>пр1мер</b>"
//! );
//! ```

pub mod combined;
pub mod substitution;

use std::fmt;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::censor::substitution::SubstitutionTable;
use crate::error::Result;
use crate::pattern::PatternFamily;

/// Marker used by `replace` when the caller has no preference.
pub const DEFAULT_MARKER: &str = "[censored]";

/// Default opening markup for `wrap`.
pub const DEFAULT_WRAP_PREFIX: &str = "<span style=\"color:red;\">";

/// Default closing markup for `wrap`.
pub const DEFAULT_WRAP_SUFFIX: &str = "</span>";

/// Prefix/suffix pair inserted around matches by `wrap`.
///
/// Both strings are opaque: nothing is escaped or validated, so callers
/// embedding the output in markup must escape the input text themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wrap {
    pub prefix: String,
    pub suffix: String,
}

impl Wrap {
    /// Create a wrap pair.
    pub fn new<P: Into<String>, S: Into<String>>(prefix: P, suffix: S) -> Self {
        Wrap {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Surround a single literal.
    pub fn apply(&self, literal: &str) -> String {
        format!("{}{literal}{}", self.prefix, self.suffix)
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Wrap::new(DEFAULT_WRAP_PREFIX, DEFAULT_WRAP_SUFFIX)
    }
}

/// How a match was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum MatchKind {
    /// A fragment within edit-distance tolerance of a lexicon word.
    Fuzzy { word: String, distance: usize },
    /// A hit of a compiled pattern family.
    Pattern { family: PatternFamily },
}

/// A detected offensive fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The matched literal substring.
    pub text: String,

    /// Where the match came from.
    #[serde(flatten)]
    pub kind: MatchKind,
}

impl Match {
    /// Create a fuzzy match.
    pub fn fuzzy<T: Into<String>, W: Into<String>>(text: T, word: W, distance: usize) -> Self {
        Match {
            text: text.into(),
            kind: MatchKind::Fuzzy {
                word: word.into(),
                distance,
            },
        }
    }

    /// Create a pattern match.
    pub fn pattern<T: Into<String>>(text: T, family: PatternFamily) -> Self {
        Match {
            text: text.into(),
            kind: MatchKind::Pattern { family },
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MatchKind::Fuzzy { word, distance } => {
                write!(f, "{} (~{word}, distance {distance})", self.text)
            }
            MatchKind::Pattern { family } => write!(f, "{} (pattern {family})", self.text),
        }
    }
}

/// The capability shared by every detection engine.
///
/// Engines hold no mutable state, so one instance can serve any number of
/// threads at once.
pub trait Censor: Send + Sync {
    /// List every match in `text`, in detection order. Duplicates are kept.
    fn find(&self, text: &str) -> Result<Vec<Match>>;

    /// Check whether `text` contains at least one match.
    fn test(&self, text: &str) -> Result<bool> {
        Ok(!self.find(text)?.is_empty())
    }

    /// Replace every distinct matched literal, at every occurrence, by `marker`.
    fn replace(&self, text: &str, marker: &str) -> Result<String> {
        let table = SubstitutionTable::masking(self.find(text)?.into_iter().map(|m| m.text), marker);
        debug!("{}: masking {} distinct fragments", self.name(), table.len());
        table.apply(text)
    }

    /// Literals that [`Censor::wrap`] surrounds with markup.
    fn wrap_targets(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.find(text)?.into_iter().map(|m| m.text).collect())
    }

    /// Replace every distinct wrap target, at every occurrence, by
    /// `prefix + target + suffix`.
    fn wrap(&self, text: &str, wrap: &Wrap) -> Result<String> {
        let table = SubstitutionTable::wrapping(self.wrap_targets(text)?, &wrap.prefix, &wrap.suffix);
        debug!("{}: wrapping {} distinct fragments", self.name(), table.len());
        table.apply(text)
    }

    /// Get the name of this engine (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<C: Censor + ?Sized> Censor for &C {
    fn find(&self, text: &str) -> Result<Vec<Match>> {
        (**self).find(text)
    }

    fn test(&self, text: &str) -> Result<bool> {
        (**self).test(text)
    }

    fn replace(&self, text: &str, marker: &str) -> Result<String> {
        (**self).replace(text, marker)
    }

    fn wrap_targets(&self, text: &str) -> Result<Vec<String>> {
        (**self).wrap_targets(text)
    }

    fn wrap(&self, text: &str, wrap: &Wrap) -> Result<String> {
        (**self).wrap(text, wrap)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<C: Censor + ?Sized> Censor for Box<C> {
    fn find(&self, text: &str) -> Result<Vec<Match>> {
        (**self).find(text)
    }

    fn test(&self, text: &str) -> Result<bool> {
        (**self).test(text)
    }

    fn replace(&self, text: &str, marker: &str) -> Result<String> {
        (**self).replace(text, marker)
    }

    fn wrap_targets(&self, text: &str) -> Result<Vec<String>> {
        (**self).wrap_targets(text)
    }

    fn wrap(&self, text: &str, wrap: &Wrap) -> Result<String> {
        (**self).wrap(text, wrap)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Run `replace` over many independent texts in parallel.
///
/// Output order matches input order. The first error aborts the batch.
pub fn replace_all_parallel<C, S>(censor: &C, texts: &[S], marker: &str) -> Result<Vec<String>>
where
    C: Censor + ?Sized,
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| censor.replace(text.as_ref(), marker))
        .collect()
}

/// Run `test` over many independent texts in parallel.
pub fn test_all_parallel<C, S>(censor: &C, texts: &[S]) -> Result<Vec<bool>>
where
    C: Censor + ?Sized,
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| censor.test(text.as_ref()))
        .collect()
}
