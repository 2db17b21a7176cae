//! # antimat
//!
//! Detection and masking of obfuscated profanity in mixed Cyrillic/Latin text.
//!
//! ## Features
//!
//! - Fuzzy engine: bounded Levenshtein matching of text fragments against a
//!   lexicon of canonical words
//! - Pattern engine: precompiled alternations for spelled-out and
//!   morphologically varied stems
//! - One test / replace / wrap contract for both engines, and their union
//! - Pluggable lexicon providers (in-memory, file, cached)
//! - JSON configuration and a command line front end
//!
//! ## Example
//!
//! ```
//! use antimat::prelude::*;
//!
//! let matcher = builtin(PatternFamily::SpacedLetters).unwrap();
//! assert_eq!(matcher.replace("ну х у й", DEFAULT_MARKER).unwrap(), "ну [censored]");
//!
//! let fuzzy = FuzzyCensor::new(StaticLexiconProvider::from_words(["пример"]).unwrap());
//! assert!(fuzzy.test("пр1мер").unwrap());
//! ```

pub mod analysis;
pub mod censor;
pub mod cli;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod lexicon;
pub mod pattern;
pub mod util;

pub mod prelude {
    pub use crate::censor::combined::CombinedCensor;
    pub use crate::censor::{Censor, DEFAULT_MARKER, Match, MatchKind, Wrap};
    pub use crate::config::{CensorConfig, EngineKind};
    pub use crate::error::{AntimatError, Result};
    pub use crate::fuzzy::FuzzyCensor;
    pub use crate::fuzzy::config::{FuzzyConfig, OffsetPolicy, ToleranceRounding};
    pub use crate::lexicon::Lexicon;
    pub use crate::lexicon::provider::{
        CachedLexiconProvider, FileLexiconProvider, LexiconProvider, StaticLexiconProvider,
    };
    pub use crate::pattern::{PatternConfig, PatternFamily, PatternMatcher, builtin};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
