//! The compiled-pattern detection engine.
//!
//! Instead of a lexicon, this engine relies on large case-insensitive
//! alternations that encode banned stems together with their obfuscated
//! spellings. Two families are built in, and a third joins them:
//!
//! - [`PatternFamily::SpacedLetters`]: stems whose letters may be separated
//!   by whitespace, punctuation or repeats ("х-у-й", "п и з д").
//! - [`PatternFamily::Roots`]: roots with their morphological variants and
//!   lookaround exclusions for innocent look-alikes.
//! - [`PatternFamily::Combined`]: either of the above.
//!
//! Built-in matchers are compiled once per process. Call [`precompile`] at
//! start-up to surface compile errors before the first request.

pub mod families;
pub mod matcher;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AntimatError, Result};

pub use matcher::PatternMatcher;

/// A built-in pattern family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFamily {
    /// Stems spelled out with noise between letters.
    #[default]
    SpacedLetters,
    /// Root-based alternation with exclusions.
    Roots,
    /// Both families in one alternation.
    Combined,
}

impl PatternFamily {
    /// Every family, in declaration order.
    pub const ALL: [PatternFamily; 3] = [
        PatternFamily::SpacedLetters,
        PatternFamily::Roots,
        PatternFamily::Combined,
    ];

    /// The configuration name of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternFamily::SpacedLetters => "spaced_letters",
            PatternFamily::Roots => "roots",
            PatternFamily::Combined => "combined",
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternFamily {
    type Err = AntimatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "spaced_letters" => Ok(PatternFamily::SpacedLetters),
            "roots" => Ok(PatternFamily::Roots),
            "combined" => Ok(PatternFamily::Combined),
            other => Err(AntimatError::invalid_argument(format!(
                "unknown pattern family '{other}', expected spaced_letters, roots or combined"
            ))),
        }
    }
}

/// Settings of a [`PatternMatcher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Which alternation to compile.
    pub family: PatternFamily,
    /// Tokens shorter than this many characters are never wrapped.
    pub min_wrap_len: usize,
    /// Upper bound on backtracking steps of a single search call.
    pub backtrack_limit: usize,
}

/// Default minimum token length for `wrap`.
pub const DEFAULT_MIN_WRAP_LEN: usize = 3;

/// Default backtracking budget of one search call. Clean prose costs well
/// under a hundred steps per character, so megabytes of text fit.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000_000;

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            family: PatternFamily::default(),
            min_wrap_len: DEFAULT_MIN_WRAP_LEN,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl PatternConfig {
    /// Default settings for the given family.
    pub fn for_family(family: PatternFamily) -> Self {
        PatternConfig {
            family,
            ..PatternConfig::default()
        }
    }

    /// Check whether a matcher built from this config behaves like the
    /// shared built-in matcher of its family.
    pub fn is_builtin(&self) -> bool {
        *self == PatternConfig::for_family(self.family)
    }
}

type Compiled = std::result::Result<PatternMatcher, String>;

fn compile_builtin(family: PatternFamily) -> Compiled {
    debug!("Compiling built-in pattern family '{family}'");
    PatternMatcher::compile(PatternConfig::for_family(family)).map_err(|e| e.to_string())
}

static SPACED_LETTERS: LazyLock<Compiled> =
    LazyLock::new(|| compile_builtin(PatternFamily::SpacedLetters));
static ROOTS: LazyLock<Compiled> = LazyLock::new(|| compile_builtin(PatternFamily::Roots));
static COMBINED: LazyLock<Compiled> = LazyLock::new(|| compile_builtin(PatternFamily::Combined));

/// The shared, process-wide matcher of a built-in family.
///
/// # Examples
///
/// ```
/// use antimat::censor::Censor;
/// use antimat::pattern::{PatternFamily, builtin};
///
/// let matcher = builtin(PatternFamily::SpacedLetters).unwrap();
/// assert!(matcher.test("х-у-й").unwrap());
/// assert!(!matcher.test("привет").unwrap());
/// ```
pub fn builtin(family: PatternFamily) -> Result<&'static PatternMatcher> {
    let compiled: &'static Compiled = match family {
        PatternFamily::SpacedLetters => &*SPACED_LETTERS,
        PatternFamily::Roots => &*ROOTS,
        PatternFamily::Combined => &*COMBINED,
    };
    compiled
        .as_ref()
        .map_err(|e| AntimatError::pattern(format!("built-in family '{family}': {e}")))
}

/// Compile every built-in family now.
pub fn precompile() -> Result<()> {
    for family in PatternFamily::ALL {
        builtin(family)?;
    }
    Ok(())
}
