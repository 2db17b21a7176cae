//! Edit-distance scanning of text against a lexicon.

use log::warn;

use crate::analysis::prepare_units;
use crate::analysis::token::TokenStream;
use crate::censor::Match;
use crate::error::Result;
use crate::fuzzy::config::FuzzyConfig;
use crate::lexicon::{Lexicon, LexiconWord};
use crate::util::levenshtein::levenshtein_chars_threshold;

/// Finds fragments of text within edit-distance tolerance of lexicon words.
///
/// For each scanning unit `T` and each lexicon word `W` no longer than
/// `len(T) + length_slack`, the fragment `T[p..min(p + len(W), len(T))]` is
/// compared with `W` for every offset `p` the offset policy allows. A fragment
/// whose distance is within the word's tolerance is reported.
///
/// # Examples
///
/// ```
/// use antimat::fuzzy::scanner::FuzzyScanner;
/// use antimat::lexicon::Lexicon;
///
/// let lexicon = Lexicon::from_words(["пример"]).unwrap();
/// let scanner = FuzzyScanner::new();
///
/// let found: Vec<String> = scanner
///     .scan("это пр1мер", &lexicon)
///     .unwrap()
///     .map(|m| m.text)
///     .collect();
/// assert_eq!(found, ["пр1мер"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FuzzyScanner {
    config: FuzzyConfig,
}

impl FuzzyScanner {
    /// Create a scanner with the default configuration.
    pub fn new() -> Self {
        FuzzyScanner::default()
    }

    /// Create a scanner with a custom configuration.
    pub fn with_config(config: FuzzyConfig) -> Result<Self> {
        config.validate()?;
        Ok(FuzzyScanner { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Lazily scan `text` against `lexicon`.
    ///
    /// Matches come out unit by unit, then in lexicon order, then by offset.
    /// The same literal may be reported more than once.
    pub fn scan<'a>(&'a self, text: &str, lexicon: &'a Lexicon) -> Result<FuzzyMatches<'a>> {
        let words = lexicon.as_slice();
        Ok(FuzzyMatches {
            config: &self.config,
            words,
            units: prepare_units(text)?,
            unit: Vec::new(),
            folded: Vec::new(),
            word_idx: words.len(),
            offset: 0,
        })
    }
}

/// Lazy iterator over the matches of one scan.
pub struct FuzzyMatches<'a> {
    config: &'a FuzzyConfig,
    words: &'a [LexiconWord],
    units: TokenStream,

    // Current unit, as written and as compared.
    unit: Vec<char>,
    folded: Vec<char>,

    word_idx: usize,
    offset: usize,
}

impl FuzzyMatches<'_> {
    /// Move to the next scanning unit. Returns `false` when the text is exhausted.
    fn advance_unit(&mut self) -> bool {
        let Some(token) = self.units.next() else {
            return false;
        };

        let mut chars: Vec<char> = token.text.chars().collect();
        if chars.len() > self.config.max_unit_len {
            warn!(
                "Truncating scanning unit of {} characters to {}",
                chars.len(),
                self.config.max_unit_len
            );
            chars.truncate(self.config.max_unit_len);
        }

        self.folded = if self.config.fold_case {
            chars.iter().map(|&c| fold_char(c)).collect()
        } else {
            chars.clone()
        };
        self.unit = chars;
        self.word_idx = 0;
        self.offset = 0;
        true
    }

    fn next_word(&mut self) {
        self.word_idx += 1;
        self.offset = 0;
    }
}

impl Iterator for FuzzyMatches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        if self.words.is_empty() {
            return None;
        }

        loop {
            if self.word_idx >= self.words.len() {
                if !self.advance_unit() {
                    return None;
                }
                continue;
            }

            let word = &self.words[self.word_idx];
            let word_len = word.char_len();
            let unit_len = self.unit.len();
            let policy = self.config.offset_policy;

            if word_len > unit_len + self.config.length_slack
                || self.offset >= unit_len
                || policy.last_offset().is_some_and(|last| self.offset > last)
            {
                self.next_word();
                continue;
            }

            let start = self.offset;
            self.offset += 1;

            let Some(tolerance) = policy.tolerance_at(start, self.config.tolerance(word_len)) else {
                continue;
            };

            let end = (start + word_len).min(unit_len);
            if let Some(distance) =
                levenshtein_chars_threshold(&self.folded[start..end], word.chars(), tolerance)
            {
                let literal: String = self.unit[start..end].iter().collect();
                return Some(Match::fuzzy(literal, word.as_str(), distance));
            }
        }
    }
}

/// Single-character lowercase mapping that keeps positions aligned.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
