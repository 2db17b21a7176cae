//! A compiled pattern family behind the [`Censor`] contract.

use fancy_regex::{Regex, RegexBuilder};
use log::debug;

use crate::analysis::tokenizer::word::WordTokenizer;
use crate::censor::{Censor, Match};
use crate::error::Result;
use crate::pattern::families::source;
use crate::pattern::{PatternConfig, PatternFamily};

/// Detects offensive text with one compiled alternation.
///
/// `replace` substitutes every match span of the alternation with the marker;
/// `wrap` checks each word of at least `min_wrap_len` characters on its own
/// and wraps the words that match.
///
/// # Examples
///
/// ```
/// use antimat::censor::Censor;
/// use antimat::pattern::{PatternConfig, PatternFamily, PatternMatcher};
///
/// let matcher = PatternMatcher::compile(PatternConfig::for_family(PatternFamily::Roots)).unwrap();
/// assert!(matcher.test("мудак").unwrap());
/// assert!(!matcher.test("мудрый").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    family: PatternFamily,
    regex: Regex,
    min_wrap_len: usize,
    tokenizer: WordTokenizer,
}

impl PatternMatcher {
    /// Compile a private matcher.
    pub fn compile(config: PatternConfig) -> Result<Self> {
        let regex = RegexBuilder::new(&source(config.family))
            .backtrack_limit(config.backtrack_limit)
            .build()?;
        Ok(PatternMatcher {
            family: config.family,
            regex,
            min_wrap_len: config.min_wrap_len,
            tokenizer: WordTokenizer::new(),
        })
    }

    /// The compiled family.
    pub fn family(&self) -> PatternFamily {
        self.family
    }

    /// Minimum length of a wrapped word, in characters.
    pub fn min_wrap_len(&self) -> usize {
        self.min_wrap_len
    }

    /// The compiled pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Censor for PatternMatcher {
    fn find(&self, text: &str) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for m in self.regex.find_iter(text) {
            matches.push(Match::pattern(m?.as_str(), self.family));
        }
        Ok(matches)
    }

    fn test(&self, text: &str) -> Result<bool> {
        Ok(self.regex.is_match(text)?)
    }

    fn replace(&self, text: &str, marker: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        let mut spans = 0;
        for m in self.regex.find_iter(text) {
            let m = m?;
            output.push_str(&text[last..m.start()]);
            output.push_str(marker);
            last = m.end();
            spans += 1;
        }
        output.push_str(&text[last..]);
        debug!("pattern {}: masked {spans} spans", self.family);
        Ok(output)
    }

    fn wrap_targets(&self, text: &str) -> Result<Vec<String>> {
        let mut targets = Vec::new();
        for word in self.tokenizer.words(text) {
            if word.chars().count() < self.min_wrap_len {
                continue;
            }
            if self.regex.is_match(word)? {
                targets.push(word.to_string());
            }
        }
        Ok(targets)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::censor::{DEFAULT_MARKER, MatchKind, Wrap};
    use crate::pattern::builtin;

    fn spaced() -> &'static PatternMatcher {
        builtin(PatternFamily::SpacedLetters).unwrap()
    }

    fn roots() -> &'static PatternMatcher {
        builtin(PatternFamily::Roots).unwrap()
    }

    #[test]
    fn test_spaced_letters_detection() {
        let matcher = spaced();
        assert!(matcher.test("х-у-й").unwrap());
        assert!(matcher.test("х у й").unwrap());
        assert!(matcher.test("Х У Й").unwrap());
        assert!(!matcher.test("привет").unwrap());
        assert!(!matcher.test("Hello world").unwrap());
        assert!(!matcher.test("").unwrap());
    }

    #[test]
    fn test_spaced_letters_replace_whole_span() {
        let matcher = spaced();
        assert_eq!(matcher.replace("х-у-й", DEFAULT_MARKER).unwrap(), DEFAULT_MARKER);
        assert_eq!(matcher.replace("х у й", DEFAULT_MARKER).unwrap(), DEFAULT_MARKER);
        assert_eq!(matcher.replace("привет", DEFAULT_MARKER).unwrap(), "привет");
    }

    #[test]
    fn test_marker_is_literal() {
        assert_eq!(spaced().replace("х-у-й", "$0 ${1}").unwrap(), "$0 ${1}");
    }

    #[test]
    fn test_wrap_only_matching_words() {
        let wrapped = spaced().wrap("ну х-у-й", &Wrap::new("<b>", "</b>")).unwrap();
        assert_eq!(wrapped, "ну <b>х-у-й</b>");
    }

    #[test]
    fn test_short_words_are_not_wrapped() {
        let matcher = PatternMatcher::compile(PatternConfig {
            family: PatternFamily::SpacedLetters,
            min_wrap_len: 10,
            ..PatternConfig::default()
        })
        .unwrap();
        assert!(matcher.test("х-у-й").unwrap());
        assert!(matcher.wrap_targets("х-у-й").unwrap().is_empty());
        assert_eq!(matcher.wrap("х-у-й", &Wrap::default()).unwrap(), "х-у-й");
    }

    #[test]
    fn test_roots_family() {
        let matcher = roots();
        assert!(matcher.test("мудак").unwrap());
        assert!(matcher.test("трахнуть").unwrap());
        assert!(!matcher.test("мудрый").unwrap());
        assert!(!matcher.test("страх").unwrap());
        assert!(!matcher.test("застраховать").unwrap());
    }

    #[test]
    fn test_find_reports_family() {
        let found = roots().find("ты мудак").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "мудак");
        assert_eq!(
            found[0].kind,
            MatchKind::Pattern {
                family: PatternFamily::Roots
            }
        );
    }

    #[test]
    fn test_combined_family() {
        let matcher = builtin(PatternFamily::Combined).unwrap();
        assert!(matcher.test("мудак").unwrap());
        assert!(matcher.test("х у й").unwrap());
        assert!(!matcher.test("привет").unwrap());
    }

    #[test]
    fn test_compile_matches_builtin() {
        let private = PatternMatcher::compile(PatternConfig::default()).unwrap();
        assert_eq!(private.as_str(), spaced().as_str());
        assert_eq!(private.family(), PatternFamily::SpacedLetters);
        assert_eq!(private.min_wrap_len(), 3);
    }
}
