//! The lexicon of canonical banned words.
//!
//! A [`Lexicon`] is a read-only snapshot consumed by the fuzzy scanner. Words
//! are stored in canonical form: trimmed, lowercase, without whitespace and at
//! most [`MAX_WORD_LEN`] characters long. Duplicates collapse on insertion and
//! the insertion order is preserved, because the scanner reports matches in
//! lexicon order.
//!
//! Where the snapshot comes from is the job of a
//! [`LexiconProvider`](provider::LexiconProvider).

pub mod provider;

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::{debug, warn};

use crate::error::{AntimatError, Result};

/// Maximum length of a canonical word, in characters.
pub const MAX_WORD_LEN: usize = 64;

/// One canonical banned root form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconWord {
    text: String,
    chars: Vec<char>,
}

impl LexiconWord {
    /// Normalize and validate a word.
    pub fn new(word: &str) -> Result<Self> {
        let text = normalize_word(word)?;
        let chars = text.chars().collect();
        Ok(LexiconWord { text, chars })
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The canonical text split into characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }
}

/// Bring a word to canonical form, rejecting words that cannot be canonical.
///
/// # Examples
///
/// ```
/// use antimat::lexicon::normalize_word;
///
/// assert_eq!(normalize_word("  Пример ").unwrap(), "пример");
/// assert!(normalize_word("два слова").is_err());
/// assert!(normalize_word("   ").is_err());
/// ```
pub fn normalize_word(word: &str) -> Result<String> {
    let normalized = word.trim().to_lowercase();

    if normalized.is_empty() {
        return Err(AntimatError::lexicon("empty word"));
    }
    if normalized.chars().any(char::is_whitespace) {
        return Err(AntimatError::lexicon(format!(
            "word '{normalized}' contains whitespace"
        )));
    }
    let len = normalized.chars().count();
    if len > MAX_WORD_LEN {
        return Err(AntimatError::lexicon(format!(
            "word '{normalized}' is {len} characters long, the limit is {MAX_WORD_LEN}"
        )));
    }

    Ok(normalized)
}

/// An ordered, deduplicated set of canonical words.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: Vec<LexiconWord>,
    index: AHashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Build a lexicon from words, failing on the first invalid one.
    ///
    /// # Examples
    ///
    /// ```
    /// use antimat::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["пример", "ПРИМЕР", "слово"]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("слово"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// Add a word. Returns `false` if its canonical form was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = LexiconWord::new(word)?;
        if !self.index.insert(word.text.clone()) {
            return Ok(false);
        }
        self.words.push(word);
        Ok(true)
    }

    /// Check if the canonical form of `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LexiconWord> {
        self.words.iter()
    }

    /// The words in insertion order.
    pub fn as_slice(&self) -> &[LexiconWord] {
        &self.words
    }

    /// Iterate over the canonical texts in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(LexiconWord::as_str)
    }

    /// Length of the longest word, in characters.
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(LexiconWord::char_len).max().unwrap_or(0)
    }

    /// Parse lexicon file contents.
    ///
    /// Two formats are accepted: a JSON array of strings, or plain text with
    /// one word per line where blank lines and lines starting with `#` are
    /// ignored. In plain text, invalid lines are skipped with a warning; in
    /// JSON every entry must be valid.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('[') {
            let words: Vec<String> = serde_json::from_str(content)?;
            return Lexicon::from_words(words);
        }

        let mut lexicon = Lexicon::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Err(e) = lexicon.insert(line) {
                warn!("Skipping lexicon line {}: {e}", line_num + 1);
            }
        }
        Ok(lexicon)
    }

    /// Load a lexicon from a file (see [`Lexicon::parse`] for formats).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lexicon = Lexicon::parse(&content)?;
        debug!(
            "Loaded {} lexicon words from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a LexiconWord;
    type IntoIter = std::slice::Iter<'a, LexiconWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
