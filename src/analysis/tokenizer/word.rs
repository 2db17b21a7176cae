//! Word-class tokenizer for mixed Cyrillic/Latin text.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Character class that defines a token: Russian Cyrillic letters (including
/// `ё`), Latin letters, ASCII digits, hyphen and asterisk.
///
/// Digits, `-` and `*` are part of words because they are the usual
/// obfuscation fillers (`х*й`, `пр1мер`, `с-л-о-в-о`).
pub const WORD_PATTERN: &str = r"[а-яА-ЯёЁa-zA-Z0-9*-]+";

static WORD_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
});

/// Extracts maximal runs of [`WORD_PATTERN`] characters, left to right.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a tokenizer using the shared, precompiled word pattern.
    pub fn new() -> Self {
        WordTokenizer {
            pattern: Arc::clone(&WORD_REGEX),
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Borrowing variant of [`Tokenizer::tokenize`] that yields the token
    /// text slices without allocating.
    pub fn words<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> + use<'t> {
        let pattern = Arc::clone(&self.pattern);
        let mut pos = 0;
        std::iter::from_fn(move || {
            let mat = pattern.find_at(text, pos)?;
            pos = mat.end();
            Some(mat.as_str())
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(WordTokens {
            pattern: Arc::clone(&self.pattern),
            text: text.to_owned(),
            cursor: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Lazy token iterator that owns its copy of the text.
struct WordTokens {
    pattern: Arc<Regex>,
    text: String,
    cursor: usize,
    position: usize,
}

impl Iterator for WordTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mat = self.pattern.find_at(&self.text, self.cursor)?;
        self.cursor = mat.end();

        let token = Token::with_offsets(mat.as_str(), self.position, mat.start(), mat.end());
        self.position += 1;
        Some(token)
    }
}
