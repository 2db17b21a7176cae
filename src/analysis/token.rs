//! Token types for text analysis.
//!
//! A [`Token`] is a run of word-class characters taken from the input text.
//! Tokens flow from the tokenizer through token filters into the scanners as a
//! [`TokenStream`].
//!
//! # Examples
//!
//! ```
//! use antimat::analysis::token::Token;
//!
//! let token = Token::with_offsets("слово", 0, 0, 10);
//! assert_eq!(token.text, "слово");
//! assert_eq!(token.char_len(), 5);
//! assert_eq!(token.end_offset, 10);
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
///
/// Offsets are byte offsets into the original text. A token produced by
/// merging several short tokens spans from the first one's start to the last
/// one's end, while its `text` is the concatenation of the merged pieces and
/// therefore need not appear verbatim in the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the token text in characters.
    ///
    /// Every length rule in the scanners counts characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
