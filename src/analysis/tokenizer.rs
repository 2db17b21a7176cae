//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the fuzzy scanning path and of the
//! pattern engine's wrap operation: they pull word-shaped substrings out of
//! arbitrary text.
//!
//! # Examples
//!
//! ```
//! use antimat::analysis::tokenizer::Tokenizer;
//! use antimat::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("ну, x-y-z и 42!").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["ну", "x-y-z", "и", "42"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by engines
/// that are used from several threads at once.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// The stream is lazy and restartable: tokenizing the same text again
    /// yields the same sequence.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word;
