//! Re-segmentation of a token stream into scanning units.
//!
//! Tokens longer than the threshold stay isolated. Maximal runs of
//! consecutive short tokens are glued together into one unit, so text such as
//! `п р и м е р` or `пр и ме р` becomes the single unit `пример`, while one- and
//! two-letter words never produce matches on their own.
//!
//! # Examples
//!
//! ```
//! use antimat::analysis::token::Token;
//! use antimat::analysis::token_filter::Filter;
//! use antimat::analysis::token_filter::merge_short::ShortTokenMerger;
//!
//! let tokens = vec![
//!     Token::new("про", 0),
//!     Token::new("с", 1),
//!     Token::new("ло", 2),
//!     Token::new("во", 3),
//!     Token::new("дом", 4),
//! ];
//! let units: Vec<_> = ShortTokenMerger::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(units, ["про", "слово", "дом"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Tokens of at most this many characters are merged with their neighbours.
pub const DEFAULT_MAX_SHORT_LEN: usize = 2;

/// Concatenates runs of short tokens into single tokens.
#[derive(Clone, Debug)]
pub struct ShortTokenMerger {
    max_short_len: usize,
}

impl ShortTokenMerger {
    /// Create a merger with the default short-token threshold of 2 characters.
    pub fn new() -> Self {
        ShortTokenMerger {
            max_short_len: DEFAULT_MAX_SHORT_LEN,
        }
    }

    /// Create a merger with a custom short-token threshold.
    pub fn with_max_short_len(max_short_len: usize) -> Self {
        ShortTokenMerger { max_short_len }
    }

    /// Get the short-token threshold.
    pub fn max_short_len(&self) -> usize {
        self.max_short_len
    }
}

impl Default for ShortTokenMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ShortTokenMerger {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(MergedUnits {
            tokens,
            max_short_len: self.max_short_len,
            pending: None,
            lookahead: None,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "merge_short"
    }
}

/// Lazy iterator over scanning units.
struct MergedUnits {
    tokens: TokenStream,
    max_short_len: usize,
    /// Run of short tokens accumulated so far
    pending: Option<Token>,
    /// Long token read while a run was pending; emitted right after the run
    lookahead: Option<Token>,
    position: usize,
}

impl MergedUnits {
    fn emit(&mut self, mut token: Token) -> Option<Token> {
        token.position = self.position;
        self.position += 1;
        Some(token)
    }
}

impl Iterator for MergedUnits {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.lookahead.take() {
            return self.emit(token);
        }

        loop {
            let Some(token) = self.tokens.next() else {
                let run = self.pending.take()?;
                return self.emit(run);
            };

            if token.is_empty() {
                continue;
            }

            if token.char_len() > self.max_short_len {
                return match self.pending.take() {
                    Some(run) => {
                        self.lookahead = Some(token);
                        self.emit(run)
                    }
                    None => self.emit(token),
                };
            }

            match self.pending.as_mut() {
                Some(run) => {
                    run.text.push_str(&token.text);
                    run.end_offset = token.end_offset;
                }
                None => self.pending = Some(token),
            }
        }
    }
}
