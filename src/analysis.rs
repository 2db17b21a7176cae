//! Text analysis for the scanners.
//!
//! The fuzzy scanner never looks at raw text. It works on *scanning units*:
//!
//! ```text
//! Raw Text → WordTokenizer → ShortTokenMerger → scanning units
//! ```

pub mod token;
pub mod token_filter;
pub mod tokenizer;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::merge_short::ShortTokenMerger;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// Tokenize `text` and merge short tokens into scanning units.
///
/// # Examples
///
/// ```
/// use antimat::analysis::prepare_units;
///
/// let units: Vec<_> = prepare_units("вот п р и м е р!")
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(units, ["вот", "пример"]);
/// ```
pub fn prepare_units(text: &str) -> Result<TokenStream> {
    let tokens = WordTokenizer::new().tokenize(text)?;
    ShortTokenMerger::new().filter(tokens)
}
