//! Literal substitution tables.
//!
//! Detection and mutation are two separate passes. Detection produces a
//! [`SubstitutionTable`] mapping each distinct matched literal to its
//! replacement; [`SubstitutionTable::apply`] then rewrites the text.
//!
//! Replacement is substring-literal, not position-indexed: every occurrence of
//! a key is replaced, including occurrences the detector never looked at.
//! All keys are searched in one leftmost-longest pass over the input, so an
//! inserted replacement is never matched again.

use ahash::AHashSet;
use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{AntimatError, Result};

/// An insertion-ordered map from matched literal to replacement.
#[derive(Clone, Debug, Default)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
    seen: AHashSet<String>,
}

impl SubstitutionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        SubstitutionTable::default()
    }

    /// Map every literal to the same marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use antimat::censor::substitution::SubstitutionTable;
    ///
    /// let table = SubstitutionTable::masking(["кот", "кот", "пёс"], "***");
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.apply("кот и пёс, кот").unwrap(), "*** и ***, ***");
    /// ```
    pub fn masking<I, S>(literals: I, marker: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = SubstitutionTable::new();
        for literal in literals {
            table.insert(literal, marker);
        }
        table
    }

    /// Map every literal to itself surrounded by `prefix` and `suffix`.
    pub fn wrapping<I, S>(literals: I, prefix: &str, suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = SubstitutionTable::new();
        for literal in literals {
            let literal = literal.into();
            let wrapped = format!("{prefix}{literal}{suffix}");
            table.insert(literal, wrapped);
        }
        table
    }

    /// Add an entry. The first replacement registered for a literal wins and
    /// empty literals are ignored. Returns `true` if the entry was added.
    pub fn insert<K, V>(&mut self, literal: K, replacement: V) -> bool
    where
        K: Into<String>,
        V: Into<String>,
    {
        let literal = literal.into();
        if literal.is_empty() || !self.seen.insert(literal.clone()) {
            return false;
        }
        self.entries.push((literal, replacement.into()));
        true
    }

    /// Number of distinct literals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a literal has an entry.
    pub fn contains(&self, literal: &str) -> bool {
        self.seen.contains(literal)
    }

    /// Iterate over `(literal, replacement)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every occurrence of every key in `text`.
    ///
    /// Where keys overlap, the leftmost occurrence wins, and among keys
    /// starting at the same position the longest one.
    pub fn apply(&self, text: &str) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(text.to_owned());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(self.entries.iter().map(|(literal, _)| literal))
            .map_err(|e| AntimatError::Anyhow(anyhow::Error::from(e)))?;

        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for m in ac.find_iter(text) {
            output.push_str(&text[last..m.start()]);
            output.push_str(&self.entries[m.pattern().as_usize()].1);
            last = m.end();
        }
        output.push_str(&text[last..]);
        Ok(output)
    }
}
