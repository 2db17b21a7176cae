//! Tuning knobs of the fuzzy scanner.

use serde::{Deserialize, Serialize};

use crate::error::{AntimatError, Result};

/// How `ratio × word length` becomes an integer edit budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceRounding {
    /// Round down: a 6-letter word at ratio 0.25 tolerates 1 edit.
    #[default]
    Floor,
    /// Round up: a 6-letter word at ratio 0.25 tolerates 2 edits.
    Ceil,
}

/// Which fragment start offsets inside a scanning unit may produce a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Only fragments starting at offset `0..=max_offset` are considered.
    Anchored { max_offset: usize },
    /// Fragments may start anywhere in the unit.
    Anywhere,
    /// Fragments may start anywhere, but each offset past `max_offset` costs
    /// one unit of tolerance.
    Shrinking { max_offset: usize },
}

/// Anchor used by the default policy.
pub const DEFAULT_MAX_OFFSET: usize = 2;

impl Default for OffsetPolicy {
    fn default() -> Self {
        OffsetPolicy::Anchored {
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

impl OffsetPolicy {
    /// Edit budget left for a fragment starting at `offset`, or `None` if the
    /// offset is rejected outright.
    ///
    /// # Examples
    ///
    /// ```
    /// use antimat::fuzzy::config::OffsetPolicy;
    ///
    /// let anchored = OffsetPolicy::Anchored { max_offset: 2 };
    /// assert_eq!(anchored.tolerance_at(2, 1), Some(1));
    /// assert_eq!(anchored.tolerance_at(3, 1), None);
    ///
    /// let shrinking = OffsetPolicy::Shrinking { max_offset: 2 };
    /// assert_eq!(shrinking.tolerance_at(4, 3), Some(1));
    /// assert_eq!(shrinking.tolerance_at(9, 3), Some(0));
    /// ```
    pub fn tolerance_at(&self, offset: usize, tolerance: usize) -> Option<usize> {
        match *self {
            OffsetPolicy::Anchored { max_offset } => (offset <= max_offset).then_some(tolerance),
            OffsetPolicy::Anywhere => Some(tolerance),
            OffsetPolicy::Shrinking { max_offset } => {
                Some(tolerance.saturating_sub(offset.saturating_sub(max_offset)))
            }
        }
    }

    /// Largest offset that can ever be accepted, if bounded.
    pub fn last_offset(&self) -> Option<usize> {
        match *self {
            OffsetPolicy::Anchored { max_offset } => Some(max_offset),
            OffsetPolicy::Anywhere | OffsetPolicy::Shrinking { .. } => None,
        }
    }
}

/// Configuration for the fuzzy scanner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Edit budget as a fraction of the lexicon word's length, in `(0, 1]`.
    pub tolerance_ratio: f64,
    /// Rounding of the edit budget.
    pub rounding: ToleranceRounding,
    /// Accepted fragment start offsets.
    pub offset_policy: OffsetPolicy,
    /// Words longer than the unit by more than this many characters are skipped.
    pub length_slack: usize,
    /// Compare fragments case-insensitively.
    pub fold_case: bool,
    /// Scanning units longer than this many characters are truncated.
    pub max_unit_len: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            tolerance_ratio: 0.25,
            rounding: ToleranceRounding::Floor,
            offset_policy: OffsetPolicy::default(),
            length_slack: 2,
            fold_case: true,
            max_unit_len: 256,
        }
    }
}

impl FuzzyConfig {
    /// Edit budget for a lexicon word of `word_len` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use antimat::fuzzy::config::{FuzzyConfig, ToleranceRounding};
    ///
    /// let config = FuzzyConfig::default();
    /// assert_eq!(config.tolerance(3), 0);
    /// assert_eq!(config.tolerance(4), 1);
    /// assert_eq!(config.tolerance(6), 1);
    /// assert_eq!(config.tolerance(8), 2);
    ///
    /// let ceil = FuzzyConfig { rounding: ToleranceRounding::Ceil, ..FuzzyConfig::default() };
    /// assert_eq!(ceil.tolerance(6), 2);
    /// ```
    pub fn tolerance(&self, word_len: usize) -> usize {
        let budget = self.tolerance_ratio * word_len as f64;
        match self.rounding {
            ToleranceRounding::Floor => budget.floor() as usize,
            ToleranceRounding::Ceil => budget.ceil() as usize,
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance_ratio > 0.0 && self.tolerance_ratio <= 1.0) {
            return Err(AntimatError::config(format!(
                "tolerance_ratio must be in (0, 1], got {}",
                self.tolerance_ratio
            )));
        }
        if self.max_unit_len == 0 {
            return Err(AntimatError::config("max_unit_len must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances() {
        let config = FuzzyConfig::default();
        let budgets: Vec<usize> = (1..=9).map(|len| config.tolerance(len)).collect();
        assert_eq!(budgets, [0, 0, 0, 1, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn test_ceil_tolerances() {
        let config = FuzzyConfig {
            rounding: ToleranceRounding::Ceil,
            ..FuzzyConfig::default()
        };
        let budgets: Vec<usize> = (1..=9).map(|len| config.tolerance(len)).collect();
        assert_eq!(budgets, [1, 1, 1, 1, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn test_offset_policies() {
        let anywhere = OffsetPolicy::Anywhere;
        assert_eq!(anywhere.tolerance_at(100, 2), Some(2));
        assert_eq!(anywhere.last_offset(), None);

        let anchored = OffsetPolicy::default();
        assert_eq!(anchored.tolerance_at(0, 2), Some(2));
        assert_eq!(anchored.tolerance_at(3, 2), None);
        assert_eq!(anchored.last_offset(), Some(2));

        let shrinking = OffsetPolicy::Shrinking { max_offset: 0 };
        assert_eq!(shrinking.tolerance_at(0, 2), Some(2));
        assert_eq!(shrinking.tolerance_at(1, 2), Some(1));
        assert_eq!(shrinking.tolerance_at(5, 2), Some(0));
    }

    #[test]
    fn test_validate() {
        assert!(FuzzyConfig::default().validate().is_ok());

        let zero = FuzzyConfig {
            tolerance_ratio: 0.0,
            ..FuzzyConfig::default()
        };
        assert!(zero.validate().is_err());

        let nan = FuzzyConfig {
            tolerance_ratio: f64::NAN,
            ..FuzzyConfig::default()
        };
        assert!(nan.validate().is_err());

        let no_units = FuzzyConfig {
            max_unit_len: 0,
            ..FuzzyConfig::default()
        };
        assert!(no_units.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip_of_policy() {
        let config: FuzzyConfig =
            serde_json::from_str(r#"{"offset_policy": {"shrinking": {"max_offset": 1}}, "rounding": "ceil"}"#)
                .unwrap();
        assert_eq!(config.offset_policy, OffsetPolicy::Shrinking { max_offset: 1 });
        assert_eq!(config.rounding, ToleranceRounding::Ceil);
        assert_eq!(config.length_slack, 2);

        let anywhere: FuzzyConfig = serde_json::from_str(r#"{"offset_policy": "anywhere"}"#).unwrap();
        assert_eq!(anywhere.offset_policy, OffsetPolicy::Anywhere);
    }
}
