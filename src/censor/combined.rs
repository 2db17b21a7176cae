//! Running several engines side by side.

use log::debug;

use crate::censor::substitution::SubstitutionTable;
use crate::censor::{Censor, Match, Wrap};
use crate::error::{AntimatError, Result};

/// Union of several engines.
///
/// - `find` concatenates every engine's matches, in engine order;
/// - `test` is true as soon as one engine reports a hit;
/// - `replace` feeds the text through each engine's `replace` in turn;
/// - `wrap` builds one table over the union of every engine's wrap targets,
///   so a literal found by two engines is wrapped once.
pub struct CombinedCensor {
    engines: Vec<Box<dyn Censor>>,
}

impl CombinedCensor {
    /// Combine the given engines. At least one engine is required.
    pub fn new(engines: Vec<Box<dyn Censor>>) -> Result<Self> {
        if engines.is_empty() {
            return Err(AntimatError::invalid_argument(
                "a combined censor needs at least one engine",
            ));
        }
        Ok(CombinedCensor { engines })
    }

    /// Add another engine.
    pub fn push(&mut self, engine: Box<dyn Censor>) {
        self.engines.push(engine);
    }

    /// Names of the combined engines, in order.
    pub fn engine_names(&self) -> Vec<&'static str> {
        self.engines.iter().map(|e| e.name()).collect()
    }
}

impl Censor for CombinedCensor {
    fn find(&self, text: &str) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for engine in &self.engines {
            matches.extend(engine.find(text)?);
        }
        Ok(matches)
    }

    fn test(&self, text: &str) -> Result<bool> {
        for engine in &self.engines {
            if engine.test(text)? {
                debug!("combined: '{}' reported a hit", engine.name());
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn replace(&self, text: &str, marker: &str) -> Result<String> {
        let mut output = text.to_owned();
        for engine in &self.engines {
            output = engine.replace(&output, marker)?;
        }
        Ok(output)
    }

    fn wrap_targets(&self, text: &str) -> Result<Vec<String>> {
        let mut targets = Vec::new();
        for engine in &self.engines {
            targets.extend(engine.wrap_targets(text)?);
        }
        Ok(targets)
    }

    fn wrap(&self, text: &str, wrap: &Wrap) -> Result<String> {
        let table = SubstitutionTable::wrapping(self.wrap_targets(text)?, &wrap.prefix, &wrap.suffix);
        table.apply(text)
    }

    fn name(&self) -> &'static str {
        "combined"
    }
}
