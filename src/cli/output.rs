//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::censor::Match;
use crate::cli::args::{AntimatArgs, OutputFormat};
use crate::error::Result;

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Result structure for the test command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub engine: String,
    pub offensive: bool,
}

/// Result structure for the replace and wrap commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub engine: String,
    pub text: String,
}

/// Result structure for the scan command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResult {
    pub engine: String,
    pub matches: Vec<Match>,
}

/// Result structure for lexicon validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconSummary {
    pub path: String,
    pub word_count: usize,
    pub max_word_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

impl HumanOutput for TestResult {
    fn to_human(&self) -> String {
        if self.offensive {
            "offensive".to_string()
        } else {
            "clean".to_string()
        }
    }
}

impl HumanOutput for TextResult {
    fn to_human(&self) -> String {
        self.text.clone()
    }
}

impl HumanOutput for ScanResult {
    fn to_human(&self) -> String {
        if self.matches.is_empty() {
            return "No matches".to_string();
        }
        let mut lines = vec![format!("Matches ({}):", self.matches.len())];
        for (i, m) in self.matches.iter().enumerate() {
            lines.push(format!("  {}. {m}", i + 1));
        }
        lines.join("\n")
    }
}

impl HumanOutput for LexiconSummary {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Lexicon: {}", self.path),
            format!("Words: {}", self.word_count),
            format!("Longest word: {} characters", self.max_word_len),
        ];
        if let Some(words) = &self.words {
            lines.push(String::new());
            lines.extend(words.iter().cloned());
        }
        lines.join("\n")
    }
}

/// Render a result in the requested format.
pub fn format_result<T: Serialize + HumanOutput>(result: &T, args: &AntimatArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.to_human()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &AntimatArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", format_result(result, args)?);
    Ok(())
}
