//! Command line argument parsing for the antimat CLI using clap.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::EngineKind;
use crate::error::Result;
use crate::pattern::PatternFamily;

/// antimat - detect and mask obfuscated profanity in Cyrillic/Latin text
#[derive(Parser, Debug, Clone)]
#[command(name = "antimat")]
#[command(about = "Detect and mask obfuscated profanity in Cyrillic/Latin text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "antimat Contributors")]
#[command(long_about = None)]
pub struct AntimatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AntimatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether the text contains offensive words
    Test(TestArgs),

    /// Mask offensive fragments with a marker
    Replace(ReplaceArgs),

    /// Surround offensive words with markup
    Wrap(WrapArgs),

    /// List every match with its origin
    Scan(ScanArgs),

    /// Validate a lexicon file
    Lexicon(LexiconArgs),
}

/// Where the text to check comes from. Standard input is read when neither
/// option is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to check
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File with the text to check
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read the input text.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return Ok(fs::read_to_string(path)?);
        }
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Engine selection shared by the text commands.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Detection engine: pattern, fuzzy or both
    #[arg(short, long)]
    pub engine: Option<EngineKind>,

    /// Lexicon file for the fuzzy engine
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Pattern family: spaced_letters, roots or combined
    #[arg(long)]
    pub family: Option<PatternFamily>,
}

/// Arguments for testing text
#[derive(Parser, Debug, Clone)]
pub struct TestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Exit with status 2 when offensive text is found
    #[arg(long)]
    pub exit_code: bool,
}

/// Arguments for masking text
#[derive(Parser, Debug, Clone)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Replacement marker (default: [censored])
    #[arg(short, long)]
    pub marker: Option<String>,
}

/// Arguments for wrapping text
#[derive(Parser, Debug, Clone)]
pub struct WrapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Markup inserted before each match
    #[arg(long)]
    pub prefix: Option<String>,

    /// Markup inserted after each match
    #[arg(long)]
    pub suffix: Option<String>,
}

/// Arguments for listing matches
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for lexicon validation
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Lexicon file (one word per line, or a JSON array)
    #[arg(value_name = "LEXICON_FILE")]
    pub path: PathBuf,

    /// Print the canonical words
    #[arg(short, long)]
    pub words: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_command() {
        let args = AntimatArgs::try_parse_from([
            "antimat",
            "test",
            "--text",
            "пр1мер",
            "--engine",
            "fuzzy",
            "--lexicon",
            "words.txt",
            "--exit-code",
        ])
        .unwrap();

        if let Command::Test(test_args) = args.command {
            assert_eq!(test_args.input.text.as_deref(), Some("пр1мер"));
            assert_eq!(test_args.engine.engine, Some(EngineKind::Fuzzy));
            assert_eq!(test_args.engine.lexicon, Some(PathBuf::from("words.txt")));
            assert!(test_args.exit_code);
        } else {
            panic!("Expected Test command");
        }
    }

    #[test]
    fn test_replace_command() {
        let args = AntimatArgs::try_parse_from([
            "antimat",
            "-f",
            "json",
            "--pretty",
            "replace",
            "-i",
            "input.txt",
            "--family",
            "roots",
            "-m",
            "***",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Replace(replace_args) = args.command {
            assert_eq!(replace_args.input.input, Some(PathBuf::from("input.txt")));
            assert_eq!(replace_args.engine.family, Some(PatternFamily::Roots));
            assert_eq!(replace_args.marker.as_deref(), Some("***"));
        } else {
            panic!("Expected Replace command");
        }
    }

    #[test]
    fn test_wrap_command() {
        let args = AntimatArgs::try_parse_from([
            "antimat", "wrap", "-t", "текст", "--prefix", "<b>", "--suffix", "</b>",
        ])
        .unwrap();

        if let Command::Wrap(wrap_args) = args.command {
            assert_eq!(wrap_args.prefix.as_deref(), Some("<b>"));
            assert_eq!(wrap_args.suffix.as_deref(), Some("</b>"));
            assert!(wrap_args.engine.engine.is_none());
        } else {
            panic!("Expected Wrap command");
        }
    }

    #[test]
    fn test_lexicon_command() {
        let args = AntimatArgs::try_parse_from(["antimat", "lexicon", "words.txt", "--words"]).unwrap();

        if let Command::Lexicon(lexicon_args) = args.command {
            assert_eq!(lexicon_args.path, PathBuf::from("words.txt"));
            assert!(lexicon_args.words);
        } else {
            panic!("Expected Lexicon command");
        }
    }

    #[test]
    fn test_text_and_input_conflict() {
        let result = AntimatArgs::try_parse_from([
            "antimat", "scan", "--text", "a", "--input", "b.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result = AntimatArgs::try_parse_from(["antimat", "test", "--engine", "magic"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = AntimatArgs::try_parse_from(["antimat", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = AntimatArgs::try_parse_from(["antimat", "-vvv", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = AntimatArgs::try_parse_from(["antimat", "-q", "-vv", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
