//! Command implementations for the antimat CLI.

use log::info;

use crate::censor::{Censor, Wrap};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::CensorConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Exit status of a successful run.
pub const EXIT_OK: i32 = 0;

/// Exit status of `test --exit-code` when offensive text is found.
pub const EXIT_OFFENSIVE: i32 = 2;

/// Execute a CLI command and return the process exit status.
pub fn execute_command(args: AntimatArgs) -> Result<i32> {
    match &args.command {
        Command::Test(test_args) => test_text(test_args, &args),
        Command::Replace(replace_args) => replace_text(replace_args, &args),
        Command::Wrap(wrap_args) => wrap_text(wrap_args, &args),
        Command::Scan(scan_args) => scan_text(scan_args, &args),
        Command::Lexicon(lexicon_args) => check_lexicon(lexicon_args, &args),
    }
}

/// Merge the configuration file (if any) with command line overrides.
pub fn resolve_config(engine: &EngineArgs) -> Result<CensorConfig> {
    let mut config = match &engine.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            CensorConfig::load(path)?
        }
        None => CensorConfig::default(),
    };

    if let Some(kind) = engine.engine {
        config.engine = kind;
    }
    if let Some(path) = &engine.lexicon {
        config.lexicon = Some(path.clone());
    }
    if let Some(family) = engine.family {
        config.pattern.family = family;
    }

    config.validate()?;
    Ok(config)
}

fn build(engine: &EngineArgs) -> Result<(CensorConfig, Box<dyn Censor>)> {
    let config = resolve_config(engine)?;
    let censor = config.build_censor()?;
    info!("Using '{}' engine", censor.name());
    Ok((config, censor))
}

/// Check text.
fn test_text(args: &TestArgs, cli_args: &AntimatArgs) -> Result<i32> {
    let (config, censor) = build(&args.engine)?;
    let text = args.input.read()?;
    let offensive = censor.test(&text)?;

    output_result(
        "Test finished",
        &TestResult {
            engine: config.engine.to_string(),
            offensive,
        },
        cli_args,
    )?;

    if args.exit_code && offensive {
        Ok(EXIT_OFFENSIVE)
    } else {
        Ok(EXIT_OK)
    }
}

/// Mask text.
fn replace_text(args: &ReplaceArgs, cli_args: &AntimatArgs) -> Result<i32> {
    let (config, censor) = build(&args.engine)?;
    let text = args.input.read()?;
    let marker = args.marker.as_deref().unwrap_or(&config.marker);

    output_result(
        "Replacement finished",
        &TextResult {
            engine: config.engine.to_string(),
            text: censor.replace(&text, marker)?,
        },
        cli_args,
    )?;
    Ok(EXIT_OK)
}

/// Wrap text.
fn wrap_text(args: &WrapArgs, cli_args: &AntimatArgs) -> Result<i32> {
    let (config, censor) = build(&args.engine)?;
    let text = args.input.read()?;
    let wrap = Wrap::new(
        args.prefix.clone().unwrap_or_else(|| config.wrap.prefix.clone()),
        args.suffix.clone().unwrap_or_else(|| config.wrap.suffix.clone()),
    );

    output_result(
        "Wrapping finished",
        &TextResult {
            engine: config.engine.to_string(),
            text: censor.wrap(&text, &wrap)?,
        },
        cli_args,
    )?;
    Ok(EXIT_OK)
}

/// List matches.
fn scan_text(args: &ScanArgs, cli_args: &AntimatArgs) -> Result<i32> {
    let (config, censor) = build(&args.engine)?;
    let text = args.input.read()?;

    output_result(
        "Scan finished",
        &ScanResult {
            engine: config.engine.to_string(),
            matches: censor.find(&text)?,
        },
        cli_args,
    )?;
    Ok(EXIT_OK)
}

/// Validate a lexicon file.
fn check_lexicon(args: &LexiconArgs, cli_args: &AntimatArgs) -> Result<i32> {
    if cli_args.verbosity() > 1 {
        println!("Checking lexicon: {}", args.path.display());
    }

    let lexicon = Lexicon::load_from_file(&args.path)?;
    output_result(
        "Lexicon is valid",
        &LexiconSummary {
            path: args.path.display().to_string(),
            word_count: lexicon.len(),
            max_word_len: lexicon.max_word_len(),
            words: args
                .words
                .then(|| lexicon.words().map(str::to_string).collect()),
        },
        cli_args,
    )?;
    Ok(EXIT_OK)
}
