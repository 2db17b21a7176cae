//! Integration tests for running both engines together.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use antimat::censor::combined::CombinedCensor;
use antimat::censor::{Censor, DEFAULT_MARKER, MatchKind, Wrap, replace_all_parallel, test_all_parallel};
use antimat::config::{CensorConfig, EngineKind};
use antimat::error::Result;
use antimat::fuzzy::FuzzyCensor;
use antimat::lexicon::provider::{
    CachedLexiconProvider, FileLexiconProvider, LexiconProvider, StaticLexiconProvider,
};
use antimat::pattern::{self, PatternFamily};
use tempfile::{NamedTempFile, TempDir};

fn dual_engine() -> Result<CombinedCensor> {
    let fuzzy = FuzzyCensor::new(StaticLexiconProvider::from_words(["пример"])?);
    let pattern = pattern::builtin(PatternFamily::SpacedLetters)?;
    CombinedCensor::new(vec![Box::new(pattern), Box::new(fuzzy)])
}

#[test]
fn test_dual_engine_union() -> Result<()> {
    let censor = dual_engine()?;
    assert_eq!(censor.engine_names(), ["pattern", "fuzzy"]);

    assert!(censor.test("х у й")?);
    assert!(censor.test("пр1мер")?);
    assert!(!censor.test("обычный текст")?);

    let found = censor.find("х-у-й и пр1мер")?;
    assert!(matches!(found[0].kind, MatchKind::Pattern { .. }));
    assert!(found.iter().any(|m| m.text == "пр1мер"
        && matches!(m.kind, MatchKind::Fuzzy { distance: 1, .. })));

    Ok(())
}

#[test]
fn test_dual_engine_replace_and_wrap() -> Result<()> {
    let censor = dual_engine()?;
    assert_eq!(
        censor.replace("х-у-й и пр1мер", DEFAULT_MARKER)?,
        "[censored] и [censored]"
    );
    assert_eq!(
        censor.wrap("х-у-й и пр1мер", &Wrap::new("<", ">"))?,
        "<х-у-й> и <пр1мер>"
    );

    Ok(())
}

#[test]
fn test_parallel_batches() -> Result<()> {
    let censor = dual_engine()?;
    let texts: Vec<String> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                format!("строка {i}: пр1мер")
            } else {
                format!("строка {i}")
            }
        })
        .collect();

    let verdicts = test_all_parallel(&censor, &texts)?;
    let masked = replace_all_parallel(&censor, &texts, "#")?;

    for (i, (verdict, line)) in verdicts.iter().zip(&masked).enumerate() {
        assert_eq!(*verdict, i % 2 == 0);
        if i % 2 == 0 {
            assert_eq!(line, &format!("строка {i}: #"));
        } else {
            assert_eq!(line, &texts[i]);
        }
    }

    Ok(())
}

#[test]
fn test_file_provider_sees_updates_and_cache_does_not() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("words.txt");
    fs::write(&path, "пример\n")?;

    let file = Arc::new(FileLexiconProvider::new(&path));
    let cached = CachedLexiconProvider::new(Arc::clone(&file));
    assert_eq!(cached.canonical_words()?.len(), 1);

    fs::write(&path, "пример\nслово\n")?;
    assert_eq!(file.canonical_words()?.len(), 2);
    assert_eq!(cached.canonical_words()?.len(), 1);

    cached.invalidate();
    assert_eq!(cached.canonical_words()?.len(), 2);

    let censor = FuzzyCensor::new(file);
    assert!(censor.test("слов0")?);

    Ok(())
}

#[test]
fn test_config_file_builds_dual_engine() -> Result<()> {
    let mut lexicon = NamedTempFile::new()?;
    writeln!(lexicon, "# roots\nпример")?;

    let mut config_file = NamedTempFile::new()?;
    let config_json = serde_json::json!({
        "engine": "both",
        "marker": "***",
        "lexicon": lexicon.path(),
        "pattern": { "family": "combined" }
    });
    write!(config_file, "{config_json}")?;

    let config = CensorConfig::load(config_file.path())?;
    assert_eq!(config.engine, EngineKind::Both);

    let censor = config.build_censor()?;
    assert_eq!(
        censor.replace("пр1мер, мудак", &config.marker)?,
        "***, ***"
    );

    Ok(())
}
