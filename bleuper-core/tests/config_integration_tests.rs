// bleuper-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use bleuper_core::config::{self, ScorerConfig, ScorerOverrides};
use bleuper_core::{BleuScorer, SmoothingConfig};

fn write_yaml(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_yaml(
        r#"
weights:
  1: 0.5
  2: 0.5
min_references: 2
suppress_warnings: true
smoothing:
  kind: additive_epsilon
  epsilon: 0.01
"#,
    )?;
    let config = ScorerConfig::load_from_file(file.path())?;
    assert_eq!(config.weights.len(), 2);
    assert_eq!(config.min_references, 2);
    assert!(config.suppress_warnings);
    assert_eq!(config.smoothing, Some(SmoothingConfig::AdditiveEpsilon { epsilon: 0.01 }));
    Ok(())
}

#[test]
fn test_load_from_file_fills_defaults() -> Result<()> {
    let file = write_yaml("suppress_warnings: true\n")?;
    let config = ScorerConfig::load_from_file(file.path())?;
    assert_eq!(config.weights, ScorerConfig::default().weights);
    assert_eq!(config.min_references, 1);
    assert_eq!(config.smoothing, None);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_weights() -> Result<()> {
    let file = write_yaml("weights:\n  1: 0.5\n  2: 0.4\n")?;
    let err = ScorerConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("All weights should sum to 1"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_order() -> Result<()> {
    let file = write_yaml("weights:\n  1: 0.5\n  7: 0.5\n")?;
    let err = ScorerConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Only 1, 2, 3, 4-grams supported"));
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = ScorerConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_overrides_merge_onto_defaults() -> Result<()> {
    let file = write_yaml("smoothing:\n  kind: length_ratio_decay\n")?;
    let overrides = ScorerOverrides::load_from_file(file.path())?;
    assert_eq!(overrides.weights, None);

    let merged = config::merge_config(ScorerConfig::load_default()?, Some(overrides));
    assert_eq!(merged.smoothing, Some(SmoothingConfig::LengthRatioDecay { k: 5.0 }));
    assert_eq!(merged.weights.len(), 4);

    let refs = vec![vec!["a", "b", "c", "d"]];
    let scorer = BleuScorer::with_config(&refs, &merged)?;
    assert_eq!(scorer.smoothing().map(|s| s.name()), Some("length_ratio_decay"));
    Ok(())
}
