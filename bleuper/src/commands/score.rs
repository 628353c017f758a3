//! `score` command: sentence-level BLEU for each candidate line.

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use bleuper_core::smoothing::{DEFAULT_EPSILON, DEFAULT_K};
use bleuper_core::{merge_config, BleuScorer, ScorerConfig, ScorerOverrides, SmoothingConfig};

use crate::cli::{ScoreCommand, SmoothingMethod};

/// Whitespace tokenization used for references and candidates alike.
fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

fn read_lines(path: &Path, what: &str) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    Ok(non_blank_lines(&text).map(str::to_owned).collect())
}

/// Builds the scorer configuration: embedded defaults, then `--config`, then flags.
pub fn resolve_config(cmd: &ScoreCommand, quiet: bool) -> Result<ScorerConfig> {
    let user = match &cmd.config {
        Some(path) => Some(ScorerOverrides::load_from_file(path)?),
        None => None,
    };
    let mut config = merge_config(ScorerConfig::load_default()?, user);

    if !cmd.weights.is_empty() {
        config.weights = cmd.weights.iter().enumerate().map(|(i, &w)| (i + 1, w)).collect();
    }
    if let Some(min_references) = cmd.min_references {
        config.min_references = min_references;
    }
    if quiet {
        config.suppress_warnings = true;
    }
    config.smoothing = resolve_smoothing(config.smoothing, cmd);

    debug!("Resolved scorer configuration: {:?}", config);
    config.validate().context("Invalid scorer configuration")?;
    Ok(config)
}

fn resolve_smoothing(current: Option<SmoothingConfig>, cmd: &ScoreCommand) -> Option<SmoothingConfig> {
    let epsilon = cmd.epsilon.unwrap_or(DEFAULT_EPSILON);
    let k = cmd.k.unwrap_or(DEFAULT_K);

    match cmd.smoothing {
        Some(SmoothingMethod::None) => None,
        Some(SmoothingMethod::AdditiveEpsilon) => Some(SmoothingConfig::AdditiveEpsilon { epsilon }),
        Some(SmoothingMethod::AddOne) => Some(SmoothingConfig::AddOneExceptUnigram),
        Some(SmoothingMethod::Exponential) => Some(SmoothingConfig::ExponentialDecay),
        Some(SmoothingMethod::LengthRatio) => Some(SmoothingConfig::LengthRatioDecay { k }),
        // No method flag: parameters refine whatever the config file selected.
        None => match current {
            Some(SmoothingConfig::AdditiveEpsilon { epsilon: configured }) => Some(SmoothingConfig::AdditiveEpsilon {
                epsilon: cmd.epsilon.unwrap_or(configured),
            }),
            Some(SmoothingConfig::LengthRatioDecay { k: configured }) => Some(SmoothingConfig::LengthRatioDecay {
                k: cmd.k.unwrap_or(configured),
            }),
            other => {
                if cmd.epsilon.is_some() || cmd.k.is_some() {
                    warn!("--epsilon/--k given without a matching --smoothing method; ignoring.");
                }
                other
            }
        },
    }
}

/// Collects references from `--reference` flags and `--reference-file`.
pub fn load_references(cmd: &ScoreCommand) -> Result<Vec<String>> {
    let mut references: Vec<String> = cmd
        .references
        .iter()
        .filter(|r| !r.trim().is_empty())
        .cloned()
        .collect();
    if let Some(path) = &cmd.reference_file {
        references.extend(read_lines(path, "reference")?);
    }
    Ok(references)
}

/// Collects candidates from `--candidate`, else `--input-file`, else `input`.
pub fn load_candidates<R: BufRead>(cmd: &ScoreCommand, input: R) -> Result<Vec<String>> {
    if let Some(candidate) = &cmd.candidate {
        return Ok(vec![candidate.clone()]);
    }
    if let Some(path) = &cmd.input_file {
        return read_lines(path, "input");
    }

    let mut candidates = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read candidates from stdin")?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

/// The main operation runner for `bleuper score`.
///
/// Each candidate is scored independently and written to `out` as
/// `BLEU = 0.632456`, or as a single-line JSON report with `--json`.
pub fn run_score<R: BufRead, W: Write>(cmd: &ScoreCommand, quiet: bool, input: R, out: &mut W) -> Result<()> {
    info!("Starting score operation.");

    let config = resolve_config(cmd, quiet)?;
    let references = load_references(cmd)?;
    let reference_tokens: Vec<Vec<&str>> = references.iter().map(|r| tokenize(r)).collect();
    let scorer = BleuScorer::with_config(&reference_tokens, &config).context("Failed to build BLEU scorer")?;

    let candidates = load_candidates(cmd, input)?;
    if candidates.is_empty() {
        bail!("No candidate sentences to score");
    }
    debug!("Scoring {} candidate(s) against {} reference(s)", candidates.len(), references.len());

    for candidate in &candidates {
        let report = scorer
            .score_report(&tokenize(candidate))
            .with_context(|| format!("Failed to score candidate '{}'", candidate))?;
        if cmd.json {
            let line = serde_json::to_string(&report).context("Failed to serialize score report")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "BLEU = {:.6}", report.score)?;
        }
    }
    out.flush()?;

    info!("Score operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn love_command() -> ScoreCommand {
        ScoreCommand {
            references: vec![
                "love can always find a way".to_string(),
                "love makes anything possible".to_string(),
            ],
            ..Default::default()
        }
    }

    fn run(cmd: &ScoreCommand, stdin: &str) -> Result<String> {
        let mut out = Vec::new();
        run_score(cmd, true, Cursor::new(stdin), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_scores_each_stdin_line() -> Result<()> {
        let cmd = ScoreCommand {
            weights: vec![0.5, 0.5],
            ..love_command()
        };
        let output = run(&cmd, "love can make anything possible\n\nthe love can always do\n")?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "BLEU = 0.632456");
        Ok(())
    }

    #[test]
    fn test_candidate_flag_wins_over_stdin() -> Result<()> {
        let cmd = ScoreCommand {
            candidate: Some("the love can always do".to_string()),
            ..love_command()
        };
        assert_eq!(run(&cmd, "ignored line\n")?, "BLEU = 0.000000\n");
        Ok(())
    }

    #[test]
    fn test_smoothing_flag_overrides_config() -> Result<()> {
        let cmd = ScoreCommand {
            smoothing: Some(SmoothingMethod::AdditiveEpsilon),
            epsilon: Some(0.1),
            ..love_command()
        };
        let config = resolve_config(&cmd, false)?;
        assert_eq!(config.smoothing, Some(SmoothingConfig::AdditiveEpsilon { epsilon: 0.1 }));
        assert!(!config.suppress_warnings);
        Ok(())
    }

    #[test]
    fn test_smoothing_none_clears_selection() {
        let cmd = ScoreCommand {
            smoothing: Some(SmoothingMethod::None),
            ..love_command()
        };
        assert_eq!(resolve_smoothing(Some(SmoothingConfig::ExponentialDecay), &cmd), None);
    }

    #[test]
    fn test_k_refines_configured_length_ratio() {
        let cmd = ScoreCommand {
            k: Some(2.0),
            ..love_command()
        };
        assert_eq!(
            resolve_smoothing(Some(SmoothingConfig::LengthRatioDecay { k: 5.0 }), &cmd),
            Some(SmoothingConfig::LengthRatioDecay { k: 2.0 })
        );
    }

    #[test]
    fn test_bad_weights_fail_before_scoring() {
        let cmd = ScoreCommand {
            weights: vec![0.5, 0.4],
            ..love_command()
        };
        let err = run(&cmd, "love can\n").unwrap_err();
        assert!(format!("{:#}", err).contains("All weights should sum to 1"));
    }

    #[test]
    fn test_missing_references_fail() {
        let cmd = ScoreCommand {
            candidate: Some("love can".to_string()),
            ..Default::default()
        };
        let err = run(&cmd, "").unwrap_err();
        assert!(format!("{:#}", err).contains("Must pass at least 1 reference sentence(s), got 0"));
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        assert!(run(&love_command(), "\n  \n").is_err());
    }
}
