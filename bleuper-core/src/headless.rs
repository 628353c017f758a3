// File: bleuper-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot scoring without keeping a scorer around.
//!
//! Useful when each candidate comes with its own references; for many
//! candidates against the same references, build a `BleuScorer` once instead.

use crate::errors::Result;
use crate::scorer::BleuScorer;
use crate::smoothing::SmoothingConfig;
use crate::weights::Weights;

/// Scores a single candidate against `references` with optional smoothing.
///
/// Warnings are suppressed; use `BleuScorer` directly to see zero-overlap notices.
///
/// # Arguments
///
/// * `references` - Token lists of the reference translations.
/// * `candidate` - Tokens of the translation being scored.
/// * `weights` - Per-order weights.
/// * `smoothing` - Strategy to apply when some order has no overlap.
pub fn sentence_bleu<S: AsRef<str>, C: AsRef<str>>(
    references: &[Vec<S>],
    candidate: &[C],
    weights: Weights,
    smoothing: Option<SmoothingConfig>,
) -> Result<f64> {
    let mut scorer = BleuScorer::new(references, weights, true)?;
    if let Some(config) = smoothing {
        scorer = scorer.with_smoothing(config.build()?);
    }
    scorer.compute_score(candidate)
}

/// Uniform 4-gram BLEU of whitespace-tokenized strings, without smoothing.
pub fn sentence_bleu_str(references: &[&str], candidate: &str) -> Result<f64> {
    let references: Vec<Vec<&str>> = references.iter().map(|r| r.split_whitespace().collect()).collect();
    let candidate: Vec<&str> = candidate.split_whitespace().collect();
    sentence_bleu(&references, &candidate, Weights::default(), None)
}
