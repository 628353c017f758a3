// bleuper-core/src/lib.rs
//! # bleuper Core Library
//!
//! `bleuper-core` computes sentence-level BLEU: the similarity between a
//! candidate token sequence and one or more reference token sequences, as used
//! to evaluate machine-translation and text-generation output.
//!
//! The library is pure and synchronous. A `BleuScorer` is validated once at
//! construction and is then read-only, so it can be shared between threads.
//! Tokenization is the caller's job; tokens are only lower-cased.
//!
//! ## Modules
//!
//! * `weights`: Per-order weights and their validation.
//! * `config`: `ScorerConfig` loading, defaults and merging.
//! * `smoothing`: The `SmoothingFunction` trait and its strategies.
//! * `scorer`: `BleuScorer`, clipped precision, brevity penalty, final score.
//! * `report`: `ScoreReport`, the per-call breakdown.
//! * `headless`: One-shot helpers.
//! * `errors`: `BleuError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use bleuper_core::{BleuScorer, Weights};
//!
//! # fn main() -> Result<(), bleuper_core::BleuError> {
//! let refs = vec![
//!     "love can always find a way".split_whitespace().collect::<Vec<_>>(),
//!     "love makes anything possible".split_whitespace().collect::<Vec<_>>(),
//! ];
//! let weights = Weights::from_slice(&[0.5, 0.5])?;
//! let scorer = BleuScorer::new(&refs, weights, false)?;
//!
//! let candidate: Vec<&str> = "love can make anything possible".split_whitespace().collect();
//! let score = scorer.compute_score(&candidate)?;
//! assert!((score - 0.4f64.sqrt()).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Scoring APIs return `BleuError`; configuration file loading returns
//! `anyhow::Error` with the file path as context.
//!
//! License: MIT

pub mod config;
pub mod errors;
pub mod headless;
pub mod report;
pub mod scorer;
pub mod smoothing;
pub mod weights;

/// Re-exports the configuration types and helpers.
pub use config::{merge_config, ScorerConfig, ScorerOverrides};

/// Re-exports the error type.
pub use errors::BleuError;

/// Re-exports the scorer and its report.
pub use report::{OrderPrecision, ScoreReport};
pub use scorer::{BleuScorer, DEFAULT_MIN_REFERENCES};

/// Re-exports the smoothing trait and strategies.
pub use smoothing::{
    AddOneExceptUnigram, AdditiveEpsilon, ExponentialDecay, LengthRatioDecay, PrecisionMap,
    SmoothedPrecisions, SmoothingConfig, SmoothingFunction,
};

pub use weights::{Weights, WEIGHT_EPSILON};

/// Re-exports the n-gram model so callers need only one dependency.
pub use bleuper_ngram::{Fraction, Ngram, NgramCounts, Sentence, MAX_ORDER};

/// Re-exports the one-shot helpers.
pub use headless::{sentence_bleu, sentence_bleu_str};
