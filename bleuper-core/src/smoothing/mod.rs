//! Smoothing strategies for zero-overlap precisions.
//!
//! A BLEU score is a geometric mean, so a single order with no matching
//! n-grams drives the whole score to zero. A `SmoothingFunction` replaces the
//! raw per-order fractions with adjusted values before they are combined.
//!
//! Each strategy lives in its own file and implements the trait:
//!
//! * `additive`: `(numerator + epsilon) / denominator` for every order.
//! * `add_one`: `(numerator + 1) / (denominator + 1)` for every order but 1.
//! * `exponential`: successive zero orders become `1 / (denominator * 2^i)`.
//! * `length_ratio`: successive zero orders are scaled by `ln(len) / (2^i * k)`.
//!
//! License: MIT

use std::collections::BTreeMap;
use std::fmt;

use bleuper_ngram::{Fraction, Sentence};
use serde::{Deserialize, Serialize};

use crate::errors::{BleuError, Result};

pub mod add_one;
pub mod additive;
pub mod exponential;
pub mod length_ratio;

pub use add_one::AddOneExceptUnigram;
pub use additive::AdditiveEpsilon;
pub use exponential::ExponentialDecay;
pub use length_ratio::LengthRatioDecay;

/// Raw clipped precision per active order, ascending by order.
pub type PrecisionMap = BTreeMap<usize, Fraction>;

/// Adjusted precision values per active order.
pub type SmoothedPrecisions = BTreeMap<usize, f64>;

/// Default epsilon for `AdditiveEpsilon`.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Default `k` for `LengthRatioDecay`.
pub const DEFAULT_K: f64 = 5.0;

/// A strategy that adjusts per-order precisions when some order has no overlap.
///
/// Implementations are stateless apart from their construction parameters,
/// so one instance is shared by every scoring call of a scorer.
pub trait SmoothingFunction: fmt::Debug + Send + Sync {
    /// Returns the adjusted value of every order in `precisions`.
    ///
    /// # Arguments
    /// * `precisions` - Exact clipped precision of each active order.
    /// * `candidate` - The sentence being scored; strategies that depend on the
    ///   candidate length read it from here.
    fn compute(&self, precisions: &PrecisionMap, candidate: &Sentence) -> Result<SmoothedPrecisions>;

    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Serializable strategy selection, as found in a scorer configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SmoothingConfig {
    AdditiveEpsilon {
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    AddOneExceptUnigram,
    ExponentialDecay,
    LengthRatioDecay {
        #[serde(default = "default_k")]
        k: f64,
    },
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_k() -> f64 {
    DEFAULT_K
}

impl SmoothingConfig {
    /// Instantiates the selected strategy behind the `SmoothingFunction` trait.
    pub fn build(&self) -> Result<Box<dyn SmoothingFunction>> {
        let function: Box<dyn SmoothingFunction> = match *self {
            Self::AdditiveEpsilon { epsilon } => Box::new(AdditiveEpsilon::new(epsilon)?),
            Self::AddOneExceptUnigram => Box::new(AddOneExceptUnigram),
            Self::ExponentialDecay => Box::new(ExponentialDecay),
            Self::LengthRatioDecay { k } => Box::new(LengthRatioDecay::new(k)?),
        };
        Ok(function)
    }
}

/// Shared check for strictly positive, finite strategy parameters.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BleuError::InvalidSmoothingParameter(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

/// `1 / (denominator * 2^step)`-style decay shared by the cumulative strategies.
///
/// Walks orders in ascending order and hands each zero-numerator entry its
/// 1-based position among zero entries; other entries keep their exact value.
pub(crate) fn decay_zero_orders<F>(precisions: &PrecisionMap, mut on_zero: F) -> SmoothedPrecisions
where
    F: FnMut(u32, &Fraction) -> f64,
{
    let mut step = 1;
    let mut smoothed = SmoothedPrecisions::new();
    for (&n, p) in precisions {
        if p.is_zero() {
            smoothed.insert(n, on_zero(step, p));
            step += 1;
        } else {
            smoothed.insert(n, p.value());
        }
    }
    smoothed
}
