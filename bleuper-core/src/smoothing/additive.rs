//! Additive-epsilon smoothing.

use bleuper_ngram::Sentence;

use super::{require_positive, PrecisionMap, SmoothedPrecisions, SmoothingFunction};
use crate::errors::Result;

/// Adds `epsilon` to every numerator, zero or not.
///
/// Orders with an empty denominator (candidate shorter than the order) stay at `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditiveEpsilon {
    epsilon: f64,
}

impl AdditiveEpsilon {
    pub fn new(epsilon: f64) -> Result<Self> {
        Ok(Self {
            epsilon: require_positive("epsilon", epsilon)?,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl SmoothingFunction for AdditiveEpsilon {
    fn compute(&self, precisions: &PrecisionMap, _candidate: &Sentence) -> Result<SmoothedPrecisions> {
        Ok(precisions
            .iter()
            .map(|(&n, p)| {
                let value = if p.denominator == 0 {
                    0.0
                } else {
                    (p.numerator as f64 + self.epsilon) / p.denominator as f64
                };
                (n, value)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "additive_epsilon"
    }
}
