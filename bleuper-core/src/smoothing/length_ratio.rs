//! Length-ratio decay smoothing.

use bleuper_ngram::Sentence;
use log::debug;

use super::{decay_zero_orders, require_positive, PrecisionMap, SmoothedPrecisions, SmoothingFunction};
use crate::errors::{BleuError, Result};

/// The i-th zero-overlap order (ascending) becomes
/// `ln(candidate_len) / (2^i * k) / denominator`.
///
/// Follows NLTK's "method 4". A `ln(k / len)` factor would turn negative
/// once the candidate is longer than `k`.
///
/// Longer candidates are penalised less for a missing order. A one-token
/// candidate has `ln(1) = 0`, so its zero orders stay at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRatioDecay {
    k: f64,
}

impl LengthRatioDecay {
    pub fn new(k: f64) -> Result<Self> {
        Ok(Self {
            k: require_positive("k", k)?,
        })
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl SmoothingFunction for LengthRatioDecay {
    fn compute(&self, precisions: &PrecisionMap, candidate: &Sentence) -> Result<SmoothedPrecisions> {
        if candidate.is_empty() {
            return Err(BleuError::EmptyCandidate(self.name()));
        }

        let length_factor = (candidate.len() as f64).ln() / self.k;
        debug!("length_ratio_decay: len={} k={} factor={}", candidate.len(), self.k, length_factor);

        Ok(decay_zero_orders(precisions, |step, p| {
            if p.denominator == 0 {
                return 0.0;
            }
            length_factor / 2f64.powi(step as i32) / p.denominator as f64
        }))
    }

    fn name(&self) -> &'static str {
        "length_ratio_decay"
    }
}
