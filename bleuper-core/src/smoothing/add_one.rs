//! Add-one smoothing that leaves unigrams alone.

use bleuper_ngram::Sentence;

use super::{PrecisionMap, SmoothedPrecisions, SmoothingFunction};
use crate::errors::Result;

/// Every order except 1 becomes `(numerator + 1) / (denominator + 1)`.
///
/// Unigram precision anchors vocabulary overlap and is passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOneExceptUnigram;

impl SmoothingFunction for AddOneExceptUnigram {
    fn compute(&self, precisions: &PrecisionMap, _candidate: &Sentence) -> Result<SmoothedPrecisions> {
        Ok(precisions
            .iter()
            .map(|(&n, p)| {
                let value = if n == 1 {
                    p.value()
                } else {
                    (p.numerator + 1) as f64 / (p.denominator + 1) as f64
                };
                (n, value)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "add_one_except_unigram"
    }
}
