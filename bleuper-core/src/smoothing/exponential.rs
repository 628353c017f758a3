//! Exponential-decay smoothing.

use bleuper_ngram::Sentence;

use super::{decay_zero_orders, PrecisionMap, SmoothedPrecisions, SmoothingFunction};
use crate::errors::Result;

/// The i-th zero-overlap order (ascending) becomes `1 / (denominator * 2^i)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExponentialDecay;

impl SmoothingFunction for ExponentialDecay {
    fn compute(&self, precisions: &PrecisionMap, _candidate: &Sentence) -> Result<SmoothedPrecisions> {
        Ok(decay_zero_orders(precisions, |step, p| {
            if p.denominator == 0 {
                return 0.0;
            }
            1.0 / (p.denominator as f64 * 2f64.powi(step as i32))
        }))
    }

    fn name(&self) -> &'static str {
        "exponential_decay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bleuper_ngram::Fraction;

    #[test]
    fn test_successive_zero_orders_decay_harder() {
        let precisions: PrecisionMap = [
            (1, Fraction::new(3, 5)),
            (2, Fraction::new(0, 4)),
            (3, Fraction::new(0, 3)),
            (4, Fraction::new(0, 2)),
        ]
        .into_iter()
        .collect();
        let candidate = Sentence::new(&["x"], &[1]);
        let smoothed = ExponentialDecay.compute(&precisions, &candidate).unwrap();
        assert!((smoothed[&1] - 0.6).abs() < 1e-12);
        assert_eq!(smoothed[&2], 1.0 / 8.0);
        assert_eq!(smoothed[&3], 1.0 / 12.0);
        assert_eq!(smoothed[&4], 1.0 / 16.0);
    }

    #[test]
    fn test_non_zero_orders_pass_through() {
        let precisions: PrecisionMap = [(1, Fraction::new(1, 3)), (2, Fraction::new(1, 2))]
            .into_iter()
            .collect();
        let candidate = Sentence::new(&["x"], &[1]);
        let smoothed = ExponentialDecay.compute(&precisions, &candidate).unwrap();
        assert_eq!(smoothed[&1], 1.0 / 3.0);
        assert_eq!(smoothed[&2], 0.5);
    }
}
