// bleuper-ngram/src/precision.rs
//! Clipped ("modified") n-gram precision kept as an exact fraction.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use crate::ngram::{total_count, NgramCounts};

/// An exact `numerator / denominator` precision value.
///
/// The denominator may be zero when the candidate is shorter than the order;
/// such a fraction evaluates to `0.0` rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fraction {
    pub numerator: usize,
    pub denominator: usize,
}

impl Fraction {
    pub fn new(numerator: usize, denominator: usize) -> Self {
        Self { numerator, denominator }
    }

    /// True when no candidate window was credited.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Floating-point value; `0.0` for a zero denominator.
    pub fn value(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Computes the clipped precision of one order.
///
/// Each distinct candidate window is credited `min(candidate count, max count
/// in any single reference)` times; the denominator is the candidate's total
/// window count.
pub fn modified_precision<'a, I>(candidate: &NgramCounts, references: I) -> Fraction
where
    I: IntoIterator<Item = &'a NgramCounts>,
{
    let references: Vec<&NgramCounts> = references.into_iter().collect();

    let numerator = candidate
        .iter()
        .map(|(gram, &count)| {
            let max_ref = references
                .iter()
                .filter_map(|r| r.get(gram))
                .copied()
                .max()
                .unwrap_or(0);
            count.min(max_ref)
        })
        .sum();

    Fraction::new(numerator, total_count(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::{count_ngrams, ngrams};
    use alloc::string::{String, ToString};

    fn counts(text: &str, n: usize) -> NgramCounts {
        let tokens: Vec<String> = text.split_whitespace().map(|t| t.to_string()).collect();
        count_ngrams(&ngrams(&tokens, n))
    }

    #[test]
    fn test_clipping_against_single_reference() {
        let cand = counts("the the the the the the the", 1);
        let refs = [counts("the cat is on the mat", 1), counts("there is a cat on the mat", 1)];
        // "the" appears at most twice in a single reference.
        assert_eq!(modified_precision(&cand, refs.iter()), Fraction::new(2, 7));
    }

    #[test]
    fn test_clipping_uses_best_reference_not_sum() {
        let cand = counts("a a a", 1);
        let refs = [counts("a b", 1), counts("a c", 1)];
        assert_eq!(modified_precision(&cand, &refs), Fraction::new(1, 3));
    }

    #[test]
    fn test_zero_denominator_is_not_an_error() {
        let cand = counts("short", 2);
        let refs = [counts("a much longer reference", 2)];
        let p = modified_precision(&cand, &refs);
        assert_eq!(p, Fraction::new(0, 0));
        assert!(p.is_zero());
        assert_eq!(p.value(), 0.0);
    }

    #[test]
    fn test_fraction_display_and_value() {
        let p = Fraction::new(4, 5);
        assert_eq!(p.to_string(), "4/5");
        assert!((p.value() - 0.8).abs() < 1e-12);
    }
}
