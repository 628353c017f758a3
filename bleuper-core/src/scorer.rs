//! The sentence-level BLEU scorer.
//!
//! A `BleuScorer` owns its reference sentences, the active per-order weights
//! and an optional smoothing strategy. Everything is validated at
//! construction; afterwards the scorer is read-only and can be shared between
//! threads.
//!
//! License: MIT

use bleuper_ngram::{brevity_penalty, modified_precision, weighted_geometric_mean, Sentence};
use log::{debug, warn};

use crate::config::ScorerConfig;
use crate::errors::{BleuError, Result};
use crate::report::{OrderPrecision, ScoreReport};
use crate::smoothing::{PrecisionMap, SmoothedPrecisions, SmoothingFunction};
use crate::weights::Weights;

/// Minimum number of references accepted by `BleuScorer::new`.
pub const DEFAULT_MIN_REFERENCES: usize = 1;

/// Scores candidate token sequences against a fixed set of references.
#[derive(Debug)]
pub struct BleuScorer {
    references: Vec<Sentence>,
    weights: Weights,
    orders: Vec<usize>,
    suppress_warnings: bool,
    smoothing: Option<Box<dyn SmoothingFunction>>,
}

impl BleuScorer {
    /// Builds a scorer requiring at least `DEFAULT_MIN_REFERENCES` references.
    ///
    /// # Arguments
    /// * `references` - Token lists of the reference translations.
    /// * `weights` - Validated per-order weights; only active orders are kept.
    /// * `suppress_warnings` - Silences the zero-overlap warning.
    pub fn new<S: AsRef<str>>(references: &[Vec<S>], weights: Weights, suppress_warnings: bool) -> Result<Self> {
        Self::build(references, weights, suppress_warnings, DEFAULT_MIN_REFERENCES)
    }

    /// Builds a scorer from a configuration: weights, reference minimum,
    /// warning flag and smoothing selection all come from `config`.
    pub fn with_config<S: AsRef<str>>(references: &[Vec<S>], config: &ScorerConfig) -> Result<Self> {
        let weights = config.weights()?;
        let scorer = Self::build(references, weights, config.suppress_warnings, config.min_references)?;
        match &config.smoothing {
            Some(smoothing) => Ok(scorer.with_smoothing(smoothing.build()?)),
            None => Ok(scorer),
        }
    }

    fn build<S: AsRef<str>>(
        references: &[Vec<S>],
        weights: Weights,
        suppress_warnings: bool,
        min_references: usize,
    ) -> Result<Self> {
        let required = min_references.max(1);
        if references.len() < required {
            return Err(BleuError::TooFewReferences {
                found: references.len(),
                required,
            });
        }

        let weights = weights.to_active();
        let orders = weights.active_orders();
        let references: Vec<Sentence> = references.iter().map(|r| Sentence::new(r, &orders)).collect();

        debug!(
            "Initializing BleuScorer with {} references, active orders {:?}",
            references.len(),
            orders
        );

        Ok(Self {
            references,
            weights,
            orders,
            suppress_warnings,
            smoothing: None,
        })
    }

    /// Attaches a smoothing strategy used whenever some order has no overlap.
    pub fn with_smoothing(mut self, smoothing: Box<dyn SmoothingFunction>) -> Self {
        debug!("BleuScorer smoothing set to '{}'", smoothing.name());
        self.smoothing = Some(smoothing);
        self
    }

    pub fn references(&self) -> &[Sentence] {
        &self.references
    }

    /// Active weights, ascending by order.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    pub fn smoothing(&self) -> Option<&dyn SmoothingFunction> {
        self.smoothing.as_deref()
    }

    /// The reference whose length is closest to `candidate`; ties go to the shorter one.
    pub fn find_closest_ref(&self, candidate: &Sentence) -> Option<&Sentence> {
        let target = candidate.len();
        self.references
            .iter()
            .min_by_key(|r| (r.len().abs_diff(target), r.len()))
    }

    /// Clipped precision of every active order.
    pub fn modified_precisions(&self, candidate: &Sentence) -> PrecisionMap {
        self.orders
            .iter()
            .map(|&n| {
                let precision = match candidate.counts(n) {
                    Some(counts) => modified_precision(counts, self.references.iter().filter_map(|r| r.counts(n))),
                    None => Default::default(),
                };
                debug!("{}-gram precision: {}", n, precision);
                (n, precision)
            })
            .collect()
    }

    /// Computes the BLEU score of `candidate`.
    pub fn compute_score<S: AsRef<str>>(&self, candidate: &[S]) -> Result<f64> {
        Ok(self.score_report(candidate)?.score)
    }

    /// Computes the BLEU score of `candidate` together with its breakdown.
    ///
    /// Without smoothing, any active order with zero clipped matches forces the
    /// score to exactly `0.0`. With smoothing, the strategy replaces the raw
    /// fractions whenever such an order exists.
    pub fn score_report<S: AsRef<str>>(&self, candidate: &[S]) -> Result<ScoreReport> {
        let candidate = Sentence::new(candidate, &self.orders);
        let precisions = self.modified_precisions(&candidate);

        let zero_overlap_orders: Vec<usize> = precisions
            .iter()
            .filter(|(_, p)| p.is_zero())
            .map(|(&n, _)| n)
            .collect();

        let closest_ref_length = self
            .find_closest_ref(&candidate)
            .map(Sentence::len)
            .ok_or(BleuError::TooFewReferences { found: 0, required: 1 })?;
        let bp = brevity_penalty(candidate.len(), closest_ref_length);

        let smoothing = match &self.smoothing {
            Some(function) if !zero_overlap_orders.is_empty() => Some(&**function),
            _ => None,
        };

        let values: SmoothedPrecisions = match smoothing {
            Some(function) => {
                debug!(
                    "Applying '{}' smoothing for zero-overlap orders {:?}",
                    function.name(),
                    zero_overlap_orders
                );
                function.compute(&precisions, &candidate)?
            }
            None => precisions.iter().map(|(&n, p)| (n, p.value())).collect(),
        };

        let score = if smoothing.is_none() && !zero_overlap_orders.is_empty() {
            if !self.suppress_warnings {
                for n in &zero_overlap_orders {
                    warn!("No {}-gram overlaps found. No contribution towards score.", n);
                }
            }
            0.0
        } else {
            let mean = weighted_geometric_mean(
                self.weights
                    .active()
                    .map(|(n, w)| (w, values.get(&n).copied().unwrap_or(0.0))),
            );
            bp * mean
        };

        let precisions = self
            .weights
            .active()
            .map(|(n, weight)| {
                let raw = precisions.get(&n).copied().unwrap_or_default();
                OrderPrecision {
                    order: n,
                    weight,
                    numerator: raw.numerator,
                    denominator: raw.denominator,
                    value: values.get(&n).copied().unwrap_or(0.0),
                }
            })
            .collect();

        Ok(ScoreReport {
            candidate: candidate.text(),
            score,
            brevity_penalty: bp,
            candidate_length: candidate.len(),
            closest_ref_length,
            precisions,
            zero_overlap_orders,
            smoothing: smoothing.map(|f| f.name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::{AddOneExceptUnigram, ExponentialDecay};
    use bleuper_ngram::Fraction;

    const EPSILON: f64 = 1e-9;

    fn tokens(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    fn love_refs() -> Vec<Vec<&'static str>> {
        vec![
            tokens("love can always find a way"),
            tokens("love makes anything possible"),
        ]
    }

    #[test]
    fn test_requires_a_reference() {
        let empty: Vec<Vec<&str>> = Vec::new();
        let err = BleuScorer::new(&empty, Weights::default(), true).unwrap_err();
        assert_eq!(err, BleuError::TooFewReferences { found: 0, required: 1 });
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_references_use_active_orders_only() {
        let weights = Weights::from_slice(&[0.5, 0.5, 0.0, 0.0]).unwrap();
        let scorer = BleuScorer::new(&love_refs(), weights, true).unwrap();
        assert_eq!(scorer.orders(), &[1, 2]);
        assert!(scorer.references()[0].counts(3).is_none());
        assert_eq!(scorer.weights().get(3), None);
    }

    #[test]
    fn test_closest_ref_tie_prefers_shorter() {
        let scorer = BleuScorer::new(&love_refs(), Weights::default(), true).unwrap();
        let candidate = Sentence::new(&tokens("love can make anything possible"), &[1]);
        assert_eq!(
            scorer.find_closest_ref(&candidate).map(Sentence::text).as_deref(),
            Some("love makes anything possible")
        );
    }

    #[test]
    fn test_no_references_is_an_error_not_a_panic() {
        let scorer = BleuScorer {
            references: Vec::new(),
            weights: Weights::default(),
            orders: vec![1, 2, 3, 4],
            suppress_warnings: true,
            smoothing: None,
        };
        let candidate = Sentence::new(&tokens("love can"), scorer.orders());
        assert!(scorer.find_closest_ref(&candidate).is_none());
        assert_eq!(
            scorer.score_report(&tokens("love can")).unwrap_err(),
            BleuError::TooFewReferences { found: 0, required: 1 }
        );
    }

    #[test]
    fn test_modified_precisions() {
        let weights = Weights::from_slice(&[0.5, 0.5]).unwrap();
        let scorer = BleuScorer::new(&love_refs(), weights, true).unwrap();
        let candidate = Sentence::new(&tokens("love can make anything possible"), scorer.orders());
        let precisions = scorer.modified_precisions(&candidate);
        assert_eq!(precisions[&1], Fraction::new(4, 5));
        assert_eq!(precisions[&2], Fraction::new(2, 4));
    }

    #[test]
    fn test_unigram_bigram_score() {
        let weights = Weights::from_slice(&[0.5, 0.5]).unwrap();
        let scorer = BleuScorer::new(&love_refs(), weights, true).unwrap();
        let score = scorer.compute_score(&tokens("love can make anything possible")).unwrap();
        assert!((score - 0.6324555320336759).abs() < EPSILON);
    }

    #[test]
    fn test_zero_overlap_forces_zero() {
        let scorer = BleuScorer::new(&love_refs(), Weights::default(), true).unwrap();
        let report = scorer.score_report(&tokens("the love can always do")).unwrap();
        assert_eq!(report.score, 0.0);
        assert_eq!(report.zero_overlap_orders, vec![4]);
        assert!(report.is_forced_zero());
    }

    #[test]
    fn test_brevity_penalty_applied() {
        let weights = Weights::from_slice(&[1.0]).unwrap();
        let scorer = BleuScorer::new(&love_refs(), weights, true).unwrap();
        let report = scorer.score_report(&tokens("love can")).unwrap();
        assert_eq!(report.closest_ref_length, 4);
        assert!((report.brevity_penalty - (-1.0f64).exp()).abs() < EPSILON);
        assert!((report.score - (-1.0f64).exp()).abs() < EPSILON);
    }

    #[test]
    fn test_smoothing_only_runs_on_zero_overlap() {
        let weights = Weights::from_slice(&[0.5, 0.5]).unwrap();
        let scorer = BleuScorer::new(&love_refs(), weights, true)
            .unwrap()
            .with_smoothing(Box::new(AddOneExceptUnigram));
        let report = scorer.score_report(&tokens("love can make anything possible")).unwrap();
        assert_eq!(report.smoothing, None);
        assert!((report.score - 0.6324555320336759).abs() < EPSILON);
    }

    #[test]
    fn test_exponential_smoothing_rescues_score() {
        let scorer = BleuScorer::new(&love_refs(), Weights::default(), true)
            .unwrap()
            .with_smoothing(Box::new(ExponentialDecay));
        let report = scorer.score_report(&tokens("the love can always do")).unwrap();
        assert_eq!(report.smoothing, Some("exponential_decay"));
        assert!((report.score - 0.3976353643835253).abs() < EPSILON);
        assert_eq!(report.precisions[3].value, 0.25);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let scorer = BleuScorer::new(&love_refs(), Weights::default(), true).unwrap();
        let empty: [&str; 0] = [];
        let report = scorer.score_report(&empty).unwrap();
        assert_eq!(report.score, 0.0);
        assert_eq!(report.zero_overlap_orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scorer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BleuScorer>();
    }
}
