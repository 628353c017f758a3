//! Detailed breakdown of a single scoring call.
//!
//! License: MIT

use serde::Serialize;

/// Precision of one active order, before and after smoothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPrecision {
    pub order: usize,
    pub weight: f64,
    /// Clipped matches.
    pub numerator: usize,
    /// Candidate windows of this order.
    pub denominator: usize,
    /// Value fed to the geometric mean (smoothed when smoothing ran).
    pub value: f64,
}

/// Everything that went into a BLEU score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Lower-cased candidate text.
    pub candidate: String,
    pub score: f64,
    pub brevity_penalty: f64,
    pub candidate_length: usize,
    pub closest_ref_length: usize,
    pub precisions: Vec<OrderPrecision>,
    /// Active orders whose clipped numerator was zero.
    pub zero_overlap_orders: Vec<usize>,
    /// Name of the smoothing strategy, if one was applied.
    pub smoothing: Option<&'static str>,
}

impl ScoreReport {
    /// True when the score was forced to zero by an unsmoothed zero-overlap order.
    pub fn is_forced_zero(&self) -> bool {
        self.smoothing.is_none() && !self.zero_overlap_orders.is_empty()
    }
}
