//! Per-order weight configuration.
//!
//! License: MIT

use std::collections::BTreeMap;

use bleuper_ngram::MAX_ORDER;
use log::debug;

use crate::errors::{BleuError, Result};

/// Weights at or below this value are treated as absent, and the weight sum
/// may differ from `1.0` by at most this much.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// A validated mapping from n-gram order (1..=4) to its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    weights: BTreeMap<usize, f64>,
}

impl Weights {
    /// Validates `(order, weight)` pairs.
    ///
    /// Fails on orders outside `1..=4`, negative weights, or a sum further
    /// than `WEIGHT_EPSILON` from `1.0`.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let weights: BTreeMap<usize, f64> = pairs.into_iter().collect();

        if let Some(&order) = weights.keys().find(|&&n| n == 0 || n > MAX_ORDER) {
            return Err(BleuError::UnsupportedOrder(order));
        }

        if let Some((&order, &weight)) = weights.iter().find(|(_, w)| **w < 0.0 || w.is_nan()) {
            return Err(BleuError::NegativeWeight { order, weight });
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(BleuError::WeightSum(sum));
        }

        debug!("Validated weights {:?} (sum {})", weights, sum);
        Ok(Self { weights })
    }

    /// Validates an order-to-weight map.
    pub fn from_map(map: &BTreeMap<usize, f64>) -> Result<Self> {
        Self::from_pairs(map.iter().map(|(&n, &w)| (n, w)))
    }

    /// Treats `slice[i]` as the weight of order `i + 1`.
    pub fn from_slice(slice: &[f64]) -> Result<Self> {
        Self::from_pairs(slice.iter().enumerate().map(|(i, &w)| (i + 1, w)))
    }

    /// Equal weights for orders `1..=max_order`.
    pub fn uniform(max_order: usize) -> Result<Self> {
        if max_order == 0 || max_order > MAX_ORDER {
            return Err(BleuError::UnsupportedOrder(max_order));
        }
        let w = 1.0 / max_order as f64;
        Self::from_pairs((1..=max_order).map(|n| (n, w)))
    }

    /// The configured weight of `order`, active or not.
    pub fn get(&self, order: usize) -> Option<f64> {
        self.weights.get(&order).copied()
    }

    /// Orders whose weight exceeds `WEIGHT_EPSILON`, ascending, with their weights.
    pub fn active(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights
            .iter()
            .filter(|&(_, &w)| w > WEIGHT_EPSILON)
            .map(|(&n, &w)| (n, w))
    }

    pub fn active_orders(&self) -> Vec<usize> {
        self.active().map(|(n, _)| n).collect()
    }

    /// A copy holding only the active orders.
    pub fn to_active(&self) -> Self {
        Self { weights: self.active().collect() }
    }

    pub fn as_map(&self) -> &BTreeMap<usize, f64> {
        &self.weights
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            weights: (1..=MAX_ORDER).map(|n| (n, 0.25)).collect(),
        }
    }
}

impl TryFrom<&[f64]> for Weights {
    type Error = BleuError;

    fn try_from(slice: &[f64]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl TryFrom<BTreeMap<usize, f64>> for Weights {
    type Error = BleuError;

    fn try_from(map: BTreeMap<usize, f64>) -> Result<Self> {
        Self::from_map(&map)
    }
}
