//! errors.rs - Error types for the bleuper-core library.
//!
//! Construction problems (references, orders, weights, smoothing parameters)
//! are configuration errors and are raised before any scoring happens.
//! `EmptyCandidate` is the only error a scoring call can produce.
//!
//! License: MIT

use bleuper_ngram::NgramError;
use thiserror::Error;

/// Every error the `bleuper-core` library reports.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BleuError {
    #[error("Must pass at least {required} reference sentence(s), got {found}")]
    TooFewReferences { found: usize, required: usize },

    #[error("Only 1, 2, 3, 4-grams supported, got order {0}")]
    UnsupportedOrder(usize),

    #[error("Weight for {order}-grams must be non-negative, got {weight}")]
    NegativeWeight { order: usize, weight: f64 },

    #[error("All weights should sum to 1, got {0}")]
    WeightSum(f64),

    #[error("Invalid smoothing parameter: {0}")]
    InvalidSmoothingParameter(String),

    #[error("Smoothing '{0}' requires a non-empty candidate sentence")]
    EmptyCandidate(&'static str),

    #[error(transparent)]
    Ngram(#[from] NgramError),
}

impl BleuError {
    /// True for the errors raised while constructing a scorer or strategy.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::EmptyCandidate(_))
    }
}

/// Result alias used throughout the scoring API.
pub type Result<T> = std::result::Result<T, BleuError>;
