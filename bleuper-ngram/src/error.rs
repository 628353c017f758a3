// bleuper-ngram/src/error.rs
use core::fmt;

/// Errors raised while building n-gram models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramError {
    /// Only orders 1 through `MAX_ORDER` are supported.
    UnsupportedOrder(usize),
}

impl fmt::Display for NgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOrder(n) => {
                write!(f, "Unsupported n-gram order {} (only 1, 2, 3, 4-grams supported)", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NgramError {}
