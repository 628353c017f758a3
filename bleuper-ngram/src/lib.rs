// bleuper-ngram/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod brevity;
pub mod error;
pub mod ngram;
pub mod precision;
pub mod sentence;

pub use brevity::{brevity_penalty, closest_ref_length, weighted_geometric_mean};
pub use error::NgramError;
pub use ngram::{count_ngrams, ngrams, Ngram, NgramCounts, MAX_ORDER};
pub use precision::{modified_precision, Fraction};
pub use sentence::Sentence;
