// bleuper-ngram/src/ngram.rs
//! Contiguous token windows and their multisets.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Highest n-gram order the kernel understands.
pub const MAX_ORDER: usize = 4;

/// A window of `n` consecutive tokens, compared by its full token sequence.
pub type Ngram = Vec<String>;

/// Occurrence count for every distinct window of one order.
pub type NgramCounts = BTreeMap<Ngram, usize>;

/// Returns every window of length `n`, left to right.
///
/// A sequence of length `L` yields `max(L - n + 1, 0)` windows; an order of
/// zero yields none.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<Ngram> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(<[String]>::to_vec).collect()
}

/// Folds a list of windows into a count-by-window multiset.
pub fn count_ngrams(windows: &[Ngram]) -> NgramCounts {
    let mut counts = NgramCounts::new();
    for window in windows {
        *counts.entry(window.clone()).or_insert(0) += 1;
    }
    counts
}

/// Total number of windows recorded in a multiset.
pub fn total_count(counts: &NgramCounts) -> usize {
    counts.values().sum()
}
