// bleuper-ngram/src/sentence.rs
//! Case-folded token sequences with per-order n-gram multisets.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::NgramError;
use crate::ngram::{count_ngrams, ngrams, Ngram, NgramCounts, MAX_ORDER};

#[derive(Debug, Clone)]
struct OrderModel {
    windows: Vec<Ngram>,
    counts: NgramCounts,
}

/// A lower-cased token sequence together with the n-gram windows of every
/// requested order.
///
/// Orders that were not requested at construction are absent: `ngrams` and
/// `counts` return `None` for them, while a requested order with no windows
/// (the sentence is shorter than `n`) returns an empty collection.
#[derive(Debug, Clone)]
pub struct Sentence {
    tokens: Vec<String>,
    models: BTreeMap<usize, OrderModel>,
}

impl Sentence {
    /// Builds a sentence for orders already known to be in `1..=MAX_ORDER`.
    ///
    /// Order `0` and duplicate orders are skipped.
    pub fn new<S: AsRef<str>>(tokens: &[S], orders: &[usize]) -> Self {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let mut models = BTreeMap::new();

        for &n in orders {
            if n == 0 || models.contains_key(&n) {
                continue;
            }
            let windows = ngrams(&tokens, n);
            let counts = count_ngrams(&windows);
            models.insert(n, OrderModel { windows, counts });
        }

        Self { tokens, models }
    }

    /// Builds a sentence, rejecting any order outside `1..=MAX_ORDER`.
    pub fn try_new<S: AsRef<str>>(tokens: &[S], orders: &[usize]) -> Result<Self, NgramError> {
        if let Some(&bad) = orders.iter().find(|&&n| n == 0 || n > MAX_ORDER) {
            return Err(NgramError::UnsupportedOrder(bad));
        }
        Ok(Self::new(tokens, orders))
    }

    /// The lower-cased tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Requested orders in ascending order.
    pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.models.keys().copied()
    }

    /// Windows of order `n` in left-to-right order, or `None` if `n` was not requested.
    pub fn ngrams(&self, n: usize) -> Option<&[Ngram]> {
        self.models.get(&n).map(|m| m.windows.as_slice())
    }

    /// Count-by-window multiset of order `n`, or `None` if `n` was not requested.
    pub fn counts(&self, n: usize) -> Option<&NgramCounts> {
        self.models.get(&n).map(|m| &m.counts)
    }

    /// Total window count of order `n`; zero for unrequested orders.
    pub fn ngram_total(&self, n: usize) -> usize {
        self.models.get(&n).map_or(0, |m| m.windows.len())
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
