// bleuper-ngram/src/brevity.rs
use libm::{exp, log};

/// Picks the reference length closest to `candidate_len`.
///
/// Equidistant lengths resolve to the shorter one. Returns `None` when there
/// are no references.
pub fn closest_ref_length<I>(candidate_len: usize, reference_lens: I) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    reference_lens
        .into_iter()
        .min_by_key(|&len| (len.abs_diff(candidate_len), len))
}

/// `1.0` when the candidate is at least as long as the reference, otherwise
/// `exp(1 - r / c)`.
pub fn brevity_penalty(candidate_len: usize, ref_len: usize) -> f64 {
    if candidate_len >= ref_len {
        return 1.0;
    }
    if candidate_len == 0 {
        return 0.0;
    }
    exp(1.0 - ref_len as f64 / candidate_len as f64)
}

/// `exp(sum(w * ln p))` over `(weight, precision)` pairs.
///
/// Any non-positive precision short-circuits to `0.0` before a logarithm is taken.
pub fn weighted_geometric_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut log_sum = 0.0;
    for (weight, precision) in pairs {
        if precision <= 0.0 || precision.is_nan() {
            return 0.0;
        }
        log_sum += weight * log(precision);
    }
    exp(log_sum)
}
