//! Pointwise Manhattan distance.

use crate::series::TimeSeriesView;

/// Cost of aligning a single pair of samples. This is the Manhattan distance
/// between two length-one vectors, and the per-cell cost of every DTW table.
#[inline]
pub(crate) fn sample_cost(x: f64, y: f64) -> f64 {
    (x - y).abs()
}

/// Sum of absolute element-wise differences between two series.
///
/// The result is non-negative and symmetric in its arguments.
///
/// Both series must have the same length. The length is part of the caller's
/// contract and is only asserted in debug builds; group construction is where
/// uniform length is enforced.
#[must_use]
pub fn manhattan(a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "manhattan distance needs equal-length series");
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| sample_cost(x, y))
        .sum()
}
