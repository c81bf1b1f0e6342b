//! Result types for a group comparison.

use classdist_dtw::BandConstraint;

/// Averages for one group pair: the Manhattan average followed by one DTW
/// average per configured band, in band order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultVector(Vec<f64>);

impl ResultVector {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty(), "result vector always holds the Manhattan average");
        Self(values)
    }

    /// Average Manhattan distance.
    #[must_use]
    pub fn manhattan(&self) -> f64 {
        self.0[0]
    }

    /// Average DTW cost per band, aligned with
    /// [`CompareConfig::bands`](crate::CompareConfig::bands).
    #[must_use]
    pub fn dtw(&self) -> &[f64] {
        &self.0[1..]
    }

    /// All averages in output order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Averages for one unordered pair of groups.
#[derive(Debug, Clone, PartialEq)]
pub struct PairResult {
    /// Name of the first group.
    pub first: String,
    /// Name of the second group.
    pub second: String,
    /// Number of member pairs that entered the averages.
    pub n_pairs: usize,
    /// Member pairs dropped by the self-comparison filter.
    pub n_skipped: usize,
    /// The averaged distances.
    pub averages: ResultVector,
}

impl PairResult {
    /// Pair label in `first:second` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}:{}", self.first, self.second)
    }
}

/// Result of comparing every unordered pair of groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Bands the DTW columns were computed under, in column order.
    pub bands: Vec<BandConstraint>,
    /// One entry per group pair, ordered `(g0, g0), (g0, g1), ..., (gK, gK)`.
    pub pairs: Vec<PairResult>,
}

impl ComparisonReport {
    /// Look up the entry for a pair of group names, in either order.
    #[must_use]
    pub fn get(&self, first: &str, second: &str) -> Option<&PairResult> {
        self.pairs.iter().find(|p| {
            (p.first == first && p.second == second) || (p.first == second && p.second == first)
        })
    }

    /// Return the number of group pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
