//! Accumulated alignment cost newtype.

use std::fmt;

/// Minimum accumulated cost of a banded alignment.
///
/// Non-negative, and [`AlignmentCost::INFINITY`] when the band admits no
/// path between the two series.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AlignmentCost(f64);

impl AlignmentCost {
    /// Cost of an alignment that cannot be completed inside the band.
    pub const INFINITY: Self = Self(f64::INFINITY);

    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw cost.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if some path reached the final cell.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }
}

impl From<AlignmentCost> for f64 {
    fn from(cost: AlignmentCost) -> Self {
        cost.0
    }
}

impl fmt::Display for AlignmentCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
