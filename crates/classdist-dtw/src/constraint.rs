//! Warping-window constraint shared by every DTW computation.

use std::fmt;
use std::ops::Range;

/// Limit on how far an alignment may stray from the diagonal.
///
/// Cell `(i, j)` of the accumulated-cost table is reachable only if
/// [`contains`](Self::contains) holds for it. The test is symmetric in `i`
/// and `j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BandConstraint {
    /// Infinite band width: classical DTW over the whole table.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band: cell `(i, j)` is valid only if `|i - j| <= radius`.
    /// A radius of zero admits the diagonal alone.
    SakoeChibaRadius(usize),
}

impl BandConstraint {
    /// Return true if sample `i` of the first series may be aligned with
    /// sample `j` of the second.
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::SakoeChibaRadius(r) => i.abs_diff(j) <= *r,
        }
    }

    /// Return the columns of `row` that lie inside the band.
    ///
    /// For [`Unconstrained`](Self::Unconstrained) this is `0..n_cols`. For a
    /// Sakoe-Chiba radius `r` it is `[row - r, row + r]` clipped to
    /// `[0, n_cols)`, and empty once `row` has moved more than `r` past the
    /// last column.
    #[must_use]
    pub fn column_range(&self, row: usize, n_cols: usize) -> Range<usize> {
        match self {
            Self::Unconstrained => 0..n_cols,
            Self::SakoeChibaRadius(r) => {
                let start = row.saturating_sub(*r).min(n_cols);
                let end = row.saturating_add(*r).saturating_add(1).min(n_cols);
                start..end
            }
        }
    }

    /// Return the band radius, or `None` when unconstrained.
    #[must_use]
    pub fn radius(&self) -> Option<usize> {
        match self {
            Self::Unconstrained => None,
            Self::SakoeChibaRadius(r) => Some(*r),
        }
    }

    /// Return true for a finite band width.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.radius().is_some()
    }
}

/// Renders the radius, or `inf` for the unconstrained band.
impl fmt::Display for BandConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => f.write_str("inf"),
            Self::SakoeChibaRadius(r) => write!(f, "{r}"),
        }
    }
}
