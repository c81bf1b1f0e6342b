//! Band-constrained DTW alignment cost.

use tracing::instrument;

use crate::constraint::BandConstraint;
use crate::cost::AlignmentCost;
use crate::manhattan::sample_cost;
use crate::series::TimeSeriesView;
use crate::table::AlignmentTable;

/// Immutable DTW configuration. Thread-safe and copyable.
///
/// Aligning sample `i` of the first series with sample `j` of the second
/// costs `|a[i] - b[j]|`, the Manhattan distance of the two samples. The
/// result is the cheapest accumulated cost over monotonic paths from the
/// origin to the last pair of samples that never leave the band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dtw {
    constraint: BandConstraint,
}

impl Dtw {
    /// Create a DTW calculator for the given band.
    #[must_use]
    pub fn new(constraint: BandConstraint) -> Self {
        Self { constraint }
    }

    /// Create an unconstrained DTW calculator.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::new(BandConstraint::Unconstrained)
    }

    /// Create a DTW calculator with a Sakoe-Chiba band. A radius of zero
    /// restricts alignment to the diagonal.
    #[must_use]
    pub fn with_sakoe_chiba(radius: usize) -> Self {
        Self::new(BandConstraint::SakoeChibaRadius(radius))
    }

    /// Return the band constraint configuration.
    #[must_use]
    pub fn constraint(&self) -> BandConstraint {
        self.constraint
    }

    /// Compute the banded DTW cost between two series.
    ///
    /// Uses two rolling rows instead of the full table, each as wide as the
    /// shorter series. Runs in O(m * n) time and O(min(m, n)) space and
    /// returns exactly [`AlignmentTable::final_cost`] of
    /// [`alignment_table`](Self::alignment_table).
    ///
    /// | Condition | Result |
    /// |---|---|
    /// | `a == b` | zero for every band |
    /// | `\|m - n\|` exceeds the band radius | [`AlignmentCost::INFINITY`] |
    /// | otherwise | the optimal accumulated cost |
    #[must_use]
    #[instrument(level = "trace", skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> AlignmentCost {
        // Cost, per-cell cost and band are all symmetric, so the longer
        // series can always drive the rows.
        let (rows, cols) = if a.len() >= b.len() {
            (a.as_slice(), b.as_slice())
        } else {
            (b.as_slice(), a.as_slice())
        };
        AlignmentCost::new(self.rolling_cost(rows, cols))
    }

    /// Two-row version of the table recurrence.
    ///
    /// `prev` holds table row `i` and `curr` row `i + 1`. Slot 0 of every row
    /// is the infinite border column; row 0 is the border row with its zero
    /// origin.
    fn rolling_cost(&self, a: &[f64], b: &[f64]) -> f64 {
        let m = a.len();
        let n = b.len();

        // The final cell is outside the band, so no path can reach it.
        if !self.constraint.contains(m - 1, n - 1) {
            return f64::INFINITY;
        }

        let mut prev = vec![f64::INFINITY; n + 1];
        let mut curr = vec![f64::INFINITY; n + 1];
        prev[0] = 0.0;

        for (i, &x) in a.iter().enumerate() {
            curr.fill(f64::INFINITY);
            for j in self.constraint.column_range(i, n) {
                let best = prev[j].min(prev[j + 1]).min(curr[j]);
                curr[j + 1] = sample_cost(x, b[j]) + best;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[n]
    }

    /// Build the full `(m + 1) x (n + 1)` accumulated-cost table.
    ///
    /// For every in-band pair `(i, j)`:
    ///
    /// ```text
    /// C[i+1][j+1] = |a[i] - b[j]| + min(C[i][j], C[i][j+1], C[i+1][j])
    /// ```
    ///
    /// Out-of-band cells are never written and stay `+inf`.
    #[must_use]
    #[instrument(level = "trace", skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn alignment_table(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> AlignmentTable {
        let m = a.len();
        let n = b.len();
        let mut table = AlignmentTable::new(m, n);

        for i in 0..m {
            for j in self.constraint.column_range(i, n) {
                let best = table[(i, j)].min(table[(i, j + 1)]).min(table[(i + 1, j)]);
                table.set(i + 1, j + 1, sample_cost(a[i], b[j]) + best);
            }
        }

        table
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan::manhattan;
    use crate::series::TimeSeries;

    fn ts(values: &[f64]) -> TimeSeries {
        TimeSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn identical_series_cost_zero_for_every_band() {
        let a = ts(&[1.0, 2.0, 3.0]);
        for dtw in [Dtw::unconstrained(), Dtw::with_sakoe_chiba(0), Dtw::with_sakoe_chiba(5)] {
            assert_eq!(dtw.distance(a.as_view(), a.as_view()).value(), 0.0);
        }
    }

    #[test]
    fn identical_values_with_zero_band_match_manhattan() {
        let a = ts(&[1.0, 2.0, 3.0]);
        let b = ts(&[1.0, 2.0, 3.0]);
        assert_eq!(manhattan(a.as_view(), b.as_view()), 0.0);
        assert_eq!(Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view()).value(), 0.0);
    }

    #[test]
    fn constant_offset_follows_diagonal() {
        // Every cell costs 1; the diagonal path visits three cells.
        let a = ts(&[0.0, 0.0, 0.0]);
        let b = ts(&[1.0, 1.0, 1.0]);
        let cost = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        assert_eq!(cost.value(), 3.0);
        assert_eq!(manhattan(a.as_view(), b.as_view()), 3.0);
    }

    #[test]
    fn hand_computed_2x2() {
        // a=[0,1], b=[1,0]
        // C[1][1] = 1
        // C[1][2] = 0 + C[1][1] = 1
        // C[2][1] = 0 + C[1][1] = 1
        // C[2][2] = 1 + min(1, 1, 1) = 2
        let a = ts(&[0.0, 1.0]);
        let b = ts(&[1.0, 0.0]);
        assert_eq!(Dtw::unconstrained().distance(a.as_view(), b.as_view()).value(), 2.0);
    }

    #[test]
    fn warping_beats_lockstep() {
        // Shifted peak: lockstep pays 2, one step of warping pays 0 extra.
        let a = ts(&[0.0, 1.0, 0.0, 0.0]);
        let b = ts(&[0.0, 0.0, 1.0, 0.0]);
        let lockstep = Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view()).value();
        let warped = Dtw::with_sakoe_chiba(1).distance(a.as_view(), b.as_view()).value();
        assert_eq!(lockstep, 2.0);
        assert_eq!(warped, 0.0);
    }

    #[test]
    fn zero_band_with_unequal_lengths_is_infinite() {
        let a = ts(&[1.0, 2.0, 3.0]);
        let b = ts(&[1.0, 2.0]);
        let dtw = Dtw::with_sakoe_chiba(0);
        assert_eq!(dtw.distance(a.as_view(), b.as_view()), AlignmentCost::INFINITY);
        assert_eq!(dtw.distance(b.as_view(), a.as_view()), AlignmentCost::INFINITY);
        assert_eq!(dtw.alignment_table(a.as_view(), b.as_view()).final_cost(), f64::INFINITY);
    }

    #[test]
    fn length_gap_within_band_is_reachable() {
        let a = ts(&[1.0, 2.0, 3.0, 4.0]);
        let b = ts(&[1.0, 4.0]);
        let cost = Dtw::with_sakoe_chiba(2).distance(a.as_view(), b.as_view());
        assert!(cost.is_reachable());
        // 1-1, 2-1, 3-4, 4-4
        assert_eq!(cost.value(), 2.0);
    }

    #[test]
    fn band_cost_geq_unconstrained() {
        let a = ts(&[0.0, 1.0, 0.0, 1.0, 0.0]);
        let b = ts(&[1.0, 0.0, 1.0, 0.0, 1.0]);
        let free = Dtw::unconstrained().distance(a.as_view(), b.as_view()).value();
        for r in 0..5 {
            let banded = Dtw::with_sakoe_chiba(r).distance(a.as_view(), b.as_view()).value();
            assert!(banded >= free, "radius {r}: {banded} < {free}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = ts(&[1.0, 3.0, 5.0, 2.0, 0.0]);
        let b = ts(&[2.0, 4.0, 1.0]);
        for dtw in [Dtw::unconstrained(), Dtw::with_sakoe_chiba(2), Dtw::with_sakoe_chiba(3)] {
            let ab = dtw.distance(a.as_view(), b.as_view());
            let ba = dtw.distance(b.as_view(), a.as_view());
            assert_eq!(ab, ba, "{:?}", dtw.constraint());
        }
    }

    #[test]
    fn rolling_matches_full_table() {
        let a = ts(&[1.0, 3.0, 5.0, 2.0, 7.0, 1.0]);
        let b = ts(&[2.0, 4.0, 1.0, 6.0]);
        for dtw in [
            Dtw::unconstrained(),
            Dtw::with_sakoe_chiba(0),
            Dtw::with_sakoe_chiba(1),
            Dtw::with_sakoe_chiba(2),
            Dtw::with_sakoe_chiba(10),
        ] {
            let rolling = dtw.distance(a.as_view(), b.as_view()).value();
            let full = dtw.alignment_table(a.as_view(), b.as_view()).final_cost();
            assert_eq!(rolling, full, "{:?}", dtw.constraint());
        }
    }

    #[test]
    fn table_leaves_out_of_band_cells_infinite() {
        let a = ts(&[1.0, 2.0, 3.0, 4.0]);
        let b = ts(&[4.0, 3.0, 2.0, 1.0]);
        let table = Dtw::with_sakoe_chiba(1).alignment_table(a.as_view(), b.as_view());
        assert_eq!(table.get(1, 3), f64::INFINITY);
        assert_eq!(table.get(4, 1), f64::INFINITY);
        assert!(table.get(2, 3).is_finite());
    }

    #[test]
    fn single_sample_series() {
        let a = ts(&[5.0]);
        let b = ts(&[3.0]);
        assert_eq!(Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view()).value(), 2.0);
    }
}
