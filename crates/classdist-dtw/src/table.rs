//! Full accumulated-cost table for one DTW invocation.

use std::ops::Index;

/// `(m + 1) x (n + 1)` grid of accumulated alignment costs.
///
/// Row `i` and column `j` hold the cheapest cost of aligning the first `i`
/// samples of one series with the first `j` samples of the other. The border
/// row and column are `+inf` except the origin, which is `0`. Cells outside
/// the band stay `+inf`.
///
/// Stored as one flat row-major buffer sized from the two input lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentTable {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl AlignmentTable {
    /// Allocate the table for series of lengths `m` and `n` with its borders
    /// initialized.
    pub(crate) fn new(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        let mut cells = vec![f64::INFINITY; rows * cols];
        cells[0] = 0.0;
        Self { rows, cols, cells }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.flat(i, j);
        self.cells[idx] = value;
    }

    fn flat(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows, "row {i} out of bounds for table with {} rows", self.rows);
        assert!(j < self.cols, "column {j} out of bounds for table with {} columns", self.cols);
        i * self.cols + j
    }

    /// Number of rows, `m + 1`.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the accumulated cost at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.flat(i, j)]
    }

    /// Return the cost of the complete alignment, cell `(m, n)`.
    #[must_use]
    pub fn final_cost(&self) -> f64 {
        self.cells[self.cells.len() - 1]
    }
}

impl Index<(usize, usize)> for AlignmentTable {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[self.flat(i, j)]
    }
}
