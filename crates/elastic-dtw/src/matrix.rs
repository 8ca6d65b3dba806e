//! Dense cumulative cost matrix filled by the DTW engine.

use std::fmt;
use std::ops::Index;

/// Row-major `rows × cols` grid of cumulative squared costs.
///
/// Row `i` corresponds to index `i` of the first series, column `j` to index
/// `j` of the second. Cells pruned by early abandoning, and cells never reached
/// before an abandon, hold `f64::MAX`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Resize to `rows × cols` and fill every cell with `f64::MAX`.
    ///
    /// Keeps the existing allocation when its capacity is sufficient.
    pub(crate) fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, f64::MAX);
    }

    /// Mutable row-major cells; `(i, j)` is at `i * cols() + j`.
    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[cfg(test)]
    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Return the number of rows (length of the first series).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (length of the second series).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return true if no computation has sized the matrix yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the cumulative cost at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows, "row index {i} out of bounds for matrix with {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for matrix with {} columns", self.cols);
        self.data[i * self.cols + j]
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for matrix with {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Return all cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Return the cells `(k, k)` along the main diagonal, from the last
    /// diagonal index down to `(0, 0)`.
    ///
    /// This is the cost profile of the unwarped alignment.
    #[must_use]
    pub fn diagonal(&self) -> Vec<f64> {
        let k = self.rows.min(self.cols);
        (0..k).rev().map(|d| self.data[d * self.cols + d]).collect()
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

/// One line per row, `row i: c0 c1 ...`.
impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "row {i}:")?;
            for value in self.row(i) {
                write!(f, " {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
