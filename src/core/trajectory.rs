//! Dense row-major storage for the integrated states.

use std::ops::Index;

use crate::Float;

/// Approximate states at each point of the time grid.
///
/// Shape is `nrows x dim`: row `i` holds the state at `t[i]` and row 0 is
/// the initial condition copied verbatim. Rows are filled in order, so a
/// trajectory returned inside an error only contains the rows that were
/// computed before the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    data: Vec<Float>,
    dim: usize,
    nrows: usize,
}

impl Trajectory {
    /// Allocate `nrows` rows and seed row 0 with `y0`. Remaining rows are
    /// zero until the driver fills them.
    pub(crate) fn with_initial(y0: &[Float], nrows: usize) -> Self {
        let dim = y0.len();
        let mut data = vec![0.0; nrows * dim];
        if nrows > 0 {
            data[..dim].copy_from_slice(y0);
        }
        Self { data, dim, nrows }
    }

    pub(crate) fn set_row(&mut self, i: usize, y: &[Float]) {
        self.data[i * self.dim..(i + 1) * self.dim].copy_from_slice(y);
    }

    /// Keep only the first `nrows` rows.
    pub(crate) fn truncate(&mut self, nrows: usize) {
        if nrows < self.nrows {
            self.nrows = nrows;
            self.data.truncate(nrows * self.dim);
        }
    }

    /// Number of rows (time points).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// State dimension, the length of every row.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// State at the `i`-th time point. Panics if `i >= nrows()`.
    pub fn row(&self, i: usize) -> &[Float] {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn get(&self, i: usize) -> Option<&[Float]> {
        (i < self.nrows).then(|| self.row(i))
    }

    /// The last computed state.
    pub fn last(&self) -> Option<&[Float]> {
        self.nrows.checked_sub(1).map(|i| self.row(i))
    }

    /// Iterate over the rows in time order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Float]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[Float] {
        &self.data
    }

    /// Values of component `j` across all rows, e.g. for plotting one
    /// variable against time.
    pub fn column(&self, j: usize) -> Vec<Float> {
        assert!(j < self.dim, "column {} out of range for dimension {}", j, self.dim);
        self.rows().map(|r| r[j]).collect()
    }

    pub fn to_vec_rows(&self) -> Vec<Vec<Float>> {
        self.rows().map(<[Float]>::to_vec).collect()
    }
}

impl Index<usize> for Trajectory {
    type Output = [Float];

    fn index(&self, i: usize) -> &Self::Output {
        self.row(i)
    }
}
