//! Type aliases and common types.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// A bundle of signals sharing one time axis.
///
/// Rows are independent signals, columns are samples, so a signal array of
/// shape `(R, N)` is `Signal::from_row_slice(R, N, ..)`.
pub type Signal = DMatrix<f64>;

/// Downsampled output: representative sample indices and per-bin values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smoothed {
    /// Representative index into the original axis for each output column.
    pub t: Vec<usize>,
    /// Averaged values, one row per input signal and one column per entry of `t`.
    pub y: DMatrix<f64>,
}

impl Smoothed {
    /// Number of output points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True if there are no output points.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Number of signals (rows of `y`).
    pub fn rows(&self) -> usize {
        self.y.nrows()
    }

    /// Prepend the first sample of every row at index 0.
    pub(crate) fn push_head(self, x: &Signal) -> Self {
        let mut t = Vec::with_capacity(self.t.len() + 1);
        t.push(0);
        t.extend(self.t);
        let mut y = self.y.insert_column(0, 0.0);
        y.set_column(0, &x.column(0));
        Self { t, y }
    }

    /// Append the last sample of every row at index `N - 1`, unaveraged.
    pub(crate) fn push_last(self, x: &Signal) -> Self {
        let last = x.ncols() - 1;
        let mut t = self.t;
        t.push(last);
        let width = self.y.ncols();
        let mut y = self.y.insert_column(width, 0.0);
        y.set_column(width, &x.column(last));
        Self { t, y }
    }
}
