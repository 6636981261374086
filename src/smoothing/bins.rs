//! Contiguous bin partitions of a sample axis.

use std::ops::Range;

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::types::Signal;

/// A partition of `[0, total)` into non-empty half-open intervals.
///
/// Invariants (checked by [`Bins::validate`]):
/// - `starts[0] == 0` and `ends[len - 1] == total`
/// - `starts[i] == ends[i - 1]` for `i > 0`
/// - `ends[i] > starts[i]` for every bin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bins {
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl Bins {
    /// Build a partition from its bin ends; starts are derived.
    pub(crate) fn from_ends(ends: Vec<usize>) -> Self {
        let mut starts = Vec::with_capacity(ends.len());
        if !ends.is_empty() {
            starts.push(0);
            starts.extend_from_slice(&ends[..ends.len() - 1]);
        }
        Self { starts, ends }
    }

    /// Equal-width partition: bin `k` ends at `floor((k + 1) * total / n)`.
    ///
    /// Widths differ by at most one sample.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `1 <= n <= total`.
    pub fn linear(total: usize, n: usize) -> Result<Self> {
        super::check_bin_count(n, total)?;
        let ends = (1..=n).map(|k| k * total / n).collect();
        Ok(Self::from_ends(ends))
    }

    /// One bin per sample.
    pub fn identity(total: usize) -> Self {
        Self::from_ends((1..=total).collect())
    }

    /// Bin start indices (inclusive).
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Bin end indices (exclusive).
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// True if the partition has no bins.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Length of the covered axis.
    pub fn total(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Iterate over the bins as index ranges.
    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.starts.iter().zip(&self.ends).map(|(&s, &e)| s..e)
    }

    /// Width of each bin.
    pub fn widths(&self) -> Vec<usize> {
        self.iter().map(|r| r.len()).collect()
    }

    /// Integer midpoint `(start + end - 1) / 2` of each bin.
    pub fn midpoints(&self) -> Vec<usize> {
        self.iter().map(|r| (r.start + r.end - 1) / 2).collect()
    }

    /// Check the partition invariants against an axis of length `total`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first violated invariant.
    pub fn validate(&self, total: usize) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid("bins", "partition has no bins"));
        }
        if self.starts[0] != 0 {
            return Err(Error::invalid(
                "bins",
                format!("first bin starts at {}, expected 0", self.starts[0]),
            ));
        }
        if self.total() != total {
            return Err(Error::invalid(
                "bins",
                format!("last bin ends at {}, expected {}", self.total(), total),
            ));
        }
        for (i, range) in self.iter().enumerate() {
            if range.is_empty() {
                return Err(Error::invalid(
                    "bins",
                    format!("bin {} [{}, {}) is empty", i, range.start, range.end),
                ));
            }
            if i > 0 && range.start != self.ends[i - 1] {
                return Err(Error::invalid(
                    "bins",
                    format!(
                        "bin {} starts at {} but bin {} ends at {}",
                        i,
                        range.start,
                        i - 1,
                        self.ends[i - 1]
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Mean of every row of `x` within each bin, shape `(rows, len)`.
    ///
    /// The caller guarantees `x.ncols() == self.total()`.
    pub(crate) fn means(&self, x: &Signal) -> DMatrix<f64> {
        let mut y = DMatrix::zeros(x.nrows(), self.len());
        for (i, range) in self.iter().enumerate() {
            let mean = x.columns(range.start, range.len()).column_mean();
            y.set_column(i, &mean);
        }
        y
    }
}
