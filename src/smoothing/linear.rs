//! Equal-width smoothing.

use nalgebra::DMatrix;
use tracing::debug;

use super::bins::Bins;
use super::check_signal;
use crate::error::Result;
use crate::types::{Signal, Smoothed};

/// Filter `x` with a box moving average and subsample it at `n` points.
///
/// The axis is split into `n` equal-width bins (`Bins::linear`). Output
/// column `i` is the mean of the `N / n` samples starting at the bin's first
/// index, and `t[i]` is the bin's integer midpoint.
///
/// * `add_head` prepends the raw first sample at index 0
/// * `add_last` appends the raw last sample at index `N - 1`
///
/// # Errors
///
/// `InvalidArgument` if `x` has no rows or samples, or `n` is outside
/// `1..=N`.
pub fn smooth(x: &Signal, n: usize, add_head: bool, add_last: bool) -> Result<Smoothed> {
    check_signal(x)?;
    let total = x.ncols();
    let bins = Bins::linear(total, n)?;
    let window = total / n;

    debug!(total, bins = n, window, "linear smoothing");

    let mut y = DMatrix::zeros(x.nrows(), n);
    for (i, &start) in bins.starts().iter().enumerate() {
        let mean = x.columns(start, window).column_mean();
        y.set_column(i, &mean);
    }

    let mut out = Smoothed {
        t: bins.midpoints(),
        y,
    };
    if add_head {
        out = out.push_head(x);
    }
    if add_last {
        out = out.push_last(x);
    }
    Ok(out)
}
