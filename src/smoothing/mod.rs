//! Block-average downsampling of multi-row signals.
//!
//! Both routines split the sample axis `[0, N)` into contiguous bins and
//! reduce each bin to one output column:
//! - [`smooth`]: equal-width bins, sampled from a moving average
//! - [`log_smooth`]: bins whose widths grow geometrically, so the start of a
//!   trace keeps full resolution while the tail is averaged aggressively

mod bins;
mod geometric;
mod linear;

pub use bins::Bins;
pub use geometric::{log_smooth, GeometricBase, LogBinner};
pub use linear::smooth;

use crate::error::{Error, Result};
use crate::types::Signal;

/// Reject signals with no rows or no samples.
pub(crate) fn check_signal(x: &Signal) -> Result<()> {
    if x.nrows() == 0 {
        return Err(Error::invalid("x", "signal array has no rows"));
    }
    if x.ncols() == 0 {
        return Err(Error::invalid("x", "signal array has no samples"));
    }
    Ok(())
}

/// Require `1 <= n <= total`.
pub(crate) fn check_bin_count(n: usize, total: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid("bins", "must be at least 1, got 0"));
    }
    if n > total {
        return Err(Error::invalid(
            "bins",
            format!("cannot split {} samples into {} bins", total, n),
        ));
    }
    Ok(())
}
