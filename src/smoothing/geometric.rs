//! Logarithmic smoothing with geometrically growing bins.
//!
//! For `n` bins over `N` samples, bin `i` has width proportional to `β^i`,
//! where the base `β > 1` makes the widths sum to exactly `N`:
//!
//! ```text
//! β^n - 1 = (β - 1) · N
//! ```
//!
//! There is no closed form, so `β` is found with a bracketed root finder
//! (Brent's method unless [`RootOptions::method`] says otherwise) on
//! `[β_min, β_max]`:
//! - `β_min = (N / n)^(1 / (n - 1))`: every term is at most `N / n`, so the
//!   geometric sum is at most `N`
//! - `β_max = N^(1 / (n - 1))`: the last term alone is `N`
//!
//! Bin ends are the ceilings of the cumulative sums `Σ β^k`. Because every
//! term is at least 1, consecutive ceilings differ by at least 1 and no bin
//! is empty. Rounding near the tail is repaired by pinning the last end to
//! `N` and pulling earlier ends back if they collide with it.

use tracing::{debug, trace};

use super::bins::Bins;
use super::{check_bin_count, check_signal};
use crate::config::LogSmoothConfig;
use crate::error::{Error, Result};
use crate::roots::{solve, RootOptions};
use crate::types::{Signal, Smoothed};

/// The solved growth factor for one `(N, n)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricBase {
    /// Growth factor between consecutive bin widths.
    pub beta: f64,
    /// Lower end of the search bracket.
    pub beta_min: f64,
    /// Upper end of the search bracket.
    pub beta_max: f64,
    /// Root-finder iterations (0 when no search was needed).
    pub iterations: usize,
}

impl GeometricBase {
    /// Geometric sum `Σ_{k<n} β^k` for this base.
    pub fn geometric_sum(&self, n: usize) -> f64 {
        (0..n).map(|k| self.beta.powf(k as f64)).sum()
    }
}

/// `ln(Σ_{k<n} β^k) - ln(N)`, evaluated without cancellation near `β = 1`.
fn residual(beta: f64, n: usize, total: usize) -> f64 {
    let (n, total) = (n as f64, total as f64);
    if beta <= 1.0 {
        // limit of the geometric sum as β -> 1 is n
        return n.ln() - total.ln();
    }
    (n * beta.ln()).exp_m1().ln() - (beta - 1.0).ln() - total.ln()
}

/// Reusable logarithmic binner.
///
/// ```
/// use tracestat::{LogBinner, Signal};
///
/// let x = Signal::from_fn(2, 1000, |r, j| (r * j) as f64);
/// let out = LogBinner::new(50).add_last(true).smooth(&x).unwrap();
/// assert_eq!(out.t.len(), 51);
/// assert_eq!(out.y.shape(), (2, 51));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBinner {
    config: LogSmoothConfig,
    root_options: RootOptions,
}

impl LogBinner {
    /// Binner producing `bins` output points.
    pub fn new(bins: usize) -> Self {
        Self::with_config(LogSmoothConfig::new().bins(bins))
    }

    /// Binner from a full configuration.
    pub fn with_config(config: LogSmoothConfig) -> Self {
        Self {
            config,
            root_options: RootOptions::default(),
        }
    }

    /// Append the raw last sample as an extra output point.
    pub fn add_last(mut self, yes: bool) -> Self {
        self.config.add_last = yes;
        self
    }

    /// Override the root-finder method and tolerances.
    pub fn root_options(mut self, options: RootOptions) -> Self {
        self.root_options = options;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LogSmoothConfig {
        &self.config
    }

    /// Solve for the growth factor over an axis of `total` samples.
    ///
    /// When the bin count equals `total` the answer is exactly 1 and no
    /// search is run.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` unless `2 <= n <= total`
    /// * `RootFinding` if the root finder fails on the bracket
    pub fn base(&self, total: usize) -> Result<GeometricBase> {
        let n = self.config.bins;
        check_bin_count(n, total)?;
        if n < 2 {
            return Err(Error::invalid(
                "bins",
                "a geometric base needs at least 2 bins",
            ));
        }

        let exponent = 1.0 / (n - 1) as f64;
        let beta_min = (total as f64 / n as f64).powf(exponent);
        let beta_max = (total as f64).powf(exponent);

        if n == total {
            return Ok(GeometricBase {
                beta: 1.0,
                beta_min,
                beta_max,
                iterations: 0,
            });
        }

        let root = solve(
            |beta| residual(beta, n, total),
            beta_min,
            beta_max,
            &self.root_options,
        )?;

        debug!(
            total,
            bins = n,
            beta = root.root,
            beta_min,
            beta_max,
            iterations = root.iterations,
            "solved geometric bin base"
        );

        Ok(GeometricBase {
            beta: root.root,
            beta_min,
            beta_max,
            iterations: root.iterations,
        })
    }

    /// Partition `[0, total)` into geometrically growing bins.
    ///
    /// A single bin covers the whole axis; `n == total` gives one bin per
    /// sample.
    ///
    /// # Errors
    ///
    /// Same as [`LogBinner::base`], except that `n == 1` is accepted.
    pub fn partition(&self, total: usize) -> Result<Bins> {
        let n = self.config.bins;
        check_bin_count(n, total)?;

        if n == 1 {
            return Ok(Bins::from_ends(vec![total]));
        }
        if n == total {
            return Ok(Bins::identity(total));
        }

        let base = self.base(total)?;

        let mut ends = Vec::with_capacity(n);
        let mut cumulative = 0.0;
        for k in 0..n {
            cumulative += base.beta.powf(k as f64);
            ends.push(cumulative.ceil() as usize);
        }

        let repaired = repair_ends(&mut ends, total);
        if repaired > 0 {
            trace!(total, bins = n, repaired, "adjusted bin ends after rounding");
        }

        Ok(Bins::from_ends(ends))
    }

    /// Average each row of `x` within each bin.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if `x` is empty or the bin count is outside
    ///   `1..=N`
    /// * `RootFinding` if the base cannot be solved
    pub fn smooth(&self, x: &Signal) -> Result<Smoothed> {
        check_signal(x)?;
        let bins = self.partition(x.ncols())?;

        let out = Smoothed {
            t: bins.midpoints(),
            y: bins.means(x),
        };

        Ok(if self.config.add_last {
            out.push_last(x)
        } else {
            out
        })
    }
}

/// Force `ends` to a strictly increasing sequence finishing at `total`.
///
/// Requires `ends.len() <= total`. Returns the number of adjustments made.
fn repair_ends(ends: &mut [usize], total: usize) -> usize {
    let mut changed = 0;

    let mut floor = 0;
    for end in ends.iter_mut() {
        if *end <= floor {
            *end = floor + 1;
            changed += 1;
        }
        floor = *end;
    }

    if let Some(last) = ends.last_mut() {
        if *last != total {
            *last = total;
            changed += 1;
        }
    }

    let mut ceiling = total;
    for end in ends.iter_mut().rev().skip(1) {
        if *end >= ceiling {
            *end = ceiling - 1;
            changed += 1;
        }
        ceiling = *end;
    }

    changed
}

/// Downsample `x` into `n` logarithmically spaced bin averages.
///
/// Returns representative indices `t` (integer bin midpoints) and per-bin
/// means `y` of shape `(R, n)`. With `add_last`, the raw final sample is
/// appended at index `N - 1`, giving `n + 1` points.
///
/// See [`LogBinner`] for the binning scheme and [`LogBinner::smooth`] for
/// errors.
pub fn log_smooth(x: &Signal, n: usize, add_last: bool) -> Result<Smoothed> {
    LogBinner::new(n).add_last(add_last).smooth(x)
}
