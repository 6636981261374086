//! Summary of a bootstrap distribution.

use serde::{Deserialize, Serialize};

use super::quantile::compute_quantile_sorted;
use crate::error::{Error, Result};

/// Point estimate, standard error and percentile interval from bootstrap means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapEstimate {
    /// Mean of the bootstrap means.
    pub mean: f64,

    /// Standard deviation of the bootstrap means (n - 1 denominator).
    ///
    /// Zero when only one replicate is available.
    pub std_error: f64,

    /// Lower percentile bound, the `(1 - confidence) / 2` quantile.
    pub ci_low: f64,

    /// Upper percentile bound, the `(1 + confidence) / 2` quantile.
    pub ci_high: f64,

    /// Interval coverage used.
    pub confidence: f64,

    /// Number of bootstrap replicates summarized.
    pub resamples: usize,
}

impl BootstrapEstimate {
    /// Summarize a set of bootstrap means.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `means` is empty, contains NaN, or `confidence`
    /// is not strictly between 0 and 1.
    pub fn from_means(means: &[f64], confidence: f64) -> Result<Self> {
        if means.is_empty() {
            return Err(Error::invalid("means", "no bootstrap replicates"));
        }
        if means.iter().any(|m| m.is_nan()) {
            return Err(Error::invalid("means", "bootstrap replicates contain NaN"));
        }
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(Error::invalid(
                "confidence",
                format!("must lie in (0, 1), got {}", confidence),
            ));
        }

        let n = means.len();
        let mean = means.iter().sum::<f64>() / n as f64;
        let std_error = if n < 2 {
            0.0
        } else {
            let ss: f64 = means.iter().map(|m| (m - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        let mut sorted = means.to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        let tail = (1.0 - confidence) / 2.0;

        Ok(Self {
            mean,
            std_error,
            ci_low: compute_quantile_sorted(&sorted, tail),
            ci_high: compute_quantile_sorted(&sorted, 1.0 - tail),
            confidence,
            resamples: n,
        })
    }

    /// Check whether `value` lies inside the percentile interval.
    pub fn contains(&self, value: f64) -> bool {
        self.ci_low <= value && value <= self.ci_high
    }
}
