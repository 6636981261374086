//! Configuration for the smoothing and bootstrap operations.
//!
//! Every struct is `#[serde(default)]`, so a partial JSON or TOML table
//! fills the missing fields from [`Default`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::smoothing::{smooth, LogBinner};
use crate::statistics::{bootstrap, bootstrap_seeded, BootstrapEstimate};
use crate::types::{Signal, Smoothed};

/// Options for equal-width smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothConfig {
    /// Target number of bins (default: 500).
    pub bins: usize,

    /// Prepend the raw first sample at index 0 (default: false).
    pub add_head: bool,

    /// Append the raw last sample at index `N - 1` (default: false).
    pub add_last: bool,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            bins: 500,
            add_head: false,
            add_last: false,
        }
    }
}

impl SmoothConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target number of bins.
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = n;
        self
    }

    /// Prepend the raw first sample.
    pub fn add_head(mut self, yes: bool) -> Self {
        self.add_head = yes;
        self
    }

    /// Append the raw last sample.
    pub fn add_last(mut self, yes: bool) -> Self {
        self.add_last = yes;
        self
    }

    /// Run [`smooth`] with these options.
    pub fn apply(&self, x: &Signal) -> Result<Smoothed> {
        smooth(x, self.bins, self.add_head, self.add_last)
    }
}

/// Options for logarithmic smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSmoothConfig {
    /// Target number of bins (default: 500).
    pub bins: usize,

    /// Append the raw last sample at index `N - 1` (default: false).
    pub add_last: bool,
}

impl Default for LogSmoothConfig {
    fn default() -> Self {
        Self {
            bins: 500,
            add_last: false,
        }
    }
}

impl LogSmoothConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target number of bins.
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = n;
        self
    }

    /// Append the raw last sample.
    pub fn add_last(mut self, yes: bool) -> Self {
        self.add_last = yes;
        self
    }

    /// Run logarithmic smoothing with these options.
    pub fn apply(&self, x: &Signal) -> Result<Smoothed> {
        LogBinner::with_config(*self).smooth(x)
    }
}

/// Options for bootstrap estimation of a mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of resamples (default: 1,000).
    pub resamples: usize,

    /// Seed for a reproducible run. `None` draws from the thread RNG.
    pub seed: Option<u64>,

    /// Coverage of the percentile interval (default: 0.95).
    pub confidence: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            resamples: 1_000,
            seed: None,
            confidence: 0.95,
        }
    }
}

impl BootstrapConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of resamples.
    pub fn resamples(mut self, n: usize) -> Self {
        self.resamples = n;
        self
    }

    /// Fix the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the interval coverage.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Bootstrap the mean of `data` and summarize the resample means.
    pub fn run(&self, data: &[f64]) -> Result<BootstrapEstimate> {
        let means = match self.seed {
            Some(seed) => bootstrap_seeded(data, self.resamples, seed)?,
            None => bootstrap(data, &mut rand::rng(), self.resamples)?,
        };
        BootstrapEstimate::from_means(&means, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SmoothConfig::default().bins, 500);
        assert!(!SmoothConfig::default().add_head);
        assert_eq!(LogSmoothConfig::default().bins, 500);
        assert_eq!(BootstrapConfig::default().resamples, 1_000);
        assert_eq!(BootstrapConfig::default().seed, None);
    }

    #[test]
    fn test_chained_setters() {
        let config = SmoothConfig::new().bins(20).add_head(true).add_last(true);
        assert_eq!(
            config,
            SmoothConfig {
                bins: 20,
                add_head: true,
                add_last: true
            }
        );

        let config = BootstrapConfig::new().resamples(50).seed(7).confidence(0.9);
        assert_eq!(config.resamples, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.confidence, 0.9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LogSmoothConfig = serde_json::from_str(r#"{"add_last": true}"#).unwrap();
        assert_eq!(config.bins, 500);
        assert!(config.add_last);

        let config: BootstrapConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.resamples, 1_000);
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let data: Vec<f64> = (0..50).map(|x| x as f64).collect();
        let config = BootstrapConfig::new().resamples(200).seed(42);

        let a = config.run(&data).unwrap();
        let b = config.run(&data).unwrap();
        assert_eq!(a, b);
        assert!(a.ci_low <= a.mean && a.mean <= a.ci_high);
    }

    #[test]
    fn test_apply_log_smooth() {
        let x = Signal::from_fn(1, 100, |_, j| j as f64);
        let out = LogSmoothConfig::new().bins(10).add_last(true).apply(&x).unwrap();
        assert_eq!(out.len(), 11);
        assert_eq!(*out.t.last().unwrap(), 99);
    }
}
