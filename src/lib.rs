//! # tracestat
//!
//! Quick summaries of experimental and simulation traces before plotting or
//! further statistics.
//!
//! This crate provides:
//! - Bootstrap estimates of the sampling distribution of a mean
//! - Equal-width downsampling ([`smooth`]) of multi-row signals
//! - Logarithmic downsampling ([`log_smooth`]) whose bin widths grow
//!   geometrically, keeping the start of a trace at full resolution while
//!   averaging the tail
//!
//! Everything operates on in-memory arrays. Signals are
//! [`Signal`] matrices with one row per signal and one column per sample.
//!
//! ## Quick Start
//!
//! ```
//! use tracestat::{log_smooth, Signal};
//!
//! // Two traces of 10,000 samples each
//! let x = Signal::from_fn(2, 10_000, |r, j| ((r + 1) * j) as f64);
//!
//! let out = log_smooth(&x, 100, true).unwrap();
//! assert_eq!(out.t.len(), 101);
//! assert_eq!(out.y.shape(), (2, 101));
//! assert_eq!(out.t[100], 9_999);
//! ```
//!
//! Bootstrap with a caller-owned RNG:
//!
//! ```
//! use rand::SeedableRng;
//!
//! let a: Vec<f64> = (0..200).map(|i| i as f64).collect();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let means = tracestat::bootstrap(&a, &mut rng, 1000).unwrap();
//! let estimate = tracestat::BootstrapEstimate::from_means(&means, 0.95).unwrap();
//! assert!(estimate.contains(99.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod types;

// Functional modules
pub mod roots;
pub mod smoothing;
pub mod statistics;

// Re-exports for public API
pub use config::{BootstrapConfig, LogSmoothConfig, SmoothConfig};
pub use error::{Error, Result};
pub use roots::RootFindingError;
pub use smoothing::{log_smooth, smooth, Bins, GeometricBase, LogBinner};
pub use statistics::{bootstrap, bootstrap_seeded, BootstrapEstimate};
pub use types::{Signal, Smoothed};
