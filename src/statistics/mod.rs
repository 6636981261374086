//! Bootstrap estimation of a mean.
//!
//! This module provides:
//! - Plain (i.i.d.) bootstrap resampling of the sample mean
//! - Quantile computation using the R-7 definition
//! - A summary of the bootstrap distribution (standard error and percentile interval)

mod bootstrap;
mod estimate;
mod quantile;

pub use bootstrap::{bootstrap, bootstrap_into, bootstrap_seeded};
pub use estimate::BootstrapEstimate;
pub use quantile::compute_quantile_sorted;
