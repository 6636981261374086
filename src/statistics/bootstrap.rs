//! Bootstrap resampling of the sample mean.
//!
//! Each replicate draws `len(a)` indices uniformly with replacement and
//! records the mean of the selected values. The spread of the replicate means
//! approximates the sampling distribution of the mean of `a`.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use crate::error::{Error, Result};

/// Mean of one resample-with-replacement of `data`.
///
/// `data` must be non-empty.
#[inline]
fn resample_mean<R: Rng>(data: &[f64], rng: &mut R) -> f64 {
    let n = data.len();
    let sum: f64 = (0..n).map(|_| data[rng.random_range(0..n)]).sum();
    sum / n as f64
}

fn check_data(data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::invalid("a", "cannot bootstrap an empty sample"));
    }
    Ok(())
}

/// Fill `out` with bootstrap mean estimates of `data`.
///
/// One replicate is written per element of `out`, so the caller controls the
/// resample count through the buffer length. Useful in loops that reuse one
/// buffer across calls.
///
/// # Errors
///
/// `InvalidArgument` if `data` is empty.
pub fn bootstrap_into<R: Rng>(data: &[f64], rng: &mut R, out: &mut [f64]) -> Result<()> {
    check_data(data)?;
    for slot in out.iter_mut() {
        *slot = resample_mean(data, rng);
    }
    Ok(())
}

/// Return `resamples` bootstrapped mean estimates of `data`.
///
/// The RNG is supplied and owned by the caller; it is only used to draw
/// indices in `0..data.len()`.
///
/// # Errors
///
/// `InvalidArgument` if `data` is empty or `resamples` is zero.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let means = tracestat::bootstrap(&a, &mut rng, 1000).unwrap();
/// assert_eq!(means.len(), 1000);
/// ```
pub fn bootstrap<R: Rng>(data: &[f64], rng: &mut R, resamples: usize) -> Result<Vec<f64>> {
    check_data(data)?;
    if resamples == 0 {
        return Err(Error::invalid("resamples", "must be at least 1, got 0"));
    }

    debug!(samples = data.len(), resamples, "bootstrap resampling");

    let mut means = vec![0.0; resamples];
    bootstrap_into(data, rng, &mut means)?;
    Ok(means)
}

/// Deterministic [`bootstrap`] driven by a Xoshiro256++ generator seeded
/// with `seed`.
///
/// The same `(data, resamples, seed)` always gives the same output.
///
/// # Errors
///
/// Same as [`bootstrap`].
pub fn bootstrap_seeded(data: &[f64], resamples: usize, seed: u64) -> Result<Vec<f64>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    bootstrap(data, &mut rng, resamples)
}
