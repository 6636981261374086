//! Bracketed root finding for scalar functions.
//!
//! Both solvers need an interval `[a, b]` with `f(a)` and `f(b)` of opposite
//! sign (or one of them exactly zero). [`brentq`] combines inverse quadratic
//! interpolation, secant steps and bisection and is the default; [`bisect`]
//! is slower but makes no assumptions beyond continuity. [`solve`] runs
//! whichever one [`RootOptions::method`] selects.

use thiserror::Error;

/// Which bracketed solver [`solve`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootMethod {
    /// [`brentq`].
    #[default]
    Brent,
    /// [`bisect`].
    Bisection,
}

/// Options for the bracketed solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Solver used by [`solve`]. Ignored when calling a solver directly.
    pub method: RootMethod,
    /// Maximum number of iterations before giving up.
    pub max_iter: usize,
    /// Absolute tolerance on the root location.
    pub xtol: f64,
    /// Relative tolerance on the root location.
    pub rtol: f64,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            method: RootMethod::Brent,
            max_iter: 100,
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Location of the root.
    pub root: f64,
    /// Function value at `root`.
    pub function_value: f64,
    /// Iterations used.
    pub iterations: usize,
}

/// Failure modes of the bracketed solvers.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    /// The bracket is not an ordered finite interval.
    #[error("invalid bracket [{a}, {b}]: bounds must be finite with a < b")]
    InvalidBracket {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },

    /// `f(a)` and `f(b)` share a sign, so the bracket holds no root.
    #[error("function has the same sign at both bracket endpoints: f(a)={fa}, f(b)={fb}")]
    SameSign {
        /// Function value at the lower bound.
        fa: f64,
        /// Function value at the upper bound.
        fb: f64,
    },

    /// The function returned NaN or an infinity.
    #[error("function is not finite at x={x}")]
    NonFinite {
        /// Where the bad value was produced.
        x: f64,
    },

    /// The iteration budget ran out.
    #[error("did not converge after {iterations} iterations")]
    DidNotConverge {
        /// Iterations performed.
        iterations: usize,
    },
}

fn check_bracket<F>(f: &F, a: f64, b: f64) -> Result<(f64, f64), RootFindingError>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(RootFindingError::InvalidBracket { a, b });
    }

    let fa = f(a);
    if !fa.is_finite() {
        return Err(RootFindingError::NonFinite { x: a });
    }
    let fb = f(b);
    if !fb.is_finite() {
        return Err(RootFindingError::NonFinite { x: b });
    }

    if (fa > 0.0 && fb > 0.0) || (fa < 0.0 && fb < 0.0) {
        return Err(RootFindingError::SameSign { fa, fb });
    }

    Ok((fa, fb))
}

/// Find a root of `f` in `[a, b]` with the solver chosen by `options.method`.
///
/// # Errors
///
/// Same conditions as [`brentq`].
pub fn solve<F>(f: F, a: f64, b: f64, options: &RootOptions) -> Result<RootResult, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    match options.method {
        RootMethod::Brent => brentq(f, a, b, options),
        RootMethod::Bisection => bisect(f, a, b, options),
    }
}

/// Brent's method.
///
/// Keeps a bracketing point `xblk` at all times and only accepts an
/// interpolated step when it is short enough relative to the previous steps;
/// otherwise it bisects. Convergence is therefore guaranteed for any
/// continuous function with a sign change on `[a, b]`.
///
/// # Errors
///
/// * `InvalidBracket` if `a >= b` or either bound is not finite
/// * `SameSign` if `f(a)` and `f(b)` have the same sign
/// * `NonFinite` if `f` produces NaN or an infinity
/// * `DidNotConverge` if `options.max_iter` is exhausted
pub fn brentq<F>(f: F, a: f64, b: f64, options: &RootOptions) -> Result<RootResult, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    let (fa, fb) = check_bracket(&f, a, b)?;

    if fa == 0.0 {
        return Ok(RootResult {
            root: a,
            function_value: fa,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(RootResult {
            root: b,
            function_value: fb,
            iterations: 0,
        });
    }

    let (mut xpre, mut fpre) = (a, fa);
    let (mut xcur, mut fcur) = (b, fb);
    let (mut xblk, mut fblk) = (0.0, 0.0);
    let (mut spre, mut scur) = (0.0_f64, 0.0_f64);

    for iter in 0..options.max_iter {
        if fpre != 0.0 && fcur != 0.0 && (fpre.is_sign_negative() != fcur.is_sign_negative()) {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }

        // Keep the best estimate in xcur.
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = 0.5 * (options.xtol + options.rtol * xcur.abs());
        let sbis = 0.5 * (xblk - xcur);

        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(RootResult {
                root: xcur,
                function_value: fcur,
                iterations: iter,
            });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };

            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }

        fcur = f(xcur);
        if !fcur.is_finite() {
            return Err(RootFindingError::NonFinite { x: xcur });
        }
    }

    Err(RootFindingError::DidNotConverge {
        iterations: options.max_iter,
    })
}

/// Plain bisection.
///
/// Linear convergence, roughly `log2((b - a) / xtol)` iterations.
///
/// # Errors
///
/// Same conditions as [`brentq`].
pub fn bisect<F>(f: F, a: f64, b: f64, options: &RootOptions) -> Result<RootResult, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    let (fa, fb) = check_bracket(&f, a, b)?;

    if fa == 0.0 {
        return Ok(RootResult {
            root: a,
            function_value: fa,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(RootResult {
            root: b,
            function_value: fb,
            iterations: 0,
        });
    }

    let mut left = a;
    let mut right = b;
    let mut f_left = fa;

    for iter in 0..options.max_iter {
        let mid = 0.5 * (left + right);
        let f_mid = f(mid);
        if !f_mid.is_finite() {
            return Err(RootFindingError::NonFinite { x: mid });
        }

        let width = right - left;
        if f_mid == 0.0 || 0.5 * width < 0.5 * (options.xtol + options.rtol * mid.abs()) {
            return Ok(RootResult {
                root: mid,
                function_value: f_mid,
                iterations: iter + 1,
            });
        }

        if (f_mid > 0.0) == (f_left > 0.0) {
            left = mid;
            f_left = f_mid;
        } else {
            right = mid;
        }
    }

    Err(RootFindingError::DidNotConverge {
        iterations: options.max_iter,
    })
}
