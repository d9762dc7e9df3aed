//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::RootResult;

/// Bisection root-finding algorithm.
///
/// Repeatedly halves `[x0, x1]`, keeping the half whose endpoints still
/// bracket a sign change. The reported value is the midpoint of the final
/// bracket and the error is its half-width, so the loop stops once the
/// half-width is at most `tolerance / 2`.
///
/// An endpoint that evaluates to exactly zero is returned with error 0.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - Lower bound of the bracket
/// * `x1` - Upper bound of the bracket
/// * `tolerance` - Full width the bracket must shrink below
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `x0 >= x1` or the tolerance is
/// negative, and [`MathError::InvalidBracket`] if `f(x0)` and `f(x1)` have
/// the same strict sign.
///
/// # Example
///
/// ```rust
/// use numkit_math::solvers::bisection;
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, 1e-10).unwrap();
/// assert!((result.value - std::f64::consts::SQRT_2).abs() <= result.error);
/// ```
pub fn bisection<F>(f: F, x0: f64, x1: f64, tolerance: f64) -> MathResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !(x0 < x1) {
        return Err(MathError::empty_interval(x0, x1));
    }
    if !(tolerance >= 0.0) {
        return Err(MathError::invalid_input(format!(
            "tolerance must be non-negative, got {tolerance}"
        )));
    }

    let (mut lo, mut hi) = (x0, x1);
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Both sides are in +/- form
    let half_tolerance = tolerance / 2.0;
    let mut value = (lo + hi) / 2.0;
    let mut error = (hi - lo) / 2.0;
    let mut iterations = 0;

    while error > half_tolerance {
        error /= 2.0;
        iterations += 1;

        if f_lo == 0.0 {
            value = lo;
            error = 0.0;
            break;
        }
        if f_hi == 0.0 {
            value = hi;
            error = 0.0;
            break;
        }

        let f_mid = f(value);
        if f_lo * f_mid < 0.0 {
            hi = value;
            f_hi = f_mid;
        } else {
            lo = value;
            f_lo = f_mid;
        }
        value = (lo + hi) / 2.0;
    }

    Ok(RootResult {
        value,
        error,
        iterations,
        convergence_rate: Some(1),
    })
}
