//! Square roots by bisection-seeded Newton refinement.

use crate::error::{MathError, MathResult};
use crate::solvers::{bisection, newton, RootResult, SolverConfig};

/// Relative tolerance of the Newton refinement.
pub const SQUARE_ROOT_TOLERANCE: f64 = 1e-7;

/// Iteration budget of the Newton refinement.
pub const SQUARE_ROOT_MAX_ITERATIONS: u32 = 256;

/// Splits `k > 0` as `4^e · m` with `m` in `[1, 4)`.
fn reduce(k: f64) -> (f64, i32) {
    let mut e = (k.log2() / 2.0).floor() as i32;
    // Two half steps keep the scale finite for subnormal and huge k
    let half = 2f64.powi(-e);
    let mut m = k * half * half;
    while m >= 4.0 {
        m /= 4.0;
        e += 1;
    }
    while m < 1.0 {
        m *= 4.0;
        e -= 1;
    }
    (m, e)
}

/// Computes `√k` as the positive root of `x² - k`.
///
/// `k` is first reduced to `4^e · m` with `m` in `[1, 4)`. A coarse
/// bisection over `[0, m]` with tolerance of one sixteenth of the bracket
/// seeds Newton's method on `x² - m`, and the root and its error are
/// scaled back by `2^e`. The returned error is absolute,
/// `max(newton_error · value, value · ε)`, and `iterations` counts both
/// phases. Exact powers of four, `0` included, are returned exactly with
/// no iterations.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `k` is negative or not finite.
///
/// # Example
///
/// ```rust
/// use numkit_math::solvers::square_root;
///
/// let root = square_root(2.0).unwrap();
/// assert!((root.value - std::f64::consts::SQRT_2).abs() <= root.error);
/// ```
pub fn square_root(k: f64) -> MathResult<RootResult> {
    if !(k >= 0.0 && k.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "square root requires a finite non-negative number, got {k}"
        )));
    }
    if k == 0.0 {
        return Ok(RootResult {
            value: 0.0,
            error: 0.0,
            iterations: 0,
            convergence_rate: None,
        });
    }

    let (m, e) = reduce(k);
    let scale = 2f64.powi(e);
    if m == 1.0 {
        return Ok(RootResult {
            value: scale,
            error: 0.0,
            iterations: 0,
            convergence_rate: None,
        });
    }

    let f = |x: f64| x * x - m;
    let df = |x: f64| 2.0 * x;

    let seed = bisection(f, 0.0, m, m / 16.0)?;
    if seed.error == 0.0 {
        return Ok(RootResult {
            value: seed.value * scale,
            ..seed
        });
    }

    let config = SolverConfig::new(SQUARE_ROOT_TOLERANCE, SQUARE_ROOT_MAX_ITERATIONS);
    let refined = newton(f, df, seed.value, &config)?;
    let value = refined.value;

    Ok(RootResult {
        value: value * scale,
        error: (refined.error * value).max(value * f64::EPSILON) * scale,
        iterations: seed.iterations + refined.iterations,
        convergence_rate: refined.convergence_rate,
    })
}
