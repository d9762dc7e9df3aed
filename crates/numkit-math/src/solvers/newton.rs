//! Newton-Raphson root-finding and its multiple-root variants.
//!
//! All three methods share one iteration driver. Each step proposes the next
//! iterate; the relative change `|(x₊ - x) / x₊|` is the per-iteration error,
//! and the loop stops once that error drops below the configured tolerance
//! or the iteration budget runs out. The reported error is half of the last
//! relative change.

use crate::error::{MathError, MathResult};
use crate::solvers::{ErrorHistory, RootResult, SolverConfig};

/// One step rule of the Newton family.
trait Step {
    /// Proposes the next iterate from `x`, given `f(x) != 0`.
    fn next(&mut self, x: f64, fx: f64) -> MathResult<f64>;

    /// Evaluates the target function.
    fn eval(&self, x: f64) -> f64;

    /// Observes iteration `iteration` after its error was recorded.
    fn observe(&mut self, _iteration: u32, _history: &ErrorHistory) {}
}

fn iterate<S: Step>(step: &mut S, x0: f64, config: &SolverConfig) -> MathResult<RootResult> {
    if config.max_iterations == 0 {
        return Err(MathError::invalid_input("max_iterations must be at least 1"));
    }

    let mut history = ErrorHistory::default();
    let mut x = x0;
    let mut value = x0;
    let mut error = f64::NAN;
    let mut iterations = 0;

    while iterations != config.max_iterations {
        let fx = step.eval(x);
        if fx == 0.0 {
            value = x;
            error = 0.0;
            break;
        }

        value = step.next(x, fx)?;
        if !value.is_finite() {
            return Err(MathError::Diverged { iterations, last: x });
        }

        error = ((value - x) / value).abs();
        if error < config.tolerance {
            break;
        }

        history.push(error);
        step.observe(iterations, &history);
        x = value;
        iterations += 1;
    }

    if iterations == config.max_iterations {
        log::debug!(
            "iteration budget of {} exhausted at x = {value} (relative step {error:.3e})",
            config.max_iterations
        );
    }

    Ok(RootResult {
        value,
        error: error / 2.0,
        iterations,
        convergence_rate: history.reported_order(iterations),
    })
}

struct Plain<F, DF> {
    f: F,
    df: DF,
}

impl<F, DF> Plain<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn scaled_step(&self, x: f64, fx: f64, multiplier: f64) -> MathResult<f64> {
        let dfx = (self.df)(x);
        if dfx == 0.0 {
            return Err(MathError::DivisionByZero { x, value: dfx });
        }
        Ok(x - multiplier * fx / dfx)
    }
}

impl<F, DF> Step for Plain<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn next(&mut self, x: f64, fx: f64) -> MathResult<f64> {
        self.scaled_step(x, fx, 1.0)
    }

    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

struct Altered<F, DF, DDF> {
    f: F,
    df: DF,
    ddf: DDF,
}

impl<F, DF, DDF> Step for Altered<F, DF, DDF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    DDF: Fn(f64) -> f64,
{
    fn next(&mut self, x: f64, fx: f64) -> MathResult<f64> {
        let dfx = (self.df)(x);
        let denominator = dfx * dfx - fx * (self.ddf)(x);
        if denominator == 0.0 {
            return Err(MathError::DivisionByZero {
                x,
                value: denominator,
            });
        }
        Ok(x - fx * dfx / denominator)
    }

    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

struct Adjusting<F, DF> {
    plain: Plain<F, DF>,
    multiplier: u32,
    adjusting: bool,
}

impl<F, DF> Step for Adjusting<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn next(&mut self, x: f64, fx: f64) -> MathResult<f64> {
        self.plain.scaled_step(x, fx, f64::from(self.multiplier))
    }

    fn eval(&self, x: f64) -> f64 {
        self.plain.eval(x)
    }

    fn observe(&mut self, iteration: u32, history: &ErrorHistory) {
        if !self.adjusting || iteration <= 2 || iteration % 3 != 0 {
            return;
        }
        match history.order() {
            Some(order) if order < 2 => {
                self.multiplier += 1;
                log::trace!("iteration {iteration}: order {order}, multiplier now {}", self.multiplier);
            }
            _ => self.adjusting = false,
        }
    }
}

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`, which converges
/// quadratically near a simple root and only linearly near a repeated one.
///
/// Landing exactly on a root returns it with error 0. Running out of
/// iterations is not an error: the last iterate is returned and the caller
/// can compare `iterations` against the budget.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `x0` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `f'` vanishes at a non-root
/// iterate, [`MathError::Diverged`] on a non-finite iterate, and
/// [`MathError::InvalidInput`] for a zero iteration budget.
///
/// # Example
///
/// ```rust
/// use numkit_math::solvers::{newton, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.value - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton<F, DF>(f: F, df: DF, x0: f64, config: &SolverConfig) -> MathResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    iterate(&mut Plain { f, df }, x0, config)
}

/// Newton's method applied to `f / f'`.
///
/// The step `x - f·f' / (f'² - f·f'')` keeps quadratic convergence at roots
/// of any multiplicity, at the cost of a second derivative.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `f'² - f·f''` vanishes, plus the
/// errors of [`newton`].
pub fn altered_newton<F, DF, DDF>(
    f: F,
    df: DF,
    ddf: DDF,
    x0: f64,
    config: &SolverConfig,
) -> MathResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    DDF: Fn(f64) -> f64,
{
    iterate(&mut Altered { f, df, ddf }, x0, config)
}

/// Result of [`adjusting_newton`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedRoot {
    /// The root estimate and iteration statistics.
    pub result: RootResult,
    /// Step multiplier in effect when the iteration stopped. For a root of
    /// multiplicity `m` this settles at `m`.
    pub multiplier: u32,
}

/// Newton's method with a step multiplier learned from the convergence order.
///
/// Steps are `x - m·f(x) / f'(x)` starting from `m = 1`. After every third
/// iteration past the second, the empirical order is checked: while it
/// rounds below 2 the multiplier is raised by one, and once it reaches 2 (or
/// cannot be estimated) adjustment stops for good.
///
/// # Errors
///
/// Same as [`newton`].
///
/// # Example
///
/// ```rust
/// use numkit_math::solvers::{adjusting_newton, SolverConfig};
///
/// // (x - 4)^2 has a double root
/// let f = |x: f64| (x - 4.0).powi(2);
/// let df = |x: f64| 2.0 * (x - 4.0);
///
/// let adjusted = adjusting_newton(f, df, 5.0, &SolverConfig::default()).unwrap();
/// assert_eq!(adjusted.multiplier, 2);
/// assert!((adjusted.result.value - 4.0).abs() < 1e-6);
/// ```
pub fn adjusting_newton<F, DF>(f: F, df: DF, x0: f64, config: &SolverConfig) -> MathResult<AdjustedRoot>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut step = Adjusting {
        plain: Plain { f, df },
        multiplier: 1,
        adjusting: true,
    };
    let result = iterate(&mut step, x0, config)?;
    Ok(AdjustedRoot {
        result,
        multiplier: step.multiplier,
    })
}
