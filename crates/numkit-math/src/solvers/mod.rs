//! Root-finding algorithms.
//!
//! This module provides numerical solvers for scalar equations:
//!
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`newton`]: Quadratic convergence for simple roots, requires the derivative
//! - [`altered_newton`]: Halley-style step using the second derivative, recovers
//!   fast convergence near roots of higher multiplicity
//! - [`adjusting_newton`]: Newton with a step multiplier raised while the
//!   observed convergence order stays below 2
//! - [`square_root`]: Bisection-seeded Newton refinement of `x² - k`
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Newton | Fast (quadratic) | May diverge | f' |
//! | Altered Newton | Fast, also at multiple roots | May diverge | f', f'' |
//! | Adjusting Newton | Fast once adjusted | May diverge | f' |
//!
//! Every solver reports a [`RootResult`] carrying an error bound and an
//! empirical convergence order.
//!
//! # Example
//!
//! ```rust
//! use numkit_math::solvers::{bisection, newton, SolverConfig};
//!
//! let f = |x: f64| (-x / 5.0).exp() - x.sin();
//! let df = |x: f64| -(-x / 5.0).exp() / 5.0 - x.cos();
//!
//! let bracket = bisection(f, 0.5, 1.5, 1e-7).unwrap();
//! let refined = newton(f, df, bracket.value, &SolverConfig::default()).unwrap();
//!
//! assert!((bracket.value - refined.value).abs() <= bracket.error + refined.error * refined.value);
//! ```

mod bisection;
mod newton;
mod square_root;

pub use bisection::bisection;
pub use newton::{adjusting_newton, altered_newton, newton, AdjustedRoot};
pub use square_root::{square_root, SQUARE_ROOT_MAX_ITERATIONS, SQUARE_ROOT_TOLERANCE};

/// Default relative tolerance for the Newton family.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for the Newton family.
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Configuration for iterative root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Relative step size below which the iteration stops.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// The root estimate.
    pub value: f64,
    /// Half-width of the uncertainty bound (non-negative).
    pub error: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Empirical convergence order, rounded. `None` when fewer than three
    /// iterations ran or the estimate is not finite.
    pub convergence_rate: Option<i32>,
}

/// The last three relative errors of an iteration.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ErrorHistory {
    errors: [f64; 3],
}

impl ErrorHistory {
    pub(crate) fn push(&mut self, error: f64) {
        self.errors = [self.errors[1], self.errors[2], error];
    }

    /// `round(ln(e₂/e₁) / ln(e₁/e₀))`, or `None` if not finite.
    pub(crate) fn order(&self) -> Option<i32> {
        let [e0, e1, e2] = self.errors;
        let order = ((e2 / e1).ln() / (e1 / e0).ln()).round();
        if order.is_finite() {
            Some(order as i32)
        } else {
            None
        }
    }

    /// The order estimate reported after `iterations` iterations.
    pub(crate) fn reported_order(&self, iterations: u32) -> Option<i32> {
        if iterations < 3 {
            None
        } else {
            self.order()
        }
    }
}
