//! Function approximation by interpolation and least-squares fitting.
//!
//! Every method samples a [`RealFunction`] over `[start, end]` and produces
//! an [`Interpolation`] that borrows its source, so the approximation can be
//! evaluated, compared against the source, and sampled like any other
//! function.
//!
//! # Available Methods
//!
//! | Method | Representation | Outside `[start, end]` |
//! |--------|----------------|------------------------|
//! | [`Lagrange`](InterpolationMethod::Lagrange) | Monomial coefficients | Polynomial |
//! | [`PiecewiseLinear`](InterpolationMethod::PiecewiseLinear) | Samples / h | NaN |
//! | [`RaisedCosine`](InterpolationMethod::RaisedCosine) | Samples / 2 | NaN |
//! | [`LeastSquares`](InterpolationMethod::LeastSquares) | Monomial coefficients | Polynomial |
//!
//! The sampled methods place `order + 1` evenly spaced knots. Least squares
//! fits a polynomial of degree `order` to a dense grid instead.
//!
//! # Example
//!
//! ```rust
//! use numkit_math::interpolation::Interpolation;
//! use numkit_math::sampling::{Function, RealFunction};
//!
//! let runge = Function::named("1/(1+x**2)", |x| 1.0 / (1.0 + x * x));
//! let lagrange = Interpolation::lagrange(&runge, -5.0, 5.0, 10).unwrap();
//!
//! assert!((lagrange.value(0.0) - 1.0).abs() < 1e-12);
//! assert_eq!(lagrange.name(), Some("Lagrange Interpolation of 1/(1+x**2) (order 10)"));
//! ```

mod lagrange;
mod least_squares;
mod piecewise;

use std::fmt;

use crate::error::{MathError, MathResult};
use crate::sampling::{function_error, sample_segments, RealFunction};

/// Default number of least-squares sampling intervals.
pub const DEFAULT_LEAST_SQUARES_POINTS: usize = 524_288;

/// Default multiplier of the error grid density.
pub const DEFAULT_ERROR_POINT_MULTIPLIER: u64 = 524_288;

/// Interpolation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Single polynomial through every knot.
    Lagrange,
    /// Straight segments between knots.
    PiecewiseLinear,
    /// Half-cosine blends between knots.
    RaisedCosine,
    /// Least-squares polynomial over a dense grid.
    LeastSquares,
}

impl InterpolationMethod {
    /// All methods, in report order.
    pub const ALL: [InterpolationMethod; 4] = [
        InterpolationMethod::Lagrange,
        InterpolationMethod::PiecewiseLinear,
        InterpolationMethod::RaisedCosine,
        InterpolationMethod::LeastSquares,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InterpolationMethod::Lagrange => "Lagrange",
            InterpolationMethod::PiecewiseLinear => "Piecewise Linear",
            InterpolationMethod::RaisedCosine => "Raised Cosine",
            InterpolationMethod::LeastSquares => "Least Squares",
        }
    }

    /// Returns true if the coefficients are monomial coefficients.
    #[must_use]
    pub fn is_polynomial(self) -> bool {
        matches!(
            self,
            InterpolationMethod::Lagrange | InterpolationMethod::LeastSquares
        )
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sampling densities used when building and scoring interpolations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationConfig {
    /// Number of sampling intervals of the least-squares grid.
    pub least_squares_points: usize,
    /// The error grid has `order * error_point_multiplier + 1` points.
    pub error_point_multiplier: u64,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            least_squares_points: DEFAULT_LEAST_SQUARES_POINTS,
            error_point_multiplier: DEFAULT_ERROR_POINT_MULTIPLIER,
        }
    }
}

impl InterpolationConfig {
    /// Sets the least-squares grid size.
    #[must_use]
    pub fn with_least_squares_points(mut self, points: usize) -> Self {
        self.least_squares_points = points;
        self
    }

    /// Sets the error grid multiplier.
    #[must_use]
    pub fn with_error_point_multiplier(mut self, multiplier: u64) -> Self {
        self.error_point_multiplier = multiplier;
        self
    }
}

/// An approximation of a source function over `[start, end]`.
pub struct Interpolation<'f> {
    source: &'f dyn RealFunction,
    method: InterpolationMethod,
    name: Option<String>,
    start: f64,
    end: f64,
    order: usize,
    coefficients: Vec<f64>,
    sampling_interval: f64,
    error_point_multiplier: u64,
}

impl<'f> Interpolation<'f> {
    /// Builds an interpolation of `source` with the given method.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `start >= end` or, for the
    /// sampled methods, `order == 0`. Least-squares fitting also propagates
    /// any matrix failure, such as a singular normal matrix.
    pub fn new(
        method: InterpolationMethod,
        source: &'f dyn RealFunction,
        start: f64,
        end: f64,
        order: usize,
        config: &InterpolationConfig,
    ) -> MathResult<Self> {
        if !(start < end) {
            return Err(MathError::empty_interval(start, end));
        }
        if order == 0 && method != InterpolationMethod::LeastSquares {
            return Err(MathError::invalid_input(format!(
                "{method} interpolation needs an order of at least 1"
            )));
        }

        let (coefficients, sampling_interval) = if method == InterpolationMethod::LeastSquares {
            let coefficients =
                least_squares::fit(source, start, end, order, config.least_squares_points)?;
            (coefficients, (end - start) / config.least_squares_points as f64)
        } else {
            let samples = sample_segments(source, start, end, order)?;
            let coefficients = match method {
                InterpolationMethod::Lagrange => lagrange::coefficients(&samples),
                InterpolationMethod::PiecewiseLinear => piecewise::linear_coefficients(&samples),
                _ => piecewise::cosine_coefficients(&samples),
            };
            (coefficients, samples.sampling_interval())
        };

        let name = source
            .name()
            .map(|name| format!("{method} Interpolation of {name} (order {order})"));

        Ok(Self {
            source,
            method,
            name,
            start,
            end,
            order,
            coefficients,
            sampling_interval,
            error_point_multiplier: config.error_point_multiplier,
        })
    }

    /// Lagrange interpolation with default densities.
    pub fn lagrange(source: &'f dyn RealFunction, start: f64, end: f64, order: usize) -> MathResult<Self> {
        Self::new(
            InterpolationMethod::Lagrange,
            source,
            start,
            end,
            order,
            &InterpolationConfig::default(),
        )
    }

    /// Piecewise linear interpolation with default densities.
    pub fn piecewise_linear(
        source: &'f dyn RealFunction,
        start: f64,
        end: f64,
        order: usize,
    ) -> MathResult<Self> {
        Self::new(
            InterpolationMethod::PiecewiseLinear,
            source,
            start,
            end,
            order,
            &InterpolationConfig::default(),
        )
    }

    /// Raised cosine interpolation with default densities.
    pub fn raised_cosine(
        source: &'f dyn RealFunction,
        start: f64,
        end: f64,
        order: usize,
    ) -> MathResult<Self> {
        Self::new(
            InterpolationMethod::RaisedCosine,
            source,
            start,
            end,
            order,
            &InterpolationConfig::default(),
        )
    }

    /// Least-squares polynomial fit.
    pub fn least_squares(
        source: &'f dyn RealFunction,
        start: f64,
        end: f64,
        order: usize,
        config: &InterpolationConfig,
    ) -> MathResult<Self> {
        Self::new(InterpolationMethod::LeastSquares, source, start, end, order, config)
    }

    /// The method used.
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Label derived from the source name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Start of the interpolated interval.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the interpolated interval.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Requested order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Method-specific coefficients. For the polynomial methods these are
    /// `[c₀, c₁, …]` of `Σ cₖ xᵏ`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Knot spacing of the sampled methods, grid spacing for least squares.
    pub fn sampling_interval(&self) -> f64 {
        self.sampling_interval
    }

    /// Evaluates the interpolation at `x`.
    pub fn value(&self, x: f64) -> f64 {
        match self.method {
            InterpolationMethod::Lagrange | InterpolationMethod::LeastSquares => self
                .coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, c| acc * x + c),
            InterpolationMethod::PiecewiseLinear => piecewise::linear_value(
                &self.coefficients,
                self.start,
                self.end,
                self.sampling_interval,
                x,
            ),
            InterpolationMethod::RaisedCosine => piecewise::cosine_value(
                &self.coefficients,
                self.start,
                self.end,
                self.sampling_interval,
                x,
            ),
        }
    }

    /// Normalized RMS difference from the source over
    /// `order * error_point_multiplier + 1` points.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if the point count overflows and
    /// propagates sampling errors.
    pub fn error(&self) -> MathResult<f64> {
        let points = (self.order as u64)
            .checked_mul(self.error_point_multiplier)
            .and_then(|points| points.checked_add(1))
            .ok_or_else(|| {
                MathError::invalid_input(format!(
                    "error grid of order {} with multiplier {} overflows",
                    self.order, self.error_point_multiplier
                ))
            })?;
        function_error(self.source, self, self.start, self.end, points)
    }

    /// Renders the polynomial, highest power first, as
    /// `c x**n + ... + c x**0` with four significant decimals.
    ///
    /// Returns `None` for the piecewise methods.
    pub fn polynomial_terms(&self) -> Option<String> {
        if !self.method.is_polynomial() {
            return None;
        }
        let mut terms = String::new();
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            let sign = match (terms.is_empty(), c < 0.0) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            terms.push_str(&format!("{sign}{:.4E} x**{power}", c.abs()));
        }
        Some(terms)
    }
}

impl RealFunction for Interpolation<'_> {
    fn eval(&self, x: f64) -> f64 {
        self.value(x)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Debug for Interpolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolation")
            .field("method", &self.method)
            .field("name", &self.name)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("order", &self.order)
            .field("coefficients", &self.coefficients)
            .finish_non_exhaustive()
    }
}
