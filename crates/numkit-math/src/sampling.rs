//! Function abstraction and evenly spaced sampling.
//!
//! [`RealFunction`] is the seam every other layer evaluates through: study
//! functions, closures over captured parameters, and interpolations all
//! implement it, which lets [`function_error`] compare any two of them.

use std::fmt;

use crate::error::{MathError, MathResult};

/// Largest buffer of `f64` values a `Vec` can hold.
pub(crate) const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// A scalar real-valued function with an optional display label.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Returns the label used in reports and plots.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A boxed closure with an optional name.
///
/// Any captured state (such as the target of a square root) lives in the
/// closure itself.
///
/// # Example
///
/// ```rust
/// use numkit_math::sampling::{Function, RealFunction};
///
/// let k = 2.0;
/// let f = Function::named("x**2 - k", move |x| x * x - k);
/// assert_eq!(f.eval(2.0), 2.0);
/// assert_eq!(f.name(), Some("x**2 - k"));
/// ```
pub struct Function<'a> {
    name: Option<String>,
    eval: Box<dyn Fn(f64) -> f64 + 'a>,
}

impl<'a> Function<'a> {
    /// Wraps an unnamed closure.
    pub fn new(eval: impl Fn(f64) -> f64 + 'a) -> Self {
        Self {
            name: None,
            eval: Box::new(eval),
        }
    }

    /// Wraps a closure with a display name.
    pub fn named(name: impl Into<String>, eval: impl Fn(f64) -> f64 + 'a) -> Self {
        Self {
            name: Some(name.into()),
            eval: Box::new(eval),
        }
    }
}

impl RealFunction for Function<'_> {
    fn eval(&self, x: f64) -> f64 {
        (self.eval)(x)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Samples of a function on an evenly spaced grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunction {
    name: Option<String>,
    start: f64,
    end: f64,
    sampling_interval: f64,
    samples: Vec<f64>,
}

impl SampledFunction {
    /// Label inherited from the sampled function.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// First sample position.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// `start + n * sampling_interval`.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Grid spacing.
    pub fn sampling_interval(&self) -> f64 {
        self.sampling_interval
    }

    /// The sampled values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Position of sample `i`.
    pub fn x(&self, i: usize) -> f64 {
        self.start + self.sampling_interval * i as f64
    }

    /// Positions of every sample.
    pub fn xs(&self) -> Vec<f64> {
        (0..self.samples.len()).map(|i| self.x(i)).collect()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().enumerate().map(|(i, &y)| (self.x(i), y))
    }

    /// Forward first differences divided by the sampling interval.
    ///
    /// The result has one sample fewer, is named `(name)'` and ends one
    /// interval earlier.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 samples exist.
    pub fn derivative(&self) -> MathResult<SampledFunction> {
        if self.samples.len() < 2 {
            return Err(MathError::insufficient_data(2, self.samples.len()));
        }
        let samples = self
            .samples
            .windows(2)
            .map(|w| (w[1] - w[0]) / self.sampling_interval)
            .collect();
        Ok(SampledFunction {
            name: self.name.as_ref().map(|n| format!("({n})'")),
            start: self.start,
            end: self.end - self.sampling_interval,
            sampling_interval: self.sampling_interval,
            samples,
        })
    }
}

fn sample_grid(function: &dyn RealFunction, start: f64, interval: f64, n: usize) -> SampledFunction {
    let samples = (0..n)
        .map(|i| function.eval(start + interval * i as f64))
        .collect();
    SampledFunction {
        name: function.name().map(str::to_owned),
        start,
        end: start + n as f64 * interval,
        sampling_interval: interval,
        samples,
    }
}

/// Samples `function` every `interval` from `start`.
///
/// The sample count is `floor((end - start) / interval) + 1` and the
/// returned `end` is recomputed as `start + n * interval`, which may lie
/// past the requested end by less than one interval.
///
/// # Errors
///
/// Returns an error if `start >= end`, `interval` is not a positive
/// finite number, or the grid would need more samples than fit in memory.
pub fn sample_values(
    function: &dyn RealFunction,
    start: f64,
    end: f64,
    interval: f64,
) -> MathResult<SampledFunction> {
    if !(start < end) {
        return Err(MathError::empty_interval(start, end));
    }
    if !(interval > 0.0 && interval.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "sampling interval must be positive and finite, got {interval}"
        )));
    }
    let count = ((end - start) / interval).floor();
    if !(count < MAX_SAMPLES as f64) {
        return Err(MathError::invalid_input(format!(
            "sampling [{start}, {end}] every {interval} needs too many points"
        )));
    }
    Ok(sample_grid(function, start, interval, count as usize + 1))
}

/// Samples `function` at exactly `segments + 1` evenly spaced points.
///
/// Unlike [`sample_values`], the count does not go through a floor and so
/// cannot lose the last point to rounding.
pub fn sample_segments(
    function: &dyn RealFunction,
    start: f64,
    end: f64,
    segments: usize,
) -> MathResult<SampledFunction> {
    if !(start < end) {
        return Err(MathError::empty_interval(start, end));
    }
    if segments == 0 {
        return Err(MathError::invalid_input("at least one segment is required"));
    }
    if segments >= MAX_SAMPLES {
        return Err(MathError::invalid_input(format!("{segments} segments are too many")));
    }
    let interval = (end - start) / segments as f64;
    Ok(sample_grid(function, start, interval, segments + 1))
}

/// Normalized root-sum-square difference between two functions.
///
/// Both functions are sampled on the same grid of spacing
/// `(end - start) / points` and the result is
/// `sqrt(Σ(f1 - f2)² / Σf1²)`.
///
/// # Example
///
/// ```rust
/// use numkit_math::sampling::{function_error, Function};
///
/// let f = Function::new(|x| x);
/// let g = Function::new(|x| 1.1 * x);
/// let err = function_error(&f, &g, 0.0, 1.0, 100).unwrap();
/// assert!((err - 0.1).abs() < 1e-12);
/// ```
pub fn function_error(
    reference: &dyn RealFunction,
    candidate: &dyn RealFunction,
    start: f64,
    end: f64,
    points: u64,
) -> MathResult<f64> {
    if !(start < end) {
        return Err(MathError::empty_interval(start, end));
    }
    if points == 0 {
        return Err(MathError::invalid_input("at least one point is required"));
    }
    let interval = (end - start) / points as f64;
    let reference = sample_values(reference, start, end, interval)?;
    let candidate = sample_values(candidate, start, end, interval)?;

    let (difference2, reference2) = reference
        .samples()
        .iter()
        .zip(candidate.samples())
        .fold((0.0, 0.0), |(d2, r2), (&r, &c)| (d2 + (r - c).powi(2), r2 + r * r));

    Ok((difference2 / reference2).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_values() {
        let f = Function::named("square", |x| x * x);
        let sampled = sample_values(&f, 0.0, 1.0, 0.25).unwrap();

        assert_eq!(sampled.len(), 5);
        assert_eq!(sampled.samples(), &[0.0, 0.0625, 0.25, 0.5625, 1.0]);
        assert_eq!(sampled.name(), Some("square"));
        assert_relative_eq!(sampled.end(), 1.25);
    }

    #[test]
    fn test_sample_values_partial_interval() {
        let f = Function::new(|x| x);
        let sampled = sample_values(&f, 0.0, 1.0, 0.3).unwrap();

        // floor(1 / 0.3) + 1 = 4 samples, ending past the requested end
        assert_eq!(sampled.len(), 4);
        assert_relative_eq!(sampled.end(), 1.2, epsilon = 1e-12);
        assert_eq!(sampled.name(), None);
    }

    #[test]
    fn test_sample_values_invalid() {
        let f = Function::new(|x| x);
        assert!(sample_values(&f, 1.0, 1.0, 0.1).is_err());
        assert!(sample_values(&f, 2.0, 1.0, 0.1).is_err());
        assert!(sample_values(&f, 0.0, 1.0, 0.0).is_err());
        assert!(sample_values(&f, 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_sample_values_too_many_points() {
        let f = Function::new(|x| x);
        assert!(matches!(
            sample_values(&f, 0.0, 1.0, 1e-300),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            sample_segments(&f, 0.0, 1.0, usize::MAX),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(function_error(&f, &f, 0.0, 1.0, u64::MAX).is_err());
    }

    #[test]
    fn test_sample_segments_exact_count() {
        let f = Function::new(|x| x);
        for segments in [3, 5, 7, 10, 20, 49] {
            let sampled = sample_segments(&f, -5.0, 5.0, segments).unwrap();
            assert_eq!(sampled.len(), segments + 1);
            assert_relative_eq!(sampled.samples()[0], -5.0);
        }
        assert!(sample_segments(&f, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_derivative() {
        let f = Function::named("f", |x| 3.0 * x + 1.0);
        let sampled = sample_values(&f, 0.0, 2.0, 0.5).unwrap();
        let derivative = sampled.derivative().unwrap();

        assert_eq!(derivative.len(), sampled.len() - 1);
        assert_eq!(derivative.name(), Some("(f)'"));
        assert_relative_eq!(derivative.end(), sampled.end() - 0.5);
        for &d in derivative.samples() {
            assert_relative_eq!(d, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_needs_two_samples() {
        let f = Function::new(|x| x);
        let single = sample_values(&f, 0.0, 0.5, 1.0).unwrap();

        assert_eq!(single.len(), 1);
        assert!(matches!(
            single.derivative(),
            Err(MathError::InsufficientData {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_function_error_identical() {
        let f = Function::new(|x: f64| x.sin());
        let g = Function::new(|x: f64| x.sin());

        assert_eq!(function_error(&f, &g, 0.0, 3.0, 1000).unwrap(), 0.0);
    }

    #[test]
    fn test_function_error_is_relative() {
        let f = Function::new(|x: f64| 2.0 + x.cos());
        let g = Function::new(|x: f64| 0.9 * (2.0 + x.cos()));

        let err = function_error(&f, &g, -1.0, 1.0, 500).unwrap();
        assert_relative_eq!(err, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_function_error_invalid_range() {
        let f = Function::new(|x| x);
        assert!(function_error(&f, &f, 1.0, 0.0, 10).is_err());
        assert!(function_error(&f, &f, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_closure_captures_context() {
        let k = 9.0;
        let f = Function::new(move |x| x * x - k);
        assert_eq!(f.eval(3.0), 0.0);
        assert!(format!("{f:?}").contains("Function"));
    }
}
