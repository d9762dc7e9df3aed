//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// An iteration produced a non-finite iterate.
    #[error("Iteration diverged after {iterations} iterations (last finite iterate: {last})")]
    Diverged {
        /// Number of completed iterations.
        iterations: u32,
        /// The last finite iterate.
        last: f64,
    },

    /// Division by zero during an iteration step.
    #[error("Division by zero at x = {x} (denominator: {value:.2e})")]
    DivisionByZero {
        /// The iterate at which the denominator vanished.
        x: f64,
        /// The vanishing denominator.
        value: f64,
    },

    /// Matrix is singular (not invertible).
    #[error("Singular matrix: zero or non-finite pivot in column {column}")]
    SingularMatrix {
        /// 1-based column whose pivot could not be normalized.
        column: usize,
    },

    /// Matrix dimensions are incompatible.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an empty-interval error for `[start, end]`.
    #[must_use]
    pub fn empty_interval(start: f64, end: f64) -> Self {
        Self::invalid_input(format!("interval [{start}, {end}] is empty"))
    }
}
