//! Least-squares polynomial fit through the normal equations.

use crate::error::MathResult;
use crate::linear_algebra::{solve_normal_equations, Matrix};
use crate::sampling::{sample_segments, RealFunction};

/// Fits a degree-`order` polynomial to `points + 1` evenly spaced samples.
///
/// Row `k` of the transposed design matrix holds `xᵏ`, so the returned
/// column is the monomial coefficients `[c₀, …, c_order]`.
pub(super) fn fit(
    source: &dyn RealFunction,
    start: f64,
    end: f64,
    order: usize,
    points: usize,
) -> MathResult<Vec<f64>> {
    let samples = sample_segments(source, start, end, points)?;
    let xs = samples.xs();

    let mut design_transpose = Matrix::new(order + 1, xs.len())?;
    design_transpose.set_row(0, 1.0)?;
    for k in 1..=order {
        design_transpose.set_row_vector_power(k, &xs, k as f64)?;
    }
    let observations = Matrix::column_vector(samples.samples())?;

    let beta = solve_normal_equations(&design_transpose, &observations)?;
    log::debug!(
        "least-squares fit of order {order} over {} samples",
        samples.len()
    );
    Ok(beta.as_slice().to_vec())
}
