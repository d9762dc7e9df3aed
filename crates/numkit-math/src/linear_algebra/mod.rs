//! Linear algebra utilities.
//!
//! A minimal dense matrix engine: allocation, row assignment, transpose,
//! multiplication and Gauss-Jordan inversion, plus the normal-equations
//! solve used by least-squares fitting.

mod matrix;

pub use matrix::Matrix;

use crate::error::{MathError, MathResult};

/// Solves the least-squares normal equations `(XᵗX)⁻¹ Xᵗ y`.
///
/// Takes the design matrix already transposed (one row per basis function,
/// one column per observation) and the observations as a column vector.
/// The intermediates are dropped as soon as they are consumed, so a failure
/// at any step leaves nothing behind.
///
/// # Arguments
///
/// * `design_transpose` - `Xᵗ`, of shape `(basis, observations)`
/// * `observations` - `y`, of shape `(observations, 1)`
///
/// # Returns
///
/// The fitted parameter column of shape `(basis, 1)`.
pub fn solve_normal_equations(design_transpose: &Matrix, observations: &Matrix) -> MathResult<Matrix> {
    if observations.cols() != 1 {
        return Err(MathError::invalid_input(format!(
            "observations must be a column vector, got {} columns",
            observations.cols()
        )));
    }

    let normal = {
        let design = design_transpose.transpose();
        design_transpose.multiply(&design)?
    };
    let normal_inverse = normal.inverse()?;
    let projection = normal_inverse.multiply(design_transpose)?;
    projection.multiply(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_equations_exact_line() {
        // y = 2 + 3x sampled without noise
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 + 3.0 * x).collect();

        let mut xt = Matrix::new(2, xs.len()).unwrap();
        xt.set_row(0, 1.0).unwrap();
        xt.set_row_vector(1, &xs).unwrap();
        let y = Matrix::column_vector(&ys).unwrap();

        let beta = solve_normal_equations(&xt, &y).unwrap();

        assert_eq!(beta.rows(), 2);
        assert_eq!(beta.cols(), 1);
        assert_relative_eq!(beta[(0, 0)], 2.0, epsilon = 1e-10);
        assert_relative_eq!(beta[(1, 0)], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_normal_equations_mean() {
        // A single constant basis fits the mean.
        let ys = [1.0, 2.0, 6.0];
        let mut xt = Matrix::new(1, ys.len()).unwrap();
        xt.set_row(0, 1.0).unwrap();
        let y = Matrix::column_vector(&ys).unwrap();

        let beta = solve_normal_equations(&xt, &y).unwrap();
        assert_relative_eq!(beta[(0, 0)], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_equations_rank_deficient() {
        // Two identical basis rows make XᵗX singular.
        let xs = [1.0, 2.0, 3.0];
        let mut xt = Matrix::new(2, xs.len()).unwrap();
        xt.set_row_vector(0, &xs).unwrap();
        xt.set_row_vector(1, &xs).unwrap();
        let y = Matrix::column_vector(&xs).unwrap();

        assert!(solve_normal_equations(&xt, &y).is_err());
    }

    #[test]
    fn test_normal_equations_shape_errors() {
        let xt = Matrix::new(2, 3).unwrap();
        let wide = Matrix::new(3, 2).unwrap();
        let short = Matrix::new(2, 1).unwrap();

        assert!(matches!(
            solve_normal_equations(&xt, &wide),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(solve_normal_equations(&xt, &short).is_err());
    }
}
