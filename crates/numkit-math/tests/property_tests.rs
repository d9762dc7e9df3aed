//! Property-based tests for the numerical invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Transposing twice is the identity
//! - Multiplication fails exactly when the inner dimensions differ
//! - A diagonally dominant matrix times its inverse is the identity
//! - Bisection brackets a true root within its reported error
//! - Square roots lie within their reported error

use numkit_math::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn matrix_strategy(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-100.0..100.0f64, rows * cols)
            .prop_map(move |data| Matrix::from_row_slice(rows, cols, &data).unwrap())
    })
}

/// Square matrices whose diagonal dominates each row.
fn dominant_strategy(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim).prop_flat_map(|n| {
        prop::collection::vec(-1.0..1.0f64, n * n).prop_map(move |mut data| {
            for i in 0..n {
                let sign = if data[i * n + i] < 0.0 { -1.0 } else { 1.0 };
                data[i * n + i] = sign * (n as f64 + 1.0);
            }
            Matrix::from_row_slice(n, n, &data).unwrap()
        })
    })
}

// =============================================================================
// PROPERTY: MATRIX ENGINE
// =============================================================================

proptest! {
    #[test]
    fn property_transpose_twice_is_identity(m in matrix_strategy(6)) {
        let t = m.transpose();
        prop_assert_eq!(t.rows(), m.cols());
        prop_assert_eq!(t.cols(), m.rows());
        prop_assert_eq!(t.transpose(), m);
    }

    #[test]
    fn property_multiply_fails_iff_inner_dimensions_differ(
        a in matrix_strategy(5),
        b in matrix_strategy(5),
    ) {
        let product = a.multiply(&b);
        if a.cols() == b.rows() {
            let product = product.unwrap();
            prop_assert_eq!(product.rows(), a.rows());
            prop_assert_eq!(product.cols(), b.cols());
        } else {
            let is_mismatch = matches!(product, Err(MathError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn property_inverse_times_matrix_is_identity(m in dominant_strategy(6)) {
        let inverse = m.inverse().unwrap();
        let product = inverse.multiply(&m).unwrap();

        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!(
                    (product[(i, j)] - expected).abs() < 1e-10,
                    "entry ({}, {}) = {}",
                    i,
                    j,
                    product[(i, j)]
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: SOLVERS
// =============================================================================

proptest! {
    #[test]
    fn property_bisection_error_bound(
        root in -10.0..10.0f64,
        below in 0.01..5.0f64,
        above in 0.01..5.0f64,
        tolerance in 1e-10..1e-2f64,
    ) {
        let f = |x: f64| x - root;
        let (a, b) = (root - below, root + above);

        let result = bisection(f, a, b, tolerance).unwrap();

        prop_assert!(result.error <= tolerance / 2.0);
        prop_assert!((result.value - root).abs() <= result.error + 1e-12);
        let halved = (b - a) / 2.0 * 0.5f64.powi(result.iterations as i32);
        prop_assert!(result.error <= halved * (1.0 + 1e-12));
    }

    #[test]
    fn property_square_root_within_error(k in 1.0..1e6f64) {
        let root = square_root(k).unwrap();
        prop_assert!((root.value - k.sqrt()).abs() <= root.error);
    }

    #[test]
    fn property_newton_simple_root_converges(root in 0.5..20.0f64) {
        let f = |x: f64| x * x - root * root;
        let df = |x: f64| 2.0 * x;

        let result = newton(f, df, root * 1.5, &SolverConfig::default()).unwrap();

        prop_assert!((result.value - root).abs() < 1e-6 * root);
        prop_assert!(result.iterations < SolverConfig::default().max_iterations);
    }
}

// =============================================================================
// PROPERTY: SAMPLING
// =============================================================================

proptest! {
    #[test]
    fn property_function_error_of_scaled_copy(scale in 0.1..2.0f64) {
        let f = Function::new(|x: f64| 2.0 + x.sin());
        let g = Function::new(move |x: f64| scale * (2.0 + x.sin()));

        let error = function_error(&f, &g, 0.0, 6.0, 200).unwrap();

        prop_assert!((error - (1.0 - scale).abs()).abs() < 1e-10);
    }
}
