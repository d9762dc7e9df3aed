//! Lagrange polynomial coefficients.

use crate::sampling::SampledFunction;

/// Monomial coefficients `[c₀, c₁, …, cₙ]` of the polynomial through every
/// sample.
///
/// Each basis polynomial `yᵢ · Πⱼ≠ᵢ (x - xⱼ) / (xᵢ - xⱼ)` is expanded one
/// factor at a time and accumulated into the result. With evenly spaced
/// knots the denominator is `hⁿ · Πⱼ≠ᵢ (i - j)`.
pub(super) fn coefficients(samples: &SampledFunction) -> Vec<f64> {
    let n = samples.len();
    let h = samples.sampling_interval();
    let mut coefficients = vec![0.0; n];
    let mut basis = vec![0.0; n];

    for (i, &yi) in samples.samples().iter().enumerate() {
        basis.fill(0.0);
        basis[0] = yi;
        let mut degree = 0;
        let mut denominator = 1.0;

        for j in (0..n).filter(|&j| j != i) {
            denominator *= h * (i as f64 - j as f64);
            let root = samples.x(j);

            // basis *= (x - root)
            basis[degree + 1] = basis[degree];
            for l in (1..=degree).rev() {
                basis[l] = basis[l] * -root + basis[l - 1];
            }
            basis[0] *= -root;
            degree += 1;
        }

        for (c, b) in coefficients.iter_mut().zip(&basis) {
            *c += b / denominator;
        }
    }

    coefficients
}
