//! Piecewise interpolants on an evenly spaced grid.
//!
//! Both methods store pre-scaled samples and blend the two neighbours of
//! `x`. Outside `[start, end]` they evaluate to NaN; points within rounding
//! distance of either end still count as inside.

use std::f64::consts::PI;

use crate::sampling::SampledFunction;

/// Samples divided by the grid spacing.
pub(super) fn linear_coefficients(samples: &SampledFunction) -> Vec<f64> {
    let h = samples.sampling_interval();
    samples.samples().iter().map(|y| y / h).collect()
}

/// Samples halved.
pub(super) fn cosine_coefficients(samples: &SampledFunction) -> Vec<f64> {
    samples.samples().iter().map(|y| y / 2.0).collect()
}

/// Grid position of `x`: its offset from `start` and the neighbouring knot
/// indices, clamped to the last knot.
fn locate(coefficients: &[f64], start: f64, h: f64, x: f64) -> (f64, usize, usize) {
    let last = coefficients.len() - 1;
    let offset = x - start;
    let t = offset / h;
    let i0 = (t.floor() as usize).min(last);
    let i1 = (t.ceil() as usize).min(last);
    (offset, i0, i1)
}

/// Slack allowed past either end, as a fraction of the knot spacing.
const EDGE_SLACK: f64 = 1e-9;

fn in_range(start: f64, end: f64, h: f64, x: f64) -> bool {
    let slack = h * EDGE_SLACK;
    x >= start - slack && x <= end + slack
}

/// Linear blend `c[i₀]·(h(i₀+1) - dx) - c[i₁]·(h·i₀ - dx)`.
pub(super) fn linear_value(coefficients: &[f64], start: f64, end: f64, h: f64, x: f64) -> f64 {
    if !in_range(start, end, h, x) {
        return f64::NAN;
    }
    let (offset, i0, i1) = locate(coefficients, start, h, x);
    let a = h * (i0 as f64 + 1.0) - offset;
    let b = h * i0 as f64 - offset;
    coefficients[i0] * a - coefficients[i1] * b
}

/// Raised-cosine blend `c[i₀]·(1 + cos πa) + c[i₁]·(1 + cos πb)`.
pub(super) fn cosine_value(coefficients: &[f64], start: f64, end: f64, h: f64, x: f64) -> f64 {
    if !in_range(start, end, h, x) {
        return f64::NAN;
    }
    let (offset, i0, i1) = locate(coefficients, start, h, x);
    let a = offset / h - i0 as f64;
    let b = offset / h - (i0 as f64 + 1.0);
    coefficients[i0] * (1.0 + (PI * a).cos()) + coefficients[i1] * (1.0 + (PI * b).cos())
}
