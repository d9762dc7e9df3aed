//! # Numkit Math
//!
//! Numerical building blocks for root-finding and function approximation
//! experiments.
//!
//! This crate provides:
//!
//! - **Sampling**: The [`RealFunction`](sampling::RealFunction) abstraction,
//!   evenly spaced sampling and the normalized RMS error between functions
//! - **Solvers**: Bisection, Newton and two multiple-root variants, and a
//!   bisection-seeded square root
//! - **Interpolation**: Lagrange, piecewise linear, raised cosine and
//!   least-squares approximations
//! - **Linear Algebra**: A dense matrix with Gauss-Jordan inversion and the
//!   least-squares normal equations
//!
//! ## Design Philosophy
//!
//! - **Explicit errors**: Every domain or numerical failure is a
//!   [`MathError`], never a NaN sentinel
//! - **Owned results**: Intermediates are dropped on the first failure
//! - **Diagnostics**: Solvers report error bounds and empirical convergence
//!   orders alongside the root

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod sampling;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolation, InterpolationConfig, InterpolationMethod};
    pub use crate::linear_algebra::{solve_normal_equations, Matrix};
    pub use crate::sampling::{
        function_error, sample_segments, sample_values, Function, RealFunction, SampledFunction,
    };
    pub use crate::solvers::{
        adjusting_newton, altered_newton, bisection, newton, square_root, AdjustedRoot,
        RootResult, SolverConfig,
    };
}

pub use error::{MathError, MathResult};
