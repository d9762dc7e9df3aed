//! Root-finding experiment.
//!
//! Brackets the four roots of `e^(-x/5) - sin x` on [0, 10] by bisection,
//! refines them with Newton's method, then compares plain and altered
//! Newton on the quadruple root of `(x - 3)⁴ sin x`.

use anyhow::Result;
use numkit_math::sampling::Function;
use numkit_math::solvers::{altered_newton, bisection, newton, SolverConfig};
use tracing::info;

use crate::commands::{Context, SolveRow};
use crate::functions::{
    exp_sin, exp_sin_derivative, quartic_sin, quartic_sin_derivative,
    quartic_sin_second_derivative, EXP_SIN, QUARTIC_SIN,
};
use crate::output::print_output;

/// Brackets containing exactly one root each.
const BRACKETS: [(f64, f64); 4] = [(0.5, 1.5), (2.0, 3.0), (6.0, 7.0), (9.0, 10.0)];

/// Newton starting points, one per bracket.
const GUESSES: [f64; 4] = [1.0, 2.5, 6.5, 9.9];

/// Starting point for the multiple-root comparison.
const MULTIPLE_ROOT_GUESS: f64 = 2.0;

/// Execute the roots command.
pub fn execute(ctx: &Context) -> Result<()> {
    let study = Function::named(EXP_SIN, exp_sin);
    ctx.export("1_visual_inspection", 0.0, 10.0, &[&study])?;

    let tolerance = ctx.config.tolerance;
    let mut rows = Vec::with_capacity(BRACKETS.len() * 2 + 2);
    let mut budgets = Vec::with_capacity(BRACKETS.len());

    for (a, b) in BRACKETS {
        let result = bisection(exp_sin, a, b, tolerance)?;
        budgets.push((result.iterations * 4).max(1));
        rows.push(SolveRow::new("bisection", EXP_SIN, format!("[{a}, {b}]"), &result));
    }
    info!("bisection located {} roots", rows.len());

    // Newton gets four times the iterations bisection needed on the same root
    for (guess, budget) in GUESSES.into_iter().zip(budgets) {
        let config = SolverConfig::new(tolerance, budget);
        let result = newton(exp_sin, exp_sin_derivative, guess, &config)?;
        rows.push(SolveRow::new("newton", EXP_SIN, guess.to_string(), &result));
    }

    let tight = SolverConfig::new(ctx.config.tight_tolerance, ctx.config.max_iterations);
    let plain = newton(quartic_sin, quartic_sin_derivative, MULTIPLE_ROOT_GUESS, &tight)?;
    rows.push(SolveRow::new(
        "newton",
        QUARTIC_SIN,
        MULTIPLE_ROOT_GUESS.to_string(),
        &plain,
    ));

    let altered = altered_newton(
        quartic_sin,
        quartic_sin_derivative,
        quartic_sin_second_derivative,
        MULTIPLE_ROOT_GUESS,
        &tight,
    )?;
    rows.push(SolveRow::new(
        "altered newton",
        QUARTIC_SIN,
        MULTIPLE_ROOT_GUESS.to_string(),
        &altered,
    ));
    info!(
        "multiple root: newton used {} iterations, altered newton {}",
        plain.iterations, altered.iterations
    );

    print_output("Root finding", &rows, ctx.format)
}
