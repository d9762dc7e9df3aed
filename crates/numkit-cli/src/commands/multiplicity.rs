//! Repeated-root experiment.
//!
//! Plain Newton slows to linear convergence on `(x - 4)^m sin x`, while
//! adjusting Newton learns the multiplicity and recovers.

use anyhow::Result;
use numkit_math::sampling::RealFunction;
use numkit_math::solvers::{adjusting_newton, newton};
use tracing::info;

use crate::commands::{Context, SolveRow};
use crate::functions::repeated_root;
use crate::output::print_output;

const POWERS: [i32; 2] = [2, 3];

const GUESS: f64 = 5.0;

/// Execute the multiplicity command.
pub fn execute(ctx: &Context) -> Result<()> {
    let config = ctx.config.solver_config();
    let mut rows = Vec::with_capacity(POWERS.len() * 2);

    for power in POWERS {
        let (f, df) = repeated_root(power);
        let name = f.name().unwrap_or_default().to_string();
        let eval = |x: f64| f.eval(x);

        let plain = newton(eval, df, GUESS, &config)?;
        let adjusted = adjusting_newton(eval, df, GUESS, &config)?;
        info!(
            "{name}: multiplier settled at {} after {} iterations",
            adjusted.multiplier, adjusted.result.iterations
        );

        rows.push(SolveRow::new("newton", &name, GUESS.to_string(), &plain));
        rows.push(
            SolveRow::new("adjusting newton", &name, GUESS.to_string(), &adjusted.result)
                .with_multiplier(adjusted.multiplier),
        );
    }

    print_output("Adjusting Newton's method", &rows, ctx.format)
}
