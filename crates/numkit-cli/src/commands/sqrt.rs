//! Square-root sweep.
//!
//! Checks `square_root(k)` against the standard library for every `k` on a
//! regular grid and reports any result whose reported error does not cover
//! the true root.

use anyhow::Result;
use clap::Args;
use numkit_math::solvers::square_root;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{format_result, print_output, print_success, print_warning};

/// Arguments for the sqrt command.
#[derive(Args, Debug, Default)]
pub struct SqrtArgs {
    /// First value of the sweep (defaults to the configured start)
    #[arg(long)]
    pub start: Option<f64>,

    /// Last value of the sweep (defaults to the configured end)
    #[arg(long)]
    pub end: Option<f64>,

    /// Sweep step (defaults to the configured step)
    #[arg(long)]
    pub step: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    #[tabled(rename = "Start")]
    start: f64,
    #[tabled(rename = "End")]
    end: f64,
    #[tabled(rename = "Step")]
    step: f64,
    #[tabled(rename = "Checked")]
    checked: u64,
    #[tabled(rename = "Failures")]
    failures: u64,
    #[tabled(rename = "Max iterations")]
    max_iterations: u32,
}

/// Execute the sqrt command.
pub fn execute(args: &SqrtArgs, ctx: &Context) -> Result<()> {
    let start = args.start.unwrap_or(ctx.config.sqrt_start);
    let end = args.end.unwrap_or(ctx.config.sqrt_end);
    let step = args.step.unwrap_or(ctx.config.sqrt_step);

    if !(step > 0.0 && step.is_finite()) {
        return Err(CliError::InvalidArgument(format!("step must be positive, got {step}")).into());
    }
    if !(start >= 0.0 && start <= end && end.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "sweep range [{start}, {end}] must be finite, non-negative and ordered"
        ))
        .into());
    }

    let count = ((end - start) / step).floor() as u64 + 1;
    info!("checking {count} square roots on [{start}, {end}]");

    let mut failures = 0;
    let mut max_iterations = 0;
    for i in 0..count {
        let k = start + step * i as f64;
        let expected = k.sqrt();
        match square_root(k) {
            Ok(result) => {
                max_iterations = max_iterations.max(result.iterations);
                if (result.value - expected).abs() > result.error {
                    failures += 1;
                    print_warning(&format!(
                        "square root of {k}: {} does not cover {expected}",
                        format_result(&result)
                    ));
                }
            }
            Err(e) => {
                failures += 1;
                print_warning(&format!("square root of {k}: {e}"));
            }
        }
    }
    debug!("sweep finished with {failures} failure(s)");

    let summary = SweepRow {
        start,
        end,
        step,
        checked: count,
        failures,
        max_iterations,
    };
    print_output("Square root sweep", &[summary], ctx.format)?;

    if failures == 0 && ctx.format == OutputFormat::Table {
        print_success("Success for square root");
    }
    Ok(())
}
