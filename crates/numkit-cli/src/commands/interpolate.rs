//! Interpolation experiment on Runge's function over [-5, 5].

use anyhow::Result;
use clap::{Args, ValueEnum};
use numkit_math::interpolation::{Interpolation, InterpolationMethod};
use numkit_math::sampling::{Function, RealFunction};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::commands::Context;
use crate::functions::{runge, RUNGE};
use crate::output::print_output;

const START: f64 = -5.0;
const END: f64 = 5.0;

/// Arguments for the interpolate command.
#[derive(Args, Debug, Default)]
pub struct InterpolateArgs {
    /// Interpolation method
    #[arg(short, long, value_enum, default_value = "all")]
    pub method: MethodArg,

    /// Orders to build, comma separated (defaults to the configured orders)
    #[arg(long, value_delimiter = ',')]
    pub orders: Vec<usize>,
}

/// Method selection on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Lagrange,
    PiecewiseLinear,
    RaisedCosine,
    LeastSquares,
    #[default]
    All,
}

impl MethodArg {
    fn methods(self) -> Vec<InterpolationMethod> {
        match self {
            MethodArg::Lagrange => vec![InterpolationMethod::Lagrange],
            MethodArg::PiecewiseLinear => vec![InterpolationMethod::PiecewiseLinear],
            MethodArg::RaisedCosine => vec![InterpolationMethod::RaisedCosine],
            MethodArg::LeastSquares => vec![InterpolationMethod::LeastSquares],
            MethodArg::All => InterpolationMethod::ALL.to_vec(),
        }
    }
}

/// Base name of the exported plot files for `method`.
fn export_base(method: InterpolationMethod) -> String {
    method.label().to_lowercase().replace(' ', "_")
}

/// One interpolant and its score.
#[derive(Debug, Serialize, Tabled)]
struct InterpolationRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Order")]
    order: usize,
    #[tabled(skip)]
    error: f64,
    #[tabled(rename = "Error")]
    #[serde(skip)]
    error_display: String,
    #[tabled(rename = "Coefficients")]
    coefficients: String,
}

/// Execute the interpolate command.
pub fn execute(args: &InterpolateArgs, ctx: &Context) -> Result<()> {
    let orders = if args.orders.is_empty() {
        &ctx.config.interpolation_orders
    } else {
        &args.orders
    };
    let config = ctx.config.interpolation_config();
    let source = Function::named(RUNGE, runge);
    let mut rows = Vec::new();

    for method in args.method.methods() {
        let interpolations = orders
            .iter()
            .map(|&order| Interpolation::new(method, &source, START, END, order, &config))
            .collect::<Result<Vec<_>, _>>()?;

        let mut plotted: Vec<&dyn RealFunction> = vec![&source];
        plotted.extend(interpolations.iter().map(|i| i as &dyn RealFunction));
        ctx.export(&export_base(method), START, END, &plotted)?;

        for interpolation in &interpolations {
            let error = interpolation.error()?;
            debug!("{method} order {}: error {error:.2E}", interpolation.order());
            rows.push(InterpolationRow {
                method: method.to_string(),
                order: interpolation.order(),
                error,
                error_display: format!("{error:.2E}"),
                coefficients: interpolation
                    .polynomial_terms()
                    .unwrap_or_else(|| "-".to_string()),
            });
        }
        info!("{method}: built {} interpolation(s) of {RUNGE}", interpolations.len());
    }

    print_output(&format!("Interpolation of {RUNGE}"), &rows, ctx.format)
}
