//! CLI command implementations.

pub mod interpolate;
pub mod multiplicity;
pub mod roots;
pub mod sqrt;

// Re-export submodules for convenience
pub use interpolate::InterpolateArgs;
pub use sqrt::SqrtArgs;

use numkit_math::sampling::RealFunction;
use numkit_math::solvers::RootResult;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::config::ExperimentConfig;
use crate::error::CliResult;
use crate::export::GnuplotExport;
use crate::output::format_result;

/// Shared state of a driver run.
#[derive(Debug)]
pub struct Context {
    /// Experiment tunables.
    pub config: ExperimentConfig,
    /// Output format for result rows.
    pub format: OutputFormat,
    /// Plot exporter, unless exports are disabled.
    pub exporter: Option<GnuplotExport>,
}

impl Context {
    /// Exports `functions` over `[start, end)` if exports are enabled.
    pub fn export(
        &self,
        base: &str,
        start: f64,
        end: f64,
        functions: &[&dyn RealFunction],
    ) -> CliResult<()> {
        if let Some(exporter) = &self.exporter {
            exporter.export(base, start, end, functions)?;
        }
        Ok(())
    }
}

/// One root-finding run.
#[derive(Debug, Serialize, Tabled)]
pub struct SolveRow {
    #[tabled(rename = "Method")]
    pub method: String,
    #[tabled(rename = "Function")]
    pub function: String,
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(skip)]
    pub value: f64,
    #[tabled(skip)]
    pub error: f64,
    #[tabled(skip)]
    pub iterations: u32,
    #[tabled(skip)]
    pub convergence_rate: Option<i32>,
    #[tabled(skip)]
    pub multiplier: Option<u32>,
    #[tabled(rename = "Result")]
    #[serde(skip)]
    pub report: String,
}

impl SolveRow {
    /// Builds a row from a solver result.
    pub fn new(
        method: impl Into<String>,
        function: impl Into<String>,
        start: impl Into<String>,
        result: &RootResult,
    ) -> Self {
        Self {
            method: method.into(),
            function: function.into(),
            start: start.into(),
            value: result.value,
            error: result.error,
            iterations: result.iterations,
            convergence_rate: result.convergence_rate,
            multiplier: None,
            report: format_result(result),
        }
    }

    /// Records the final step multiplier of an adjusting run.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = Some(multiplier);
        self.method = format!("{} (m = {multiplier})", self.method);
        self
    }
}

/// Runs every experiment in order.
pub fn run_all(ctx: &Context) -> anyhow::Result<()> {
    roots::execute(ctx)?;
    interpolate::execute(&InterpolateArgs::default(), ctx)?;
    sqrt::execute(&SqrtArgs::default(), ctx)?;
    multiplicity::execute(ctx)?;
    Ok(())
}
