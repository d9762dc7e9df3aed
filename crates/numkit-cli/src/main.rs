//! Numkit CLI - root-finding and interpolation experiments.
//!
//! # Usage
//!
//! ```bash
//! # Bisection and Newton on e^(-x/5) - sin x
//! numkit roots
//!
//! # Lagrange interpolation of Runge's function, plots into ./plots
//! numkit interpolate --method lagrange --output-dir plots
//!
//! # Quick square-root sweep without plot files
//! numkit sqrt --start 10 --end 100 --step 0.5 --no-export
//!
//! # Everything, as JSON, with a custom configuration
//! numkit all --format json --config numkit.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod export;
mod functions;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::ExperimentConfig;
use export::GnuplotExport;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; results go to stdout, logs to stderr
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExperimentConfig::load(cli.config.as_deref())?;
    let exporter =
        (!cli.no_export).then(|| GnuplotExport::new(&cli.output_dir, config.export_points));
    if let Some(exporter) = &exporter {
        debug!("exporting plots to {}", exporter.directory().display());
    }
    let ctx = Context {
        config,
        format: cli.format,
        exporter,
    };

    match cli.command {
        Commands::Roots => commands::roots::execute(&ctx)?,
        Commands::Interpolate(args) => commands::interpolate::execute(&args, &ctx)?,
        Commands::Sqrt(args) => commands::sqrt::execute(&args, &ctx)?,
        Commands::Multiplicity => commands::multiplicity::execute(&ctx)?,
        Commands::All => commands::run_all(&ctx)?,
    }

    Ok(())
}
