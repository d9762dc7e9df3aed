//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{InterpolateArgs, SqrtArgs};

/// Numkit - root-finding and interpolation experiments
#[derive(Parser)]
#[command(name = "numkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Experiment configuration file (TOML)
    #[arg(short, long, global = true, env = "NUMKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for gnuplot exports
    #[arg(short, long, default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Skip gnuplot exports
    #[arg(long, global = true)]
    pub no_export: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bracket and refine the roots of the study functions
    Roots,

    /// Approximate 1/(1+x²) on [-5, 5] with each interpolation method
    Interpolate(InterpolateArgs),

    /// Check the square-root solver against the standard library
    Sqrt(SqrtArgs),

    /// Compare plain and adjusting Newton on repeated roots
    Multiplicity,

    /// Run every experiment in order
    All,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
