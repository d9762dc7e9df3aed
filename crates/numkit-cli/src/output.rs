//! Output formatting utilities.

use colored::Colorize;
use numkit_math::solvers::RootResult;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Digits shown when the error gives no hint.
const DEFAULT_PRECISION: usize = 8;

/// Most digits an `f64` can justify.
const MAX_PRECISION: usize = 17;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(
    title: &str,
    data: &[T],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(data);
            Ok(())
        }
        OutputFormat::Json => print_json(title, data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

#[derive(Serialize)]
struct Section<'a, T> {
    title: &'a str,
    rows: &'a [T],
}

/// Prints data as one JSON document per section.
fn print_json<T: Serialize>(title: &str, rows: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&Section { title, rows })?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Decimal places justified by `error`: `1 - ceil(log10 |error|)`.
pub fn precision_for(error: f64) -> usize {
    if error == 0.0 || !error.is_finite() {
        return DEFAULT_PRECISION;
    }
    let digits = 1.0 - error.abs().log10().ceil();
    digits.clamp(0.0, MAX_PRECISION as f64) as usize
}

/// Formats an empirical convergence order.
pub fn format_rate(rate: Option<i32>) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| r.to_string())
}

/// One-line report of a root-finding result.
pub fn format_result(result: &RootResult) -> String {
    format!(
        "result: {:.prec$} ± {:.1e}, iterations: {}, convergence: {}",
        result.value,
        result.error,
        result.iterations,
        format_rate(result.convergence_rate),
        prec = precision_for(result.error)
    )
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
