//! Gnuplot export of sampled functions.
//!
//! Each export writes one `<base>___d<i>.csv` file of `x,y` rows per
//! function and a `<base>.gnuplot` script that plots them all.

use std::fs;
use std::path::{Path, PathBuf};

use numkit_math::sampling::RealFunction;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Writes gnuplot data files and scripts into a directory.
#[derive(Debug, Clone)]
pub struct GnuplotExport {
    directory: PathBuf,
    points: usize,
}

impl GnuplotExport {
    /// Creates an exporter writing `points` rows per function into `directory`.
    pub fn new(directory: impl Into<PathBuf>, points: usize) -> Self {
        Self {
            directory: directory.into(),
            points,
        }
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Samples every function on `[start, end)` and writes the plot files.
    ///
    /// Returns the path of the gnuplot script.
    pub fn export(
        &self,
        base: &str,
        start: f64,
        end: f64,
        functions: &[&dyn RealFunction],
    ) -> CliResult<PathBuf> {
        if !(start < end) {
            return Err(CliError::InvalidArgument(format!(
                "export interval [{start}, {end}] is empty"
            )));
        }
        fs::create_dir_all(&self.directory)?;

        let interval = (end - start) / self.points as f64;
        let mut script = String::from("set datafile separator \",\";plot ");

        for (i, function) in functions.iter().enumerate() {
            let file_name = format!("{base}___d{i}.csv");
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(self.directory.join(&file_name))?;
            for k in 0..self.points {
                let x = start + interval * k as f64;
                writer.write_record(&[x.to_string(), function.eval(x).to_string()])?;
            }
            writer.flush()?;
            debug!("wrote {} rows to {file_name}", self.points);

            let title = function.name().unwrap_or("").replace('\'', "");
            script.push_str(&format!(
                "\"{file_name}\" using 1:2 title '{title}' with lines,"
            ));
        }
        script.push('\n');

        let script_path = self.directory.join(format!("{base}.gnuplot"));
        fs::write(&script_path, script)?;
        info!("exported {} function(s) to {}", functions.len(), script_path.display());
        Ok(script_path)
    }
}
