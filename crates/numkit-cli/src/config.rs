//! Experiment configuration.

use std::path::Path;

use numkit_math::interpolation::InterpolationConfig;
use numkit_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Tunables of the experiment driver.
///
/// Every field has a default, so a configuration file only needs the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Relative tolerance of bisection and Newton on the study functions
    pub tolerance: f64,

    /// Tolerance for the multiple-root study function
    pub tight_tolerance: f64,

    /// Newton iteration budget where no other budget applies
    pub max_iterations: u32,

    /// Points per exported function
    pub export_points: usize,

    /// Orders used by the interpolation experiment
    pub interpolation_orders: Vec<usize>,

    /// Sampling intervals of the least-squares grid
    pub least_squares_points: usize,

    /// Error grid multiplier for interpolation errors
    pub error_point_multiplier: u64,

    /// First value of the square-root sweep
    pub sqrt_start: f64,

    /// Last value of the square-root sweep (inclusive)
    pub sqrt_end: f64,

    /// Step of the square-root sweep
    pub sqrt_step: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            tight_tolerance: 1.0 / 35_184_372_088_832.0,
            max_iterations: 256,
            export_points: 524_288,
            interpolation_orders: vec![5, 10, 20],
            least_squares_points: 524_288,
            error_point_multiplier: 524_288,
            sqrt_start: 10.0,
            sqrt_end: 10_000.0,
            sqrt_step: 1.0 / 8192.0,
        }
    }
}

impl ExperimentConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, the defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> CliResult<()> {
        let positive = [
            ("tolerance", self.tolerance),
            ("tight_tolerance", self.tight_tolerance),
            ("sqrt_step", self.sqrt_step),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CliError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.max_iterations == 0 {
            return Err(CliError::Config("max_iterations must be at least 1".into()));
        }
        if self.export_points == 0
            || self.least_squares_points == 0
            || self.error_point_multiplier == 0
        {
            return Err(CliError::Config(
                "export_points, least_squares_points and error_point_multiplier must be at least 1"
                    .into(),
            ));
        }
        if self.interpolation_orders.contains(&0) {
            return Err(CliError::Config("interpolation orders must be at least 1".into()));
        }
        if !(self.sqrt_start <= self.sqrt_end) {
            return Err(CliError::Config(format!(
                "sqrt_start ({}) must not exceed sqrt_end ({})",
                self.sqrt_start, self.sqrt_end
            )));
        }
        Ok(())
    }

    /// Solver settings for the study functions.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Sampling densities for the interpolation experiment.
    pub fn interpolation_config(&self) -> InterpolationConfig {
        InterpolationConfig::default()
            .with_least_squares_points(self.least_squares_points)
            .with_error_point_multiplier(self.error_point_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();

        assert_eq!(config.interpolation_orders, vec![5, 10, 20]);
        assert_eq!(config.tight_tolerance, 2f64.powi(-45));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "export_points = 64\ninterpolation_orders = [3, 4]").unwrap();

        let config = ExperimentConfig::from_file(file.path()).unwrap();

        assert_eq!(config.export_points, 64);
        assert_eq!(config.interpolation_orders, vec![3, 4]);
        assert_eq!(config.max_iterations, 256);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let config = ExperimentConfig {
            sqrt_step: 0.0,
            ..ExperimentConfig::default()
        };
        assert!(matches!(config.validate(), Err(CliError::Config(_))));

        let config = ExperimentConfig {
            interpolation_orders: vec![5, 0],
            ..ExperimentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_error_multiplier() {
        let config = ExperimentConfig {
            error_point_multiplier: 0,
            ..ExperimentConfig::default()
        };
        match config.validate() {
            Err(CliError::Config(message)) => assert!(message.contains("error_point_multiplier")),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tolerence = 1e-3").unwrap();

        assert!(ExperimentConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ExperimentConfig::load(Some(Path::new("/nonexistent/numkit.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
