//! End-to-end tests of the `numkit` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SMALL_CONFIG: &str = r#"
export_points = 64
interpolation_orders = [3, 5]
least_squares_points = 256
error_point_multiplier = 16
sqrt_start = 10.0
sqrt_end = 11.0
sqrt_step = 0.125
"#;

fn numkit() -> Command {
    let mut cmd = Command::cargo_bin("numkit").unwrap();
    cmd.env_remove("NUMKIT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("numkit.toml");
    fs::write(&path, content).unwrap();
    path
}

fn json_stdout(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

// =============================================================================
// Help and arguments
// =============================================================================

#[test]
fn test_help_lists_commands() {
    numkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("roots"))
        .stdout(predicate::str::contains("interpolate"))
        .stdout(predicate::str::contains("multiplicity"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    numkit()
        .args(["roots", "--no-export", "-q", "-v"])
        .assert()
        .failure();
}

// =============================================================================
// Experiments
// =============================================================================

#[test]
fn test_roots_json() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), SMALL_CONFIG);

    let output = numkit()
        .args(["roots", "--format", "json", "--quiet", "--output-dir"])
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    assert_eq!(json["title"], "Root finding");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);

    for row in &rows[..4] {
        assert_eq!(row["method"], "bisection");
        assert_eq!(row["iterations"], 24);
        assert_eq!(row["convergence_rate"], 1);
    }
    assert_eq!(rows[4]["method"], "newton");
    assert_eq!(rows[9]["method"], "altered newton");

    let first = rows[0]["value"].as_f64().unwrap();
    assert!((first - 0.968_319_8).abs() < 1e-6);

    assert!(dir.path().join("1_visual_inspection.gnuplot").exists());
    let data = fs::read_to_string(dir.path().join("1_visual_inspection___d0.csv")).unwrap();
    assert_eq!(data.lines().count(), 64);
}

#[test]
fn test_interpolate_lagrange_exports() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), SMALL_CONFIG);

    numkit()
        .args(["interpolate", "--method", "lagrange", "--quiet", "--output-dir"])
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lagrange"))
        .stdout(predicate::str::contains("x**5"));

    let script = fs::read_to_string(dir.path().join("lagrange.gnuplot")).unwrap();
    assert!(script.contains("lagrange___d0.csv"));
    assert!(script.contains("lagrange___d2.csv"));
    assert!(script.contains("Lagrange Interpolation of 1/(1+x**2) (order 5)"));
    assert!(!dir.path().join("piecewise_linear.gnuplot").exists());
}

#[test]
fn test_interpolate_orders_override() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), SMALL_CONFIG);

    let output = numkit()
        .args([
            "interpolate",
            "--method",
            "piecewise-linear",
            "--orders",
            "2,4,8",
            "--no-export",
            "--quiet",
            "--format",
            "json",
        ])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    let rows = json["rows"].as_array().unwrap();
    let orders: Vec<u64> = rows.iter().map(|r| r["order"].as_u64().unwrap()).collect();
    assert_eq!(orders, vec![2, 4, 8]);
    assert!(rows.iter().all(|r| r["coefficients"] == "-"));
}

#[test]
fn test_sqrt_sweep() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), SMALL_CONFIG);

    let output = numkit()
        .args(["sqrt", "--no-export", "--quiet", "--format", "json"])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    let summary = &json["rows"][0];
    assert_eq!(summary["checked"], 9);
    assert_eq!(summary["failures"], 0);
}

#[test]
fn test_sqrt_table_reports_success() {
    numkit()
        .args(["sqrt", "--start", "2", "--end", "3", "--step", "0.5", "--no-export", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success for square root"));
}

#[test]
fn test_sqrt_rejects_bad_step() {
    numkit()
        .args(["sqrt", "--step", "0", "--no-export", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step must be positive"));
}

#[test]
fn test_multiplicity_json() {
    let output = numkit()
        .args(["multiplicity", "--no-export", "--quiet", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[0]["multiplier"].is_null());
    assert!(rows[1]["multiplier"].as_u64().unwrap() >= 2);
    assert!(rows[1]["method"]
        .as_str()
        .unwrap()
        .starts_with("adjusting newton (m = "));
}

#[test]
fn test_csv_output() {
    numkit()
        .args(["multiplicity", "--no-export", "--quiet", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "method,function,start,value,error,iterations,convergence_rate,multiplier",
        ));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "tolerance = -1.0\n");

    numkit()
        .args(["roots", "--no-export", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tolerance"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "tolerence = 1e-7\n");

    numkit()
        .args(["roots", "--no-export", "--config"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), SMALL_CONFIG);

    let output = numkit()
        .env("NUMKIT_CONFIG", &config)
        .args(["sqrt", "--no-export", "--quiet", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_stdout(&output.stdout)["rows"][0]["end"], 11.0);
}
