//! Shared helpers for `biq` CLI integration tests.

#![allow(dead_code)] // not every test file uses every helper

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;

/// Captured output of one CLI invocation.
pub struct CliCase {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    /// Scratch directory the case ran against; dropped with the case.
    pub dir: TempDir,
}

/// Run `biq` with `args` against a fresh scratch directory. The config
/// home is pointed inside the scratch dir so user-level config never
/// leaks into a test.
pub fn run_cli_case(args: &[&str]) -> CliCase {
    let dir = tempfile::tempdir().expect("scratch dir");
    run_cli_case_in(dir, args)
}

/// Run `biq` with `args` against an existing scratch directory (used when
/// the case needs fixture files written first).
pub fn run_cli_case_in(dir: TempDir, args: &[&str]) -> CliCase {
    let config_home = dir.path().join("config-home");
    std::fs::create_dir_all(&config_home).expect("config home");

    let output = Command::new(env!("CARGO_BIN_EXE_biq"))
        .args(args)
        .env("XDG_CONFIG_HOME", &config_home)
        .env_remove("HOME")
        .output()
        .expect("spawn biq");

    CliCase {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        dir,
    }
}

/// The literal one-plan book used across the engine's test vectors:
/// 10 employees, 1000/200 premiums, baseline total 12,000.
pub fn write_reference_plans(dir: &Path) -> PathBuf {
    let path = dir.join("plans.json");
    std::fs::write(
        &path,
        r#"[
  {
    "id": "plan-1",
    "organization_id": "org-1",
    "year": 2024,
    "plan_name": "PPO",
    "plan_type": "PPO",
    "employee_count": 10,
    "employer_premium": 1000.0,
    "employee_premium": 200.0,
    "deductible": 1000.0,
    "out_of_pocket_max": 3000.0,
    "created_at": "2024-01-01T00:00:00Z"
  }
]"#,
    )
    .expect("write plans fixture");
    path
}
