//! `merge-updates` binary tests
//!
//! Runs the built binary in a scratch working directory and checks its exit
//! code, console output and the merged report it leaves behind.

mod fixtures;

use fixtures::{baseline_path, read_json, update_paths};
use std::path::Path;
use std::process::{Command, Output};
use stencil_report_merge::summary::MERGE_SUMMARY_SCHEMA_ID;
use stencil_report_merge::ExitCode;
use tempfile::TempDir;

fn command(cwd: &Path, args: &[&Path], updates: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_merge-updates"));
    cmd.current_dir(cwd).args(args);
    if !updates.is_empty() {
        cmd.arg("--updates").args(update_paths(updates));
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn merge_updates(cwd: &Path, args: &[&Path], updates: &[&str]) -> Output {
    command(cwd, args, updates).output().expect("run merge-updates")
}

#[test]
fn test_merge_writes_report_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let output = merge_updates(
        dir.path(),
        &[&baseline_path()],
        &["update1.json", "update2.json"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let found: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Found update for :"))
        .collect();
    assert_eq!(found.len(), 1);
    assert!(found[0].starts_with("Found update for :heat,cpu,double,std1,t4,d128 in report "));
    assert!(found[0].ends_with("update2.json"));
    assert!(stdout.contains("Final merged report generated in stencils.json.merge"));

    let merged = read_json(&dir.path().join("stencils.json.merge"));
    let d128 = &merged["stencils"]["heat"]["cpu"]["double"]["std1"]["t4"]["d128"];
    assert_eq!(d128["time"], 1.2);
    assert_eq!(d128["rms"], 0.03);
}

#[test]
fn test_conflict_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let output = merge_updates(
        dir.path(),
        &[&baseline_path()],
        &["update2.json", "update_conflict.json"],
    );

    assert_eq!(output.status.code(), Some(ExitCode::Conflict.as_i32()));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Multiple update reports modify the same token of metrics"));
    assert!(!dir.path().join("stencils.json.merge").exists());
}

#[test]
fn test_missing_updates_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = merge_updates(dir.path(), &[&baseline_path()], &[]);

    assert_eq!(output.status.code(), Some(ExitCode::Usage.as_i32()));
    assert!(!dir.path().join("stencils.json.merge").exists());
}

#[test]
fn test_structure_mismatch_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = merge_updates(dir.path(), &[&baseline_path()], &["update_missing.json"]);

    assert_eq!(output.status.code(), Some(ExitCode::StructureMismatch.as_i32()));
    assert!(!dir.path().join("stencils.json.merge").exists());
}

#[test]
fn test_missing_baseline_exit_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = merge_updates(dir.path(), &[&missing], &["update1.json"]);

    assert_eq!(output.status.code(), Some(ExitCode::Load.as_i32()));
}

#[test]
fn test_debug_log_carries_merge_summary() {
    let dir = TempDir::new().unwrap();
    let output = command(dir.path(), &[&baseline_path()], &["update2.json"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("run merge-updates");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("merge summary"));
    assert!(stderr.contains(MERGE_SUMMARY_SCHEMA_ID));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(MERGE_SUMMARY_SCHEMA_ID));
}
