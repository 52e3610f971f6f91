//! Smoke tests to verify command module wiring

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's real config
fn hrdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hrdesk").unwrap();
    cmd.env("HRDESK_CONFIG", dir.path().join("config.toml"))
        .env_remove("HRDESK_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

// === Help ===

#[test]
fn test_help_lists_screens() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("employees"))
        .stdout(predicate::str::contains("attendance"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_employees_help() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["employees", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--department"));
}

// === List screens ===

#[test]
fn test_employees_search_table() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["employees", "--query", "smith", "--view", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith"))
        .stdout(predicate::str::contains("Lisa Anderson").not())
        .stdout(predicate::str::contains("Showing 1 of 8 records"));
}

#[test]
fn test_employees_no_match() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["employees", "--query", "zzz-nomatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records."));
}

#[test]
fn test_employees_json() {
    let dir = TempDir::new().unwrap();
    let output = hrdesk(&dir)
        .args(["employees", "--query", "lisa", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matched"], 1);
    assert_eq!(value["total"], 8);
    assert_eq!(value["records"][0]["name"], "Lisa Anderson");
}

#[test]
fn test_attendance_summary_line() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .arg("attendance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 8  Present: 5  Absent: 1  Late: 2"));
}

#[test]
fn test_attachments_search() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["attachments", "--query", "contract", "--view", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of"));
}

// === Detail and routing ===

#[test]
fn test_employee_detail() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["employee", "EMP001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith (EMP001)"));
}

#[test]
fn test_unknown_employee_fails() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["employee", "EMP999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EMP999"));
}

#[test]
fn test_routes_detail_path() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["routes", "/employees/EMP001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(employee EMP001)"));
}

#[test]
fn test_routes_unknown_path_fails() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir)
        .args(["routes", "/payroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot route '/payroll'"));
}

// === Login ===

#[test]
fn test_login_succeeds_without_delay() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[login]\ndelay_ms = 0\n");
    hrdesk(&dir)
        .args(["--quiet", "login", "--email", "jane.doe@company.com"])
        .args(["--password", "secret", "--role", "manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome"))
        .stdout(predicate::str::contains("Landing: /manager"));
}

#[test]
fn test_login_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[login]\ndelay_ms = 0\noutcome = \"reject\"\n");
    hrdesk(&dir)
        .args(["--quiet", "login", "--email", "jane.doe@company.com"])
        .args(["--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

// === Config ===

#[test]
fn test_config_path_honors_flag() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.toml");
    hrdesk(&dir)
        .args(["config", "path", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"))
        .stdout(predicate::str::contains("(not created)"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    hrdesk(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    hrdesk(&dir).args(["config", "init"]).assert().failure();
    hrdesk(&dir).args(["config", "init", "--force"]).assert().success();
}
