use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const TINY_CONFIG: &str = r#"
planning:
  max_duration: 2.0
  lambda_penalty: 1.0
  time_tolerance: 0.5
  min_intermediate_moves: 1
moves:
  Wave:
    duration: 0.5
  Clap:
    duration: 0.25
waypoints:
  start:
    name: Bow
    duration: 0.25
  mandatory: []
  end:
    name: Crouch
    duration: 0.25
actuator:
  simulate_speed: 10.0
"#;

fn choreoplan() -> Command {
    Command::cargo_bin("choreoplan").unwrap()
}

fn write_tiny_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("choreoplan.yaml");
    std::fs::write(&path, TINY_CONFIG).unwrap();
    path
}

#[test]
fn test_schema_prints_config_schema() {
    choreoplan()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_duration"));
}

#[test]
fn test_plan_with_builtin_config() {
    choreoplan()
        .args(["plan", "--seed", "7", "--config", "/nonexistent/choreoplan.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLANNED CHOREOGRAPHY:"))
        .stdout(predicate::str::contains("FINAL CHOREOGRAPHY:"))
        .stdout(predicate::str::contains("*** 14-StandInit ***"))
        .stdout(predicate::str::contains("*** 6-Crouch ***"));
}

#[test]
fn test_plan_rejects_budget_below_mandatory() {
    choreoplan()
        .args([
            "plan",
            "--config",
            "/nonexistent/choreoplan.yaml",
            "--max-duration",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("smaller than the mandatory duration"));
}

#[test]
fn test_plan_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_tiny_config(dir.path());
    let reports = dir.path().join("reports");

    choreoplan()
        .arg("plan")
        .arg("--config")
        .arg(&config)
        .arg("--report-dir")
        .arg(&reports)
        .assert()
        .success();

    let json = std::fs::read_to_string(reports.join("plan.json")).unwrap();
    assert!(json.contains("\"fingerprint\""));
    assert!(reports.join("plan.md").exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("choreoplan.yaml");

    choreoplan().arg("init").arg(&path).assert().success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("max_duration"));

    choreoplan()
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    choreoplan()
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_run_simulated() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_tiny_config(dir.path());

    choreoplan()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .args(["--seed", "3", "--simulate", "--no-music"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DANCE EXEC:"))
        .stdout(predicate::str::contains("Executing: Bow..."))
        .stdout(predicate::str::contains("Executing: Crouch..."))
        .stdout(predicate::str::contains("Length of the entire choreography"));
}
