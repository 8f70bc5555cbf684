//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// gymctl with no ambient config: empty working dir, no store env vars
fn gymctl(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("GYMCTL_CONFIG")
        .env_remove("GYMCTL_BIND")
        .env_remove("GYMCTL_DB_SCHEMA")
        .env("HOME", dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    gymctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    gymctl(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_check_rejects_malformed_url() {
    let dir = tempfile::tempdir().unwrap();
    gymctl(&dir)
        .arg("check")
        .arg("--database-url")
        .arg("not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid store configuration"));
}

#[test]
fn test_check_reports_unreachable_store() {
    let dir = tempfile::tempdir().unwrap();
    gymctl(&dir)
        .arg("check")
        .arg("--database-url")
        .arg("postgres://root@127.0.0.1:1/fitness_tracker")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to store"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    gymctl(&dir)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
