//! End-to-end tests for the pomo binary.
//!
//! Each test points HOME at a temporary directory so the user's real
//! configuration is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("POMO_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_log(home: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = home.path().join("pomodoro_log.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_config_path_uses_home() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    pomo(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".pomo/config.yaml").exists());

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("long_rest_interval: 4"));

    pomo(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_start_rejects_zero_interval() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["start", "--interval", "0", "--no-notify"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "long_rest_interval must be greater than zero",
        ));
}

#[test]
fn test_start_rejects_zero_focus_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    std::fs::write(&config, "timer:\n  focus_minutes: 0\n").unwrap();

    pomo(&home)
        .arg("--config")
        .arg(&config)
        .args(["start", "--once"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("focus_minutes"));
}

#[test]
fn test_history_reads_log() {
    let home = TempDir::new().unwrap();
    let log = write_log(
        &home,
        "date,type,start_time,end_time\n\
         2024-03-01,focus,09:00:00,09:25:00\n\
         2024-03-01,rest,09:25:00,09:30:00\n",
    );

    pomo(&home)
        .arg("history")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("09:25:00"));
}

#[test]
fn test_history_json_filters_kind() {
    let home = TempDir::new().unwrap();
    let log = write_log(
        &home,
        "date,type,start_time,end_time\n\
         2024-03-01,focus,09:00:00,09:25:00\n\
         2024-03-01,rest,09:25:00,09:30:00\n",
    );

    let output = pomo(&home)
        .args(["history", "--kind", "rest", "-o", "json", "--log-file"])
        .arg(&log)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["type"], "rest");
}

#[test]
fn test_history_malformed_log_fails() {
    let home = TempDir::new().unwrap();
    let log = write_log(&home, "date,type,start_time,end_time\nnot,a,row\n");

    pomo(&home)
        .arg("history")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn test_report_all_time() {
    let home = TempDir::new().unwrap();
    let log = write_log(
        &home,
        "date,type,start_time,end_time\n\
         2024-03-01,focus,09:00:00,09:25:00\n\
         2024-03-01,rest,09:25:00,09:30:00\n\
         2024-03-01,focus,09:30:00,09:55:00\n\
         2024-03-01,rest,09:55:00,10:00:00\n",
    );

    pomo(&home)
        .args(["report", "--period", "all", "--log-file"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("All Time"))
        .stdout(predicate::str::contains("50 minutes"));
}

#[test]
fn test_report_unknown_period() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["report", "--period", "decade"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown period"));
}

#[test]
fn test_completions_zsh() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef pomo"));
}
