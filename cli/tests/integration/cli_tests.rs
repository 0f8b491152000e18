//! Argument handling and usage errors.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn restart() -> Command {
    let mut cmd = Command::cargo_bin("restart").expect("restart binary should exist");
    cmd.env_remove("ARCHIVESVC_RESTART_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn usage_line() -> impl Predicate<str> {
    predicate::str::contains("Usage: restart")
        .and(predicate::str::contains("localdev"))
        .and(predicate::str::contains("integration"))
        .and(predicate::str::contains("staging"))
        .and(predicate::str::contains("prod"))
}

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    restart()
        .assert()
        .code(1)
        .stderr(usage_line())
        .stdout(predicate::str::is_empty());
}

#[test]
fn two_arguments_prints_usage_and_exits_one() {
    restart()
        .args(["staging", "extra"])
        .assert()
        .code(1)
        .stderr(usage_line());
}

#[test]
fn many_arguments_print_usage_and_exit_one() {
    restart()
        .args(["localdev", "integration", "staging", "prod"])
        .assert()
        .code(1)
        .stderr(usage_line());
}

#[test]
fn unknown_option_prints_usage_and_exits_one() {
    restart()
        .args(["--bogus", "staging"])
        .assert()
        .code(1)
        .stderr(usage_line());
}

#[test]
fn help_flag_with_another_option_exits_zero() {
    restart()
        .args(["--dry-run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag_with_another_option_shows_version() {
    restart()
        .args(["-q", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_explicit_config_is_fatal() {
    restart()
        .args(["--config", "/nonexistent/archivesvc/restart.yaml", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: cannot read"));
}

#[cfg(target_os = "linux")]
#[test]
fn help_that_cannot_be_written_exits_one() {
    let full = std::fs::File::create("/dev/full").expect("open /dev/full");
    let status = std::process::Command::new(assert_cmd::cargo::cargo_bin("restart"))
        .args(["--dry-run", "--help"])
        .env_remove("ARCHIVESVC_RESTART_CONFIG")
        .stdout(full)
        .stderr(std::process::Stdio::null())
        .status()
        .expect("restart runs");
    assert_eq!(status.code(), Some(1));
}
