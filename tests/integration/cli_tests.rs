//! CLI integration tests for auto.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::{create_project, create_project_with_scripts, standard_package_json, Marker};

/// Get a Command for the auto binary.
fn auto() -> Command {
    cargo_bin_cmd!("auto")
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    auto()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Package-manager-agnostic command dispatcher",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--runner"));
}

#[test]
fn test_version_output() {
    auto()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== Usage ====================

#[test]
fn test_no_command_prints_usage_and_fails() {
    let project = create_project(Marker::Npm);

    auto()
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

// ==================== Completions ====================

#[test]
fn test_completions_bash() {
    auto()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"));
}

// ==================== Detection failure ====================

#[test]
fn test_detection_failure_is_fatal() {
    // A bare temp dir has no marker anywhere on the way to the root.
    let empty = tempfile::TempDir::new().unwrap();

    auto()
        .arg("test")
        .current_dir(empty.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No supported package manager detected",
        ))
        .stderr(predicate::str::contains("Searched up to:"));
}

// ==================== Debug output ====================

#[test]
fn test_debug_prints_detection_reason() {
    let project = create_project(Marker::Yarn);

    auto()
        .args(["--debug", "--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Package manager = yarn"))
        .stderr(predicate::str::contains("yarn.lock"));
}

// ==================== Lenient package.json handling ====================

#[test]
fn test_malformed_package_json_degrades() {
    let project = create_project_with_scripts(Marker::Npm, "{broken json");

    auto()
        .args(["--dry-run", "ci"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm ci"))
        .stderr(predicate::str::contains("Error parsing package.json"));
}

#[test]
fn test_missing_package_json_falls_through() {
    let project = create_project(Marker::Pnpm);

    auto()
        .args(["--dry-run", "install"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm install"));
}

// ==================== Config ====================

#[test]
fn test_project_config_pins_runner() {
    let project = create_project_with_scripts(Marker::Yarn, standard_package_json());
    std::fs::write(
        project.path().join(".autorc.toml"),
        "[general]\nrunner = \"bun\"\n",
    )
    .unwrap();

    let fake_home = tempfile::TempDir::new().unwrap();
    auto()
        .args(["--dry-run", "x", "pkg"])
        .env("XDG_CONFIG_HOME", fake_home.path())
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: bun x pkg"));
}

#[test]
fn test_no_config_ignores_project_config() {
    let project = create_project_with_scripts(Marker::Yarn, standard_package_json());
    std::fs::write(
        project.path().join(".autorc.toml"),
        "[general]\nrunner = \"bun\"\n",
    )
    .unwrap();

    auto()
        .args(["--no-config", "--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn dlx pkg"));
}

#[test]
fn test_cli_runner_beats_config() {
    let project = create_project_with_scripts(Marker::Yarn, standard_package_json());
    std::fs::write(
        project.path().join(".autorc.toml"),
        "[general]\nrunner = \"bun\"\n",
    )
    .unwrap();

    let fake_home = tempfile::TempDir::new().unwrap();
    auto()
        .args(["--runner", "pnpm", "--dry-run", "x", "pkg"])
        .env("XDG_CONFIG_HOME", fake_home.path())
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm dlx pkg"));
}
