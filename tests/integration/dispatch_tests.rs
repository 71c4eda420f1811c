//! Command translation tests, exercised through the binary in dry-run mode.
//!
//! Dry-run prints the exact command line that would be forwarded, so these
//! tests pin the dispatch table without needing the package managers
//! installed.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::{create_project, create_project_with_scripts, standard_package_json, Marker};

fn auto() -> Command {
    cargo_bin_cmd!("auto")
}

// ==================== x translation ====================

#[test]
fn test_x_npm() {
    let project = create_project(Marker::Npm);

    auto()
        .args(["--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npx pkg"));
}

#[test]
fn test_x_yarn() {
    let project = create_project(Marker::Yarn);

    auto()
        .args(["--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn dlx pkg"));
}

#[test]
fn test_x_pnpm() {
    let project = create_project(Marker::Pnpm);

    auto()
        .args(["--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm dlx pkg"));
}

#[test]
fn test_x_bun() {
    let project = create_project(Marker::BunBinary);

    auto()
        .args(["--dry-run", "x", "pkg"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: bun x pkg"));
}

#[test]
fn test_x_deno_with_target() {
    let project = create_project(Marker::DenoJson);

    auto()
        .args(["--dry-run", "x", "server.ts", "--port", "8080"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would run: deno run -A server.ts --port 8080",
        ));
}

#[test]
fn test_x_deno_without_target_fails_without_running() {
    let project = create_project(Marker::DenoJson);

    auto()
        .args(["x"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "'deno x' requires a script or URL to execute.",
        ));
}

// ==================== Pass-through ====================

#[test]
fn test_declared_script_gets_run_verb() {
    let project = create_project_with_scripts(Marker::Npm, standard_package_json());

    auto()
        .args(["--dry-run", "test", "--watch"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run test --watch"));
}

#[test]
fn test_declared_script_for_yarn() {
    let project = create_project_with_scripts(Marker::Yarn, standard_package_json());

    auto()
        .args(["--dry-run", "build"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn run build"));
}

#[test]
fn test_undeclared_command_forwarded_raw() {
    let project = create_project_with_scripts(Marker::Npm, standard_package_json());

    auto()
        .args(["--dry-run", "install", "jest"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm install jest"));
}

#[test]
fn test_hyphenated_args_forwarded_in_order() {
    let project = create_project_with_scripts(Marker::Pnpm, standard_package_json());

    auto()
        .args(["--dry-run", "add", "-D", "typescript"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm add -D typescript"));
}
