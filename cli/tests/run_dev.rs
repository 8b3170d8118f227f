//! # devkit CLI Run Dev Integration Tests
//!
//! File: cli/tests/run_dev.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! End-to-end tests for `devkit run dev`. A fake `npm` on `PATH` stands in
//! for the real one so the exit-code handling can be checked without Node.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

const MANIFEST_WITH_DEV: &str = r#"{ "name": "app", "scripts": { "dev": "node ./src/index.js" } }"#;

#[test]
fn test_run_dev_without_manifest_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["run", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run dev server"))
        .stderr(predicate::str::contains("No package.json found"));
}

#[test]
fn test_run_dev_with_malformed_manifest_fails() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.work_path().join("package.json"), "{ nope").unwrap();
    sandbox
        .cmd()
        .args(["run", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read or parse"));
}

#[cfg(unix)]
#[test]
fn test_run_dev_without_dev_script_never_spawns() {
    let sandbox = Sandbox::new();
    let bin_dir = install_fake_npm(sandbox.home.path(), 0);
    fs::write(
        sandbox.work_path().join("package.json"),
        r#"{ "scripts": { "start": "node index.js" } }"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .env("PATH", &bin_dir)
        .args(["run", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No \"dev\" script found"));

    assert!(!sandbox.work_path().join("npm-args.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_run_dev_success() {
    let sandbox = Sandbox::new();
    let bin_dir = install_fake_npm(sandbox.home.path(), 0);
    fs::write(sandbox.work_path().join("package.json"), MANIFEST_WITH_DEV).unwrap();

    sandbox
        .cmd()
        .env("PATH", &bin_dir)
        .args(["run", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fake npm run dev"))
        .stdout(predicate::str::contains("Dev server exited successfully"));

    let npm_args = fs::read_to_string(sandbox.work_path().join("npm-args.txt")).unwrap();
    assert_eq!(npm_args.trim(), "run dev");
}

#[cfg(unix)]
#[test]
fn test_run_dev_propagates_exit_code() {
    let sandbox = Sandbox::new();
    let bin_dir = install_fake_npm(sandbox.home.path(), 7);
    fs::write(sandbox.work_path().join("package.json"), MANIFEST_WITH_DEV).unwrap();

    sandbox
        .cmd()
        .env("PATH", &bin_dir)
        .args(["run", "dev"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"npm run dev\" exited with code 7"));
}

#[cfg(unix)]
#[test]
fn test_run_dev_reports_missing_npm() {
    let sandbox = Sandbox::new();
    let empty_bin = sandbox.home.path().join("empty-bin");
    fs::create_dir(&empty_bin).unwrap();
    fs::write(sandbox.work_path().join("package.json"), MANIFEST_WITH_DEV).unwrap();

    sandbox
        .cmd()
        .env("PATH", &empty_bin)
        .args(["run", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start dev server"));
}
