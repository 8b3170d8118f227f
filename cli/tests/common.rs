//! # devkit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the real `devkit` binary inside a temporary directory, with `HOME` pointed
//! at a second temporary directory so the developer's own `~/.devkitrc` never
//! leaks into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get devkit Command (`devkit_cmd`)
///
/// An `assert_cmd::Command` for the compiled `devkit` binary.
///
/// ## Panics
/// Panics if the `devkit` binary cannot be found via `Command::cargo_bin`.
pub fn devkit_cmd() -> Command {
    Command::cargo_bin("devkit").expect("Failed to find devkit binary for testing")
}

/// A working directory plus an isolated home directory.
pub struct Sandbox {
    pub work: TempDir,
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            work: tempfile::tempdir().expect("Failed to create work dir"),
            home: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    pub fn work_path(&self) -> &Path {
        self.work.path()
    }

    /// Writes a global config file (e.g. `.devkit.config.json`) into the fake home.
    pub fn write_home_file(&self, name: &str, content: &str) {
        fs::write(self.home.path().join(name), content).expect("Failed to write home file");
    }

    /// `devkit` running in `dir` with the sandbox home.
    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = devkit_cmd();
        cmd.current_dir(dir)
            .env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// `devkit` running in the work directory.
    pub fn cmd(&self) -> Command {
        self.cmd_in(self.work.path())
    }
}

/// Installs a fake `npm` into `<dir>/bin` and returns that directory, for use
/// as `PATH`. The fake records its arguments in `npm-args.txt` in its working
/// directory, prints them, and exits with `exit_code`.
#[cfg(unix)]
pub fn install_fake_npm(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = dir.join("bin");
    fs::create_dir_all(&bin_dir).expect("Failed to create fake bin dir");
    let npm = bin_dir.join("npm");
    fs::write(
        &npm,
        format!(
            "#!/bin/sh\necho \"$@\" > npm-args.txt\necho \"fake npm $@\"\nexit {}\n",
            exit_code
        ),
    )
    .expect("Failed to write fake npm");
    fs::set_permissions(&npm, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake npm executable");
    bin_dir
}
