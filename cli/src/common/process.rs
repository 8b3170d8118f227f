//! # devkit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Helpers for running external programs (npm) the way devkit needs them:
//! the child shares the terminal with devkit (stdin, stdout and stderr are
//! inherited, so npm's output and any dev server prompts go straight to the
//! user), and devkit waits for it to finish before continuing.
//!
//! ## Architecture
//!
//! - **`run_streamed`**: Spawns a program in a working directory with inherited
//!   stdio and waits for its exit status. Spawn failures are returned as the raw
//!   `std::io::Error` so callers can phrase them for their own command.
//! - **`check_status`**: Turns a non-successful `ExitStatus` into
//!   `DevkitError::ExternalCommand`.
//! - **`describe_status`**: Human-readable "exited with code N" text.
//! - **`npm_program`**: The npm executable name for the current platform.
//!
//! ## Usage
//!
//! ```rust
//! let status = process::run_streamed(process::npm_program(), &["run", "dev"], &cwd).await?;
//! process::check_status("npm run dev", status)?;
//! ```
//!
use crate::core::error::{DevkitError, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Name of the npm executable. On Windows npm is a `.cmd` shim, which
/// `CreateProcess` will not find from the bare name.
pub fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Formats a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `program` with `args` in `cwd`, inheriting all standard streams, and
/// waits for it to exit.
pub async fn run_streamed(
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> std::io::Result<ExitStatus> {
    debug!(
        "Running `{}` in {}",
        display_command(program, args),
        cwd.display()
    );
    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;
    let status = child.wait().await?;
    debug!("`{}` finished: {}", display_command(program, args), status);
    Ok(status)
}

/// Describes how a process ended.
pub fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// `Ok(())` for a zero exit code, `DevkitError::ExternalCommand` otherwise.
pub fn check_status(cmd: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(DevkitError::ExternalCommand {
        cmd: cmd.to_string(),
        status: describe_status(status),
    }
    .into())
}
