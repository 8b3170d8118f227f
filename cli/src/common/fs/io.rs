//! # devkit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem operations devkit performs when it
//! generates files. The one rule every generator follows is that an existing
//! file is never overwritten, so the write helper here is a *create-if-absent*
//! write built on `OpenOptions::create_new`: the existence check and the
//! creation are a single operation, and a file that appears between a
//! command's own checks and its write is still left alone.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; errors if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with error context.
//! - **`write_new_file`**: Writes content to a path only if nothing exists there yet, reporting a [`WriteOutcome`].
//! - **`is_empty_dir`**: Whether a directory has no entries.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&project_dir.join("src"))?;
//! match io::write_new_file(&project_dir.join("README.md"), &readme)? {
//!     io::WriteOutcome::Created => println!("created README.md"),
//!     io::WriteOutcome::Skipped => println!("README.md already exists"),
//! }
//! ```
//!
use crate::core::error::{DevkitError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

/// What happened to a file passed to [`write_new_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// Something already existed at the path; nothing was written.
    Skipped,
}

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DevkitError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string, with the path in the error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path` unless something already exists there.
///
/// The parent directory must already exist. The file is opened with
/// `create_new`, so an existing file (or directory, or symlink) at `path` is
/// reported as [`WriteOutcome::Skipped`] and left untouched.
///
/// # Errors
///
/// Any I/O failure other than "already exists".
pub fn write_new_file(path: &Path, content: &str) -> Result<WriteOutcome> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Skipping existing file: {:?}", path);
            return Ok(WriteOutcome::Skipped);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create file {:?}", path));
        }
    };

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(WriteOutcome::Created)
}

/// Returns `true` when `path` is a directory with no entries.
pub fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(path).with_context(|| format!("Failed to list directory {:?}", path))?;
    Ok(entries.next().is_none())
}
