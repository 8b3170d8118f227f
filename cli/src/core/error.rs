//! # devkit Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout devkit. Every failure a
//! command handler can report to the user has a variant here, so tests (and the
//! dispatcher, if it ever needs to) can tell the kinds apart by downcasting.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DevkitError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Project target validation (`init`)
//! - Missing input files (`.env.example`, `package.json`)
//! - Manifest parsing and script lookup (`run dev`)
//! - Subprocess failures (npm)
//! - Global configuration parsing (logged as a warning, never propagated)
//! - Template rendering
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !manifest_path.exists() {
//!     return Err(DevkitError::MissingManifest { path: manifest_path.clone() }.into());
//! }
//!
//! // Pattern matching on error kinds
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<DevkitError>(), Some(DevkitError::MissingScript { .. })) => {
//!         println!("Add a dev script first.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the devkit application.
#[derive(Error, Debug)]
pub enum DevkitError {
    /// The `init` target path is in a state we refuse to scaffold into.
    #[error("{0}")]
    Validation(String),

    #[error(
        "No .env.example file found in {}. Run this command from a project initialized with devkit or add a .env.example file.",
        .path.display()
    )]
    MissingTemplate { path: PathBuf },

    #[error(
        "No package.json found in {}. Run this command from a Node.js project root.",
        .path.display()
    )]
    MissingManifest { path: PathBuf },

    #[error("Failed to read or parse {}: {reason}", .path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error(
        "No \"{script}\" script found in package.json. Add a \"{script}\" script (e.g. \"{script}\": \"node src/index.js\") and try again."
    )]
    MissingScript { script: String },

    #[error("Dev server failed: {0}")]
    DevServer(String),

    /// Global config problems. Only ever logged; see `core::config`.
    #[error("Failed to read config file at {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
