//! # devkit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Organizational entry point for filesystem helpers. Currently a single
//! submodule:
//!
//! - **`io`**: directory creation, file reading, and the create-if-absent
//!   write used by every generator (`init`, `add env`).
//!
//! Callers import the submodule directly:
//!
//! ```rust
//! use crate::common::fs::io;
//! io::ensure_dir_exists(Path::new("./my-app/src"))?;
//! ```
//!

/// Basic file and directory I/O helpers.
pub mod io;
