//! # devkit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by more than one command, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Directory creation, file reading, and create-if-absent writes.
//! - **`process`**: Running npm with inherited standard streams.
//!
//! ```rust
//! use crate::common::{fs::io, process};
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for executing external processes.
pub mod process;
