//! # devkit Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the devkit CLI so that
//! `main.rs` can route to them.
//!
//! ## Command Groups
//!
//! - `init`: Scaffold a new Node.js project
//! - `add`: Add helpers to the current project (`add env`)
//! - `run`: Convenience runners for the current project (`run dev`)
//!
//! Each command defines its own arguments structure and handler function.
//! Subcommands (`env`, `dev`) are declared inside their parent module.
//!

/// Command group for adding helpers to a project. Includes `env`.
pub mod add;
/// The `init` command, which scaffolds new projects.
pub mod init;
/// Command group for running project scripts. Includes `dev`.
pub mod run;
