//! # devkit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the command
//! handlers: configuration loading, error types, and template rendering.
//!
//! ## Architecture
//!
//! - `config`: Loads and merges the global `~/.devkitrc` / `~/.devkit.config.json` files
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Renders the fixed project file templates with Tera
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading the global configuration
//! use crate::core::error::{DevkitError, Result}; // For error handling
//! use crate::core::templating; // For rendering generated files
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
