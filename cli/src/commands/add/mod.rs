//! # devkit Add Command Group
//!
//! File: cli/src/commands/add/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Router for `devkit add`, which adds helpers or configuration to the
//! project in the current directory. The only subcommand today is `env`.
//!
//! ```bash
//! # Create .env from .env.example, prompting for each value
//! devkit add env
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `devkit add env`.
mod env;

/// # Add Command Group Arguments (`AddArgs`)
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[command(subcommand)]
    command: AddCommand,
}

/// # Add Subcommands (`AddCommand`)
#[derive(Subcommand, Debug)]
enum AddCommand {
    /// Create a .env file from .env.example and prompt for values
    Env(env::EnvArgs),
}

/// # Handle Add Command (`handle_add`)
///
/// Dispatches to the selected `devkit add` subcommand.
pub async fn handle_add(args: AddArgs) -> Result<()> {
    match args.command {
        AddCommand::Env(args) => env::handle_env(args).await?,
    }
    Ok(())
}
