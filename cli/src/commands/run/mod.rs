//! # devkit Run Command Group
//!
//! File: cli/src/commands/run/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Router for `devkit run`, convenience commands for the project in the
//! current directory.
//!
//! ```bash
//! # Run the dev server via "npm run dev"
//! devkit run dev
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `devkit run dev`.
mod dev;

/// # Run Command Group Arguments (`RunArgs`)
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(subcommand)]
    command: RunCommand,
}

/// # Run Subcommands (`RunCommand`)
#[derive(Subcommand, Debug)]
enum RunCommand {
    /// Run the dev server using "npm run dev"
    Dev(dev::DevArgs),
}

/// # Handle Run Command (`handle_run`)
pub async fn handle_run(args: RunArgs) -> Result<()> {
    match args.command {
        RunCommand::Dev(args) => dev::handle_dev(args).await?,
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_run_dev() {
        let result = RunArgs::try_parse_from(["run", "dev"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            RunCommand::Dev(_) => {}
        }
    }

    #[test]
    fn test_run_requires_subcommand() {
        assert!(RunArgs::try_parse_from(["run"]).is_err());
    }
}
