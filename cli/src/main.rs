//! # devkit Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the devkit CLI, a small
//! developer-experience toolkit for bootstrapping Node.js projects. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//! - Reporting failures and setting the exit status
//!
//! ## Architecture
//!
//! - Each top-level command (`init`, `add`, `run`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level, printed once, and turned into exit code 1
//! - Running `devkit` with no command prints the help text
//!
//! ## Examples
//!
//! ```bash
//! devkit init my-app --ts
//! cd my-app
//! devkit add env
//! devkit -v run dev
//! ```
//!
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (init, add, run)
mod common; // Shared utilities (fs, process)
mod core; // Core infrastructure (errors, config, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "devkit",
    about = "🧰 devkit: Developer Experience toolkit CLI for Node.js projects",
    long_about = "Bootstrap Node.js projects, create .env files interactively,\n\
                  and run the dev server from one place.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new Node.js project with a clean structure
    Init(commands::init::InitArgs),
    /// Add helpers or configuration to the current project
    Add(commands::add::AddArgs),
    /// Run convenience commands on the current project
    Run(commands::run::RunArgs),
}

impl Commands {
    /// What to tell the user when this command fails.
    fn failure_message(&self) -> &'static str {
        match self {
            Commands::Init(_) => "❌ Failed to initialize project.",
            Commands::Add(_) => "❌ Failed to create .env file.",
            Commands::Run(_) => "❌ Failed to run dev server.",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let failure_message = command.failure_message();
    let command_result = match command {
        Commands::Init(args) => commands::init::handle_init(args).await,
        Commands::Add(args) => commands::add::handle_add(args).await,
        Commands::Run(args) => commands::run::handle_run(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("{}", failure_message);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
