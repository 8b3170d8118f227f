//! # devkit Init Command
//!
//! File: cli/src/commands/init/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devkit init <project-name>`, which scaffolds a new
//! Node.js project. It handles:
//! - Parsing the project name and the `--ts` / `--typescript` flag
//! - Loading the global configuration (`~/.devkitrc`, `~/.devkit.config.json`)
//! - Validating or creating the target directory
//! - Writing the project files, skipping any that already exist
//! - Installing TypeScript tooling through npm (TypeScript projects only)
//! - Printing next steps
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Resolve `ScaffoldOptions` from the flags and the global config
//! 2. Build the `ScaffoldPlan` (see `plan.rs`)
//! 3. Validate the target directory; fail before writing anything if it is unusable
//! 4. Apply the plan (create-if-absent for every file)
//! 5. For TypeScript, run `npm install --save-dev typescript ts-node @types/node`;
//!    a failed install only produces a warning
//! 6. Print the completion message
//!
//! ## Examples
//!
//! ```bash
//! # JavaScript project in ./my-app
//! devkit init my-app
//!
//! # TypeScript project
//! devkit init my-api --ts
//! ```
//!
use crate::common::fs::io::WriteOutcome;
use crate::common::process;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::path::Path;
use tracing::{debug, info};

mod plan;
mod templates;

pub use plan::{ScaffoldOptions, TargetState};

/// # Init Arguments (`InitArgs`)
///
/// Command-line arguments accepted by `devkit init`.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create (relative to the current directory).
    /// Also used as the `name` in the generated package.json.
    project_name: String,

    /// Initialize the project with TypeScript support.
    /// Also enabled by `"useTypeScript": true` in the global config.
    #[arg(long = "typescript", visible_alias = "ts")]
    typescript: bool,
}

/// # Handle Init Command (`handle_init`)
///
/// Entry point for `devkit init`. Loads the global configuration, resolves
/// the effective options and scaffolds the project under the current
/// working directory.
pub async fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling init command for '{}'", args.project_name);

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let cfg = config::load_global_config();
    let options = ScaffoldOptions::resolve(&args.project_name, args.typescript, &cfg);
    debug!("Resolved scaffold options: {:?}", options);

    init_project(&cwd, &options).await
}

/// Scaffolds `options.project_name` inside `base_dir`.
pub async fn init_project(base_dir: &Path, options: &ScaffoldOptions) -> Result<()> {
    let scaffold = plan::build_plan(options).context("Failed to prepare project files")?;
    let target = base_dir.join(&options.project_name);

    let state = plan::prepare_target_dir(&target, &options.project_name, &scaffold)?;
    debug!("Target directory state: {:?}", state);

    println!("📁 Creating new project in {}", target.display());
    if state == TargetState::Resumed {
        println!("↪️  Existing devkit files found; only missing files will be created.");
    }
    if options.use_typescript {
        println!("📝 Using TypeScript project template (via CLI flag or global config).");
    }

    let reports = plan::apply_plan(&target, &scaffold)?;
    for report in &reports {
        match report.outcome {
            WriteOutcome::Created => info!("Created {}", report.relative_path.display()),
            WriteOutcome::Skipped => info!(
                "Skipped {} (already exists)",
                report.relative_path.display()
            ),
        }
    }

    if !scaffold.dev_dependencies.is_empty() {
        install_dev_dependencies(&target, &scaffold.dev_dependencies).await;
    }

    print_completion_message(&options.project_name);
    Ok(())
}

/// Runs `npm install --save-dev <packages>` in the project directory.
///
/// Never fails: the project is usable without the tooling, so a failed
/// install is reported with the command to run by hand.
async fn install_dev_dependencies(project_dir: &Path, packages: &[&str]) {
    println!(
        "📦 Installing TypeScript tooling ({}) as devDependencies...",
        packages.join(", ")
    );

    let mut args = vec!["install", "--save-dev"];
    args.extend_from_slice(packages);
    let npm = process::npm_program();
    let cmd = process::display_command("npm", &args);

    let result = match process::run_streamed(npm, &args, project_dir).await {
        Ok(status) => process::check_status(&cmd, status),
        Err(e) => Err(e).with_context(|| format!("Failed to start `{}`", cmd)),
    };

    match result {
        Ok(()) => println!("✅ TypeScript tooling installed successfully."),
        Err(e) => {
            debug!("Dev dependency install failed: {:?}", e);
            eprintln!("⚠️  Failed to automatically install TypeScript tooling: {:#}", e);
            eprintln!("    You can install them manually with:\n    {}", cmd);
        }
    }
}

fn print_completion_message(project_name: &str) {
    println!("✅ Project initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  cd {}", project_name);
    println!("  npm install");
    println!("  devkit add env    # create your .env file interactively");
    println!("  devkit run dev    # run the dev server");
}
