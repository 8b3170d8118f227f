//! # devkit Scaffold Plan
//!
//! File: cli/src/commands/init/plan.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Decides *what* `devkit init` generates and materializes it on disk.
//!
//! ## Architecture
//!
//! 1. [`ScaffoldOptions::resolve`] combines the CLI flags with the global
//!    configuration: TypeScript is on if either the `--ts` flag or
//!    `useTypeScript` says so; the port comes from `defaultPort` or 3000.
//! 2. [`build_plan`] turns the options into a [`ScaffoldPlan`]: the
//!    directories and files to create (relative to the project root, in
//!    generation order) plus the dev dependencies to install afterwards.
//! 3. [`prepare_target_dir`] validates the project directory (see below).
//! 4. [`apply_plan`] creates every directory and file that does not exist
//!    yet and reports what it did. Existing files are never touched, which
//!    makes re-running `init` on a half-finished project safe.
//!
//! ## Target directory rules
//!
//! | State of `<cwd>/<name>`                               | Result            |
//! |-------------------------------------------------------|-------------------|
//! | missing                                               | created (`mkdir -p`) |
//! | a file                                                | `Validation` error |
//! | empty directory                                       | used as-is        |
//! | directory holding only devkit-generated entries       | resumed           |
//! | directory holding anything else                       | `Validation` error |
//!
use crate::common::fs::io::{self, WriteOutcome};
use crate::core::config::{EffectiveConfig, DEFAULT_PORT};
use crate::core::error::{DevkitError, Result};
use crate::commands::init::templates;
use anyhow::Context;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Entries devkit (or the npm install it runs) may have left in a project
/// besides the planned files.
const GENERATED_ARTIFACTS: [&str; 3] = ["node_modules", "package-lock.json", ".env"];

/// Effective settings for one `init` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub project_name: String,
    pub use_typescript: bool,
    pub port: u16,
}

impl ScaffoldOptions {
    /// Merges CLI input with the global configuration.
    ///
    /// The flag and `useTypeScript` are OR'd: either one enables TypeScript,
    /// and neither can force it off.
    pub fn resolve(project_name: &str, cli_typescript: bool, config: &EffectiveConfig) -> Self {
        Self {
            project_name: project_name.to_string(),
            use_typescript: cli_typescript || config.use_typescript().unwrap_or(false),
            port: config.default_port().unwrap_or(DEFAULT_PORT),
        }
    }
}

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// Everything `init` will create, in order.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
    /// npm packages to install with `--save-dev` once the files exist.
    pub dev_dependencies: Vec<&'static str>,
}

impl ScaffoldPlan {
    /// First path component of every planned directory and file.
    pub fn top_level_entries(&self) -> BTreeSet<OsString> {
        self.directories
            .iter()
            .chain(self.files.iter().map(|f| &f.relative_path))
            .filter_map(|p| match p.components().next() {
                Some(Component::Normal(name)) => Some(name.to_os_string()),
                _ => None,
            })
            .collect()
    }
}

/// Result of materializing one planned path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub relative_path: PathBuf,
    pub outcome: WriteOutcome,
}

/// How [`prepare_target_dir`] found the project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Did not exist; created.
    Created,
    /// Existed with no entries.
    Empty,
    /// Existed with entries from an earlier `init`.
    Resumed,
}

/// Builds the list of directories and files for the given options.
pub fn build_plan(options: &ScaffoldOptions) -> Result<ScaffoldPlan> {
    let ts = options.use_typescript;
    let mut files = vec![
        PlannedFile {
            relative_path: PathBuf::from(templates::entry_file(ts)),
            contents: templates::render_entry(ts)?,
        },
        PlannedFile {
            relative_path: PathBuf::from(".env.example"),
            contents: templates::render_env_example(options.port)?,
        },
        PlannedFile {
            relative_path: PathBuf::from("package.json"),
            contents: templates::render_manifest(&options.project_name, ts)?,
        },
    ];
    if ts {
        files.push(PlannedFile {
            relative_path: PathBuf::from("tsconfig.json"),
            contents: templates::render_tsconfig()?,
        });
    }
    files.push(PlannedFile {
        relative_path: PathBuf::from("README.md"),
        contents: templates::render_readme(&options.project_name, ts)?,
    });

    Ok(ScaffoldPlan {
        directories: vec![PathBuf::from("src")],
        files,
        dev_dependencies: if ts {
            templates::TYPESCRIPT_DEV_DEPENDENCIES.to_vec()
        } else {
            Vec::new()
        },
    })
}

/// Validates (and if needed creates) the project directory.
///
/// `display_name` is the name the user typed, used in error messages.
/// Nothing is written when this returns an error.
pub fn prepare_target_dir(
    target: &Path,
    display_name: &str,
    plan: &ScaffoldPlan,
) -> Result<TargetState> {
    if !target.exists() {
        io::ensure_dir_exists(target)?;
        return Ok(TargetState::Created);
    }

    if !target.is_dir() {
        anyhow::bail!(DevkitError::Validation(format!(
            "Path \"{}\" already exists and is not a directory.",
            display_name
        )));
    }

    if io::is_empty_dir(target)? {
        return Ok(TargetState::Empty);
    }

    let foreign = foreign_entries(target, plan)?;
    if !foreign.is_empty() {
        debug!("Unexpected entries in {}: {:?}", target.display(), foreign);
        anyhow::bail!(DevkitError::Validation(format!(
            "Directory \"{}\" already exists and is not empty. \
             Please choose a different name or start with an empty directory.",
            display_name
        )));
    }
    Ok(TargetState::Resumed)
}

/// Entries of `target` that neither the plan nor a previous run produced.
fn foreign_entries(target: &Path, plan: &ScaffoldPlan) -> Result<Vec<OsString>> {
    let mut known = plan.top_level_entries();
    known.extend(GENERATED_ARTIFACTS.iter().map(OsString::from));

    let mut foreign = Vec::new();
    for entry in fs::read_dir(target)
        .with_context(|| format!("Failed to list directory {}", target.display()))?
    {
        let name = entry
            .with_context(|| format!("Failed to read entry in {}", target.display()))?
            .file_name();
        if !known.contains(&name) {
            foreign.push(name);
        }
    }
    Ok(foreign)
}

/// Creates every planned directory and file under `target` that is missing.
pub fn apply_plan(target: &Path, plan: &ScaffoldPlan) -> Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(plan.directories.len() + plan.files.len());

    for dir in &plan.directories {
        let path = target.join(dir);
        let outcome = if path.exists() {
            WriteOutcome::Skipped
        } else {
            io::ensure_dir_exists(&path)?;
            WriteOutcome::Created
        };
        reports.push(FileReport {
            relative_path: dir.clone(),
            outcome,
        });
    }

    for file in &plan.files {
        let path = target.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            io::ensure_dir_exists(parent)?;
        }
        let outcome = io::write_new_file(&path, &file.contents)?;
        reports.push(FileReport {
            relative_path: file.relative_path.clone(),
            outcome,
        });
    }
    Ok(reports)
}
