//! # devkit Add Env Command
//!
//! File: cli/src/commands/add/env.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devkit add env`, which creates a `.env` file from
//! the project's `.env.example` by asking the user for each variable.
//!
//! ## Architecture
//!
//! 1. Fail with `MissingTemplate` if `.env.example` does not exist.
//! 2. If `.env` already exists, print a warning and stop (not an error).
//! 3. Parse the template into [`TemplateLine`]s. Blank lines and `#` comments
//!    pass through verbatim; every other line is `KEY=DEFAULT`, split on the
//!    first `=` only, so defaults may themselves contain `=`.
//! 4. For each variable, show `KEY (default: VALUE): ` (or `KEY: ` when there
//!    is no default) and read one line. An empty answer keeps the default.
//! 5. Write all lines, joined with `\n`, to `.env` in a single
//!    create-if-absent write.
//!
//! Prompting is a plain request/response loop over one `BufRead`, which is
//! what lets the tests drive it with an in-memory buffer.
//!
//! ## Examples
//!
//! ```text
//! $ devkit add env
//! NODE_ENV (default: development):
//! PORT (default: 3000): 8080
//! ```
//!
use crate::common::fs::io::{self, WriteOutcome};
use crate::core::error::{DevkitError, Result};
use anyhow::Context;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

pub const TEMPLATE_FILENAME: &str = ".env.example";
pub const ENV_FILENAME: &str = ".env";

/// Arguments for `devkit add env` (none yet).
#[derive(Parser, Debug, Default)]
pub struct EnvArgs {}

/// One line of `.env.example`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine {
    /// Blank line or comment, copied as-is.
    Passthrough(String),
    /// `KEY=DEFAULT`; `default` may be empty.
    Variable { key: String, default: String },
}

/// What [`generate_env_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvOutcome {
    Created,
    /// `.env` was already there; nothing was written.
    AlreadyExists,
}

/// Splits template content into lines, keeping their order.
///
/// Lines are split on `\n` with a trailing `\r` removed, so a template that
/// ends with a newline produces a final empty passthrough line (and the
/// generated file ends with a newline too).
pub fn parse_template(content: &str) -> Vec<TemplateLine> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return TemplateLine::Passthrough(line.to_string());
            }
            let (key, default) = line.split_once('=').unwrap_or((line, ""));
            TemplateLine::Variable {
                key: key.to_string(),
                default: default.to_string(),
            }
        })
        .collect()
}

/// The question shown for one variable.
pub fn prompt_label(key: &str, default: &str) -> String {
    if default.is_empty() {
        format!("{}: ", key)
    } else {
        format!("{} (default: {}): ", key, default)
    }
}

/// Asks for every variable in order and returns the resolved lines.
///
/// End of input counts as an empty answer, i.e. the default is used.
pub fn fill_template<R: BufRead, W: Write>(
    lines: &[TemplateLine],
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    let mut resolved = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            TemplateLine::Passthrough(text) => resolved.push(text.clone()),
            TemplateLine::Variable { key, default } => {
                write!(output, "{}", prompt_label(key, default))?;
                output.flush().context("Failed to flush prompt")?;

                let answer = read_answer(input)?;
                let value = if answer.is_empty() { default } else { &answer };
                debug!("{} resolved ({} chars)", key, value.len());
                resolved.push(format!("{}={}", key, value));
            }
        }
    }
    Ok(resolved)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .context("Failed to read answer from input")?;
    if read == 0 {
        debug!("Input closed; using default.");
        return Ok(String::new());
    }
    let answer = buf.strip_suffix('\n').unwrap_or(&buf);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}

/// Creates `<dir>/.env` from `<dir>/.env.example`, prompting through
/// `input`/`output`.
pub fn generate_env_file<R: BufRead, W: Write>(
    dir: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<EnvOutcome> {
    let template_path = dir.join(TEMPLATE_FILENAME);
    let env_path = dir.join(ENV_FILENAME);

    if !template_path.exists() {
        return Err(DevkitError::MissingTemplate {
            path: dir.to_path_buf(),
        }
        .into());
    }

    if env_path.exists() {
        print_already_exists(output)?;
        return Ok(EnvOutcome::AlreadyExists);
    }

    let template = io::read_file_to_string(&template_path)?;
    let lines = parse_template(&template);
    info!(
        "Parsed {} lines from {}",
        lines.len(),
        template_path.display()
    );

    writeln!(output, "🧩 Creating .env from .env.example")?;
    writeln!(output, "You will now be prompted for each environment variable.")?;
    writeln!(output, "Press Enter to accept the default value (if any).")?;
    writeln!(output)?;

    let resolved = fill_template(&lines, input, output)?;

    match io::write_new_file(&env_path, &resolved.join("\n"))? {
        WriteOutcome::Created => {
            writeln!(output)?;
            writeln!(output, "✅ .env file created successfully!")?;
            writeln!(output, "   Make sure not to commit .env to version control.")?;
            Ok(EnvOutcome::Created)
        }
        WriteOutcome::Skipped => {
            // Someone created .env while we were prompting.
            print_already_exists(output)?;
            Ok(EnvOutcome::AlreadyExists)
        }
    }
}

fn print_already_exists<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "⚠️  A .env file already exists. No changes were made.")?;
    writeln!(
        output,
        "    If you want to regenerate it, delete the existing .env and run this command again."
    )?;
    Ok(())
}

/// # Handle Add Env Command (`handle_env`)
///
/// Runs the generator against the current directory with the terminal's
/// stdin and stdout.
pub async fn handle_env(_args: EnvArgs) -> Result<()> {
    info!("Handling add env command...");
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = generate_env_file(&cwd, &mut stdin.lock(), &mut stdout.lock())?;
    debug!("add env finished: {:?}", outcome);
    Ok(())
}
