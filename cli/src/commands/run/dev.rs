//! # devkit Run Dev Command
//!
//! File: cli/src/commands/run/dev.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `devkit run dev`, a thin wrapper around
//! `npm run dev` that checks the project first so the user gets a clear
//! message instead of npm's.
//!
//! ## Architecture
//!
//! 1. `package.json` must exist in the current directory (`MissingManifest`).
//! 2. It must parse as JSON (`ManifestParse`).
//! 3. It must declare a non-empty `scripts.dev` string (`MissingScript`).
//!    All three checks happen before any process is spawned.
//! 4. `npm run dev` runs in the directory with inherited stdio; devkit waits
//!    for it. A non-zero exit, a signal, or a spawn failure becomes
//!    `DevkitError::DevServer`.
//!
use crate::common::process;
use crate::core::error::{DevkitError, Result};
use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const MANIFEST_FILENAME: &str = "package.json";
const DEV_SCRIPT: &str = "dev";

/// Arguments for `devkit run dev` (none yet).
#[derive(Parser, Debug, Default)]
pub struct DevArgs {}

/// Checks that `<dir>/package.json` declares a runnable `dev` script and
/// returns the script's command line.
pub fn validate_manifest(dir: &Path) -> Result<String> {
    let manifest_path = dir.join(MANIFEST_FILENAME);
    if !manifest_path.exists() {
        return Err(DevkitError::MissingManifest {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let parse_error = |reason: String| DevkitError::ManifestParse {
        path: manifest_path.clone(),
        reason,
    };
    let raw = fs::read_to_string(&manifest_path).map_err(|e| parse_error(e.to_string()))?;
    let manifest: Value = serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string()))?;

    match manifest
        .get("scripts")
        .and_then(|scripts| scripts.get(DEV_SCRIPT))
        .and_then(Value::as_str)
    {
        Some(script) if !script.is_empty() => Ok(script.to_string()),
        _ => Err(DevkitError::MissingScript {
            script: DEV_SCRIPT.to_string(),
        }
        .into()),
    }
}

/// Validates the manifest in `dir` and runs `npm run dev` there.
pub async fn run_dev(dir: &Path) -> Result<()> {
    let script = validate_manifest(dir)?;
    debug!("dev script: {}", script);

    let args = ["run", DEV_SCRIPT];
    let cmd = process::display_command("npm", &args);
    println!("▶️  Running \"{}\"...", cmd);

    let status = process::run_streamed(process::npm_program(), &args, dir)
        .await
        .map_err(|e| DevkitError::DevServer(format!("Failed to start dev server: {}", e)))?;

    if !status.success() {
        return Err(DevkitError::DevServer(format!(
            "\"{}\" {}",
            cmd,
            process::describe_status(status)
        ))
        .into());
    }

    println!("✅ Dev server exited successfully.");
    Ok(())
}

/// # Handle Run Dev Command (`handle_dev`)
pub async fn handle_dev(_args: DevArgs) -> Result<()> {
    info!("Handling run dev command...");
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    run_dev(&cwd).await
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn kind(err: &anyhow::Error) -> Option<&DevkitError> {
        err.downcast_ref::<DevkitError>()
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempdir().unwrap();
        let err = validate_manifest(dir.path()).unwrap_err();
        assert!(matches!(kind(&err), Some(DevkitError::MissingManifest { .. })));
    }

    #[test]
    fn test_malformed_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "{ \"name\": ").unwrap();
        let err = validate_manifest(dir.path()).unwrap_err();
        assert!(matches!(kind(&err), Some(DevkitError::ManifestParse { .. })));
    }

    #[test]
    fn test_missing_dev_script() {
        let dir = tempdir().unwrap();
        for manifest in [
            r#"{ "name": "app" }"#,
            r#"{ "scripts": { "start": "node index.js" } }"#,
            r#"{ "scripts": { "dev": "" } }"#,
            r#"{ "scripts": { "dev": 42 } }"#,
        ] {
            fs::write(dir.path().join(MANIFEST_FILENAME), manifest).unwrap();
            let err = validate_manifest(dir.path()).unwrap_err();
            assert!(
                matches!(kind(&err), Some(DevkitError::MissingScript { .. })),
                "manifest {} gave {:?}",
                manifest,
                err
            );
        }
    }

    #[test]
    fn test_valid_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            r#"{ "scripts": { "dev": "node ./src/index.js" } }"#,
        )
        .unwrap();
        assert_eq!(validate_manifest(dir.path()).unwrap(), "node ./src/index.js");
    }

    #[tokio::test]
    async fn test_run_dev_fails_before_spawning_without_script() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), r#"{ "scripts": {} }"#).unwrap();
        let err = run_dev(dir.path()).await.unwrap_err();
        assert!(matches!(kind(&err), Some(DevkitError::MissingScript { .. })));
    }
}
