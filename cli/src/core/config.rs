//! # devkit Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the optional, user-level ("global") devkit configuration.
//! The configuration is a convenience layer: it only changes the defaults used
//! by `devkit init`, so any problem reading it is reported as a warning and the
//! command continues with whatever could be loaded.
//!
//! ## Architecture
//!
//! Configuration sources (later sources override earlier ones key by key):
//! 1. `~/.devkitrc` (legacy name, JSON content)
//! 2. `~/.devkit.config.json`
//!
//! Each document must be a JSON object. The two objects are merged shallowly
//! into an [`EffectiveConfig`], which exposes typed accessors for the keys
//! devkit understands:
//!
//! - `defaultPort`: port written into the generated `.env.example` (default 3000)
//! - `useTypeScript`: scaffold a TypeScript project even without `--ts`
//!
//! Keys of the wrong JSON type are ignored rather than rejected.
//!
//! ## Examples
//!
//! ```json
//! {
//!   "defaultPort": 4000,
//!   "useTypeScript": true
//! }
//! ```
//!
//! ```rust
//! let cfg = config::load_global_config();
//! let port = cfg.default_port().unwrap_or(config::DEFAULT_PORT);
//! ```
//!
//! The configuration is loaded once per command execution and passed by
//! reference to the code that needs it.
//!
use crate::core::error::DevkitError;
use serde_json::{Map, Value};
use std::{fs, path::Path};
use tracing::{debug, info, warn};

/// Legacy global config file name, looked up in the home directory.
pub const RC_CONFIG_FILENAME: &str = ".devkitrc";
/// JSON-named global config file; wins over the rc file on key collision.
pub const JSON_CONFIG_FILENAME: &str = ".devkit.config.json";

/// Port used when `defaultPort` is not configured.
pub const DEFAULT_PORT: u16 = 3000;

const KEY_DEFAULT_PORT: &str = "defaultPort";
const KEY_USE_TYPESCRIPT: &str = "useTypeScript";

/// The merged global configuration.
///
/// A flat map of setting name to JSON value. Unknown keys are kept so they show
/// up in debug logs, but only the accessors below give them meaning.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EffectiveConfig {
    values: Map<String, Value>,
}

impl EffectiveConfig {
    /// Builds a config from an already merged map.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// `defaultPort`, when it is an integer in the valid TCP port range.
    pub fn default_port(&self) -> Option<u16> {
        match self.values.get(KEY_DEFAULT_PORT)? {
            Value::Number(n) => n
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .filter(|p| *p > 0),
            other => {
                debug!("Ignoring non-numeric {}: {}", KEY_DEFAULT_PORT, other);
                None
            }
        }
    }

    /// `useTypeScript`, when it is a JSON boolean.
    pub fn use_typescript(&self) -> Option<bool> {
        self.values.get(KEY_USE_TYPESCRIPT).and_then(Value::as_bool)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Loads the global configuration from the current user's home directory.
///
/// Never fails. If the home directory cannot be determined, or neither file
/// can be used, an empty configuration is returned.
pub fn load_global_config() -> EffectiveConfig {
    match dirs::home_dir() {
        Some(home) => load_global_config_from(&home),
        None => {
            warn!("Could not determine home directory; using built-in defaults.");
            EffectiveConfig::default()
        }
    }
}

/// Loads and merges the global config files found in `home`.
pub fn load_global_config_from(home: &Path) -> EffectiveConfig {
    let rc_config = read_json_config_if_exists(&home.join(RC_CONFIG_FILENAME));
    let json_config = read_json_config_if_exists(&home.join(JSON_CONFIG_FILENAME));
    let merged = merge_configs(rc_config.unwrap_or_default(), json_config);
    let config = EffectiveConfig::from_map(merged);
    if config.is_empty() {
        debug!("No global configuration found; using built-in defaults.");
    } else {
        debug!("Effective global configuration: {:?}", config);
    }
    config
}

/// Reads one config document. `None` means "contributes nothing".
fn read_json_config_if_exists(path: &Path) -> Option<Map<String, Value>> {
    if !path.exists() {
        debug!("Global config file not found at {}", path.display());
        return None;
    }
    match parse_config_file(path) {
        Ok(Some(map)) => {
            info!("Loaded global configuration from: {}", path.display());
            Some(map)
        }
        Ok(None) => {
            debug!("Global config file {} is empty, ignoring.", path.display());
            None
        }
        Err(e) => {
            // Config problems never stop a command.
            warn!("{}", e);
            None
        }
    }
}

fn parse_config_file(path: &Path) -> Result<Option<Map<String, Value>>, DevkitError> {
    let parse_error = |reason: String| DevkitError::ConfigParse {
        path: path.to_path_buf(),
        reason,
    };

    let raw = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(raw).map_err(|e| parse_error(e.to_string()))? {
        Value::Object(map) => Ok(Some(map)),
        other => Err(parse_error(format!(
            "expected a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Shallow merge: keys from `overrides` replace keys in `base`.
fn merge_configs(
    mut base: Map<String, Value>,
    overrides: Option<Map<String, Value>>,
) -> Map<String, Value> {
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            base.insert(key, value);
        }
    }
    base
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_config(home: &Path, name: &str, content: &str) {
        fs::write(home.join(name), content).unwrap();
    }

    #[test]
    fn test_no_config_files_is_empty() {
        let home = tempdir().unwrap();
        let cfg = load_global_config_from(home.path());
        assert!(cfg.is_empty());
        assert_eq!(cfg.default_port(), None);
        assert_eq!(cfg.use_typescript(), None);
    }

    #[test]
    fn test_json_file_overrides_rc_file() {
        let home = tempdir().unwrap();
        write_config(
            home.path(),
            RC_CONFIG_FILENAME,
            r#"{ "defaultPort": 4000, "useTypeScript": true, "editor": "vim" }"#,
        );
        write_config(home.path(), JSON_CONFIG_FILENAME, r#"{ "defaultPort": 5000 }"#);

        let cfg = load_global_config_from(home.path());
        assert_eq!(cfg.default_port(), Some(5000));
        // Keys only present in the rc file survive the merge.
        assert_eq!(cfg.use_typescript(), Some(true));
        assert_eq!(cfg.values.get("editor"), Some(&json!("vim")));
    }

    #[test]
    fn test_malformed_file_contributes_nothing() {
        let home = tempdir().unwrap();
        write_config(home.path(), RC_CONFIG_FILENAME, r#"{ "defaultPort": 4100 }"#);
        write_config(home.path(), JSON_CONFIG_FILENAME, "{ not json");

        let cfg = load_global_config_from(home.path());
        assert_eq!(cfg.default_port(), Some(4100));
    }

    #[test]
    fn test_non_object_and_blank_documents_are_ignored() {
        let home = tempdir().unwrap();
        write_config(home.path(), RC_CONFIG_FILENAME, "   \n");
        write_config(home.path(), JSON_CONFIG_FILENAME, "[1, 2, 3]");

        let cfg = load_global_config_from(home.path());
        assert!(cfg.is_empty());
    }

    #[test]
    fn test_parse_config_file_reports_non_object() {
        let home = tempdir().unwrap();
        let path = home.path().join(JSON_CONFIG_FILENAME);
        fs::write(&path, "42").unwrap();

        let err = parse_config_file(&path).unwrap_err();
        assert!(matches!(err, DevkitError::ConfigParse { .. }));
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_accessors_ignore_wrong_types() {
        let cfg = EffectiveConfig::from_map(
            json!({ "defaultPort": "8080", "useTypeScript": "yes" })
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(cfg.default_port(), None);
        assert_eq!(cfg.use_typescript(), None);

        let cfg = EffectiveConfig::from_map(
            json!({ "defaultPort": 70000 }).as_object().cloned().unwrap(),
        );
        assert_eq!(cfg.default_port(), None);

        let cfg = EffectiveConfig::from_map(
            json!({ "defaultPort": 0, "useTypeScript": false })
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(cfg.default_port(), None);
        assert_eq!(cfg.use_typescript(), Some(false));
    }
}
