//! # devkit Init Templates
//!
//! File: cli/src/commands/init/templates.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed content of every file `devkit init` generates. Text files
//! (entry point, `.env.example`, `README.md`) are Tera templates rendered
//! through `core::templating`; the JSON files (`package.json`,
//! `tsconfig.json`) are typed structs printed with `serde_json`, which keeps
//! their key order stable and their quoting correct.
//!
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Packages installed as dev dependencies for TypeScript projects.
pub const TYPESCRIPT_DEV_DEPENDENCIES: [&str; 3] = ["typescript", "ts-node", "@types/node"];

const ENTRY_TEMPLATE: &str = "\
{{ dotenv_import }}

console.log('🚀 Welcome to your new devkit-powered {{ flavor }} app!');
console.log('NODE_ENV:', process.env.NODE_ENV || 'development');
";

const ENV_EXAMPLE_TEMPLATE: &str = "\
# Example environment configuration
NODE_ENV=development
PORT={{ port }}
API_URL=http://localhost:{{ port }}/api

# Add your own variables here
SECRET_KEY=changeme
";

const README_TEMPLATE: &str = "\
# {{ project_name }}

This project was bootstrapped with **devkit**.

## Getting Started

1. Install dependencies:
   ```bash
   npm install
   ```

2. Create your `.env` file from `.env.example` (you can use `devkit add env`):
   ```bash
   devkit add env
   ```

3. Run the dev server:
   ```bash
   devkit run dev
   ```

Or directly with npm:

```bash
npm run dev
```

## Notes

- Environment variables are loaded using `dotenv` from a `.env` file.
- Edit `{{ entry_file }}` to start building your application.
";

/// Relative path of the entry point for the chosen language.
pub fn entry_file(use_typescript: bool) -> &'static str {
    if use_typescript {
        "src/index.ts"
    } else {
        "src/index.js"
    }
}

/// Renders `src/index.{js,ts}`.
pub fn render_entry(use_typescript: bool) -> Result<String> {
    let mut context = HashMap::new();
    let (dotenv_import, flavor) = if use_typescript {
        ("import 'dotenv/config';", "TypeScript")
    } else {
        ("require('dotenv').config();", "Node.js")
    };
    context.insert("dotenv_import".to_string(), dotenv_import.to_string());
    context.insert("flavor".to_string(), flavor.to_string());
    render_text(entry_file(use_typescript), ENTRY_TEMPLATE, &context)
}

/// Renders `.env.example` for the given port.
pub fn render_env_example(port: u16) -> Result<String> {
    let mut context = HashMap::new();
    context.insert("port".to_string(), port.to_string());
    render_text(".env.example", ENV_EXAMPLE_TEMPLATE, &context)
}

/// Renders `README.md`.
pub fn render_readme(project_name: &str, use_typescript: bool) -> Result<String> {
    let mut context = HashMap::new();
    context.insert("project_name".to_string(), project_name.to_string());
    context.insert(
        "entry_file".to_string(),
        entry_file(use_typescript).to_string(),
    );
    render_text("README.md", README_TEMPLATE, &context)
}

// Generated text files always end with exactly one newline.
fn render_text(name: &str, template: &str, context: &HashMap<String, String>) -> Result<String> {
    let mut rendered = templating::render_str(name, template, context)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// The generated `package.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub main: String,
    pub scripts: ManifestScripts,
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestScripts {
    pub dev: String,
    pub start: String,
}

impl ProjectManifest {
    pub fn new(project_name: &str, use_typescript: bool) -> Self {
        let run = if use_typescript {
            "ts-node src/index.ts"
        } else {
            "node ./src/index.js"
        };
        let mut dependencies = BTreeMap::new();
        dependencies.insert("dotenv".to_string(), "^16.0.0".to_string());
        Self {
            name: project_name.to_string(),
            version: "1.0.0".to_string(),
            private: true,
            main: entry_file(use_typescript).to_string(),
            scripts: ManifestScripts {
                dev: run.to_string(),
                start: run.to_string(),
            },
            dependencies,
        }
    }
}

/// The generated `tsconfig.json`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    compiler_options: CompilerOptions,
    include: Vec<&'static str>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    target: &'static str,
    module: &'static str,
    module_resolution: &'static str,
    es_module_interop: bool,
    strict: bool,
    skip_lib_check: bool,
    root_dir: &'static str,
    out_dir: &'static str,
    types: Vec<&'static str>,
}

/// Renders `package.json` as pretty-printed JSON with a trailing newline.
pub fn render_manifest(project_name: &str, use_typescript: bool) -> Result<String> {
    to_pretty_json(&ProjectManifest::new(project_name, use_typescript), "package.json")
}

/// Renders `tsconfig.json`.
pub fn render_tsconfig() -> Result<String> {
    let tsconfig = TsConfig {
        compiler_options: CompilerOptions {
            target: "ES2020",
            module: "commonjs",
            module_resolution: "node",
            es_module_interop: true,
            strict: true,
            skip_lib_check: true,
            root_dir: "src",
            out_dir: "dist",
            types: vec!["node"],
        },
        include: vec!["src"],
    };
    to_pretty_json(&tsconfig, "tsconfig.json")
}

fn to_pretty_json<T: Serialize>(value: &T, name: &str) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", name))?;
    json.push('\n');
    Ok(json)
}
