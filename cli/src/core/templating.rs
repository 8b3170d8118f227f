//! # devkit Template Rendering
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders the project file templates that ship inside the binary. The
//! templates are plain Tera sources (see `commands::init::templates`); this
//! module turns a template plus a context map into the final file content.
//!
//! Autoescaping is always off: the output is source code and Markdown, not HTML.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = HashMap::new();
//! context.insert("project_name".to_string(), "my-app".to_string());
//! let readme = templating::render_str("README.md", "# {{ project_name }}\n", &context)?;
//! assert_eq!(readme, "# my-app\n");
//! ```
//!
use crate::core::error::{DevkitError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;
use tracing::debug;

/// Renders a single in-memory template.
///
/// `name` only identifies the template in error messages.
pub fn render_str(name: &str, template: &str, context_map: &HashMap<String, String>) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(DevkitError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;

    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(DevkitError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })?;
    debug!("Rendered template '{}' ({} bytes)", name, rendered.len());
    Ok(rendered)
}
