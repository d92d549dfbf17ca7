//! Render context assembly from command-line input
//!
//! The context starts from an optional JSON object file; each `--var KEY=VALUE`
//! then sets a top-level string variable, replacing any value from the file.

use crate::error::{CommandError, Result};
use kiln_core::RenderContext;
use std::fs;
use std::path::Path;

/// Build the render context for a hook run
pub fn load_context(file: Option<&Path>, vars: &[String]) -> Result<RenderContext> {
    let mut context = match file {
        Some(path) => read_context_file(path)?,
        None => RenderContext::new(),
    };

    for var in vars {
        let (key, value) = parse_var(var)?;
        context.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    }

    Ok(context)
}

fn read_context_file(path: &Path) -> Result<RenderContext> {
    let content = fs::read_to_string(path).map_err(|source| CommandError::ContextRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| CommandError::ContextParse {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(CommandError::ContextNotObject(path.to_path_buf())),
    }
}

fn parse_var(var: &str) -> Result<(&str, &str)> {
    match var.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(CommandError::InvalidVariable(var.to_string())),
    }
}
