//! Error types for CLI commands

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a hook run from command-line input
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// `--var` argument without `KEY=VALUE` shape
    #[error("Invalid variable '{0}': expected KEY=VALUE")]
    InvalidVariable(String),

    /// Context file could not be read
    #[error("Failed to read context file {}: {source}", .path.display())]
    ContextRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Context file is not valid JSON
    #[error("Failed to parse context file {}: {source}", .path.display())]
    ContextParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Context file is valid JSON but not an object
    #[error("Context file {} must contain a JSON object", .0.display())]
    ContextNotObject(PathBuf),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
