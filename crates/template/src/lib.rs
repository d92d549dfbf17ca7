//! # Kiln Template
//!
//! Template engine integration for kiln using minijinja.
//!
//! Hook scripts may reference scaffolding variables (`{{ project_slug }}`);
//! this crate renders them against the current project context before the
//! hook engine executes them.

pub mod engine;

pub use engine::TemplateEngine;

use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Template engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// Template rendering error
    #[error("Template error at {location}: {message}")]
    Render { location: String, message: String },

    /// Template syntax error
    #[error("Template syntax error: {0}")]
    Syntax(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        let location = match (err.name(), err.line()) {
            (Some(name), Some(line)) => format!("{name} line {line}"),
            (None, Some(line)) => format!("line {line}"),
            (Some(name), None) => name.to_string(),
            (None, None) => "unknown location".to_string(),
        };

        if matches!(err.kind(), minijinja::ErrorKind::SyntaxError) {
            return Error::Syntax(format!("{location}: {err}"));
        }

        Error::Render {
            location,
            message: err.to_string(),
        }
    }
}

impl From<Error> for kiln_core::Error {
    fn from(err: Error) -> Self {
        kiln_core::Error::Template(err.to_string())
    }
}
