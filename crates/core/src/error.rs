//! Base error types for kiln
//!
//! Every failure that can stop a hook run is one of these variants. None of
//! them are retried; the caller is expected to abort scaffolding and show the
//! message.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Listing the hooks directory failed
    #[error("Failed to read hooks directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering a hook script failed
    #[error("Template error: {0}")]
    Template(String),

    /// The hook ran and exited with a non-zero status
    #[error("Hook script failed (exit status: {code})")]
    HookFailed { code: i32 },

    /// The OS refused to execute the script as a program
    #[error("Hook script failed, might be an empty file or missing a shebang")]
    HookMalformed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure to launch the hook process
    #[error("Hook script failed (error: {source})")]
    HookLaunch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Name does not match any known lifecycle point
    #[error("Unknown hook name: {0}")]
    UnknownHook(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Exit status of the hook process, when it ran to completion
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::HookFailed { code } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
