//! Configuration management for kiln
//!
//! This crate handles:
//! - Configuration loading (`kiln.toml`)
//! - XDG directory lookup
//! - Logging initialization

pub mod config;
pub mod dirs;
pub mod logging;

// Re-export error types from core
pub use kiln_core::{Error, Result};

// Re-export main types
pub use config::{Config, HooksConfig, InterpreterConfig};
pub use dirs::{config_dir, default_config_file};
