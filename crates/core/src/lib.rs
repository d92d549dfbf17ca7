//! Core types and utilities for kiln
//!
//! This is the foundation crate (Layer 0) that all other kiln crates depend on.
//! It provides:
//! - Base error types
//! - Platform capabilities
//! - The template rendering seam used by the hook engine
//!
//! This crate has no dependencies on other kiln crates.

pub mod error;
pub mod platform;
pub mod traits;

pub use error::{Error, Result};
pub use traits::{NoOpRenderer, RenderContext, TemplateRenderer};
