//! # Kiln Engine
//!
//! Hook discovery and execution for the kiln project scaffolding tool.
//!
//! Before and after a template is instantiated, kiln looks for optional
//! `pre_gen_project` / `post_gen_project` scripts in the template's `hooks/`
//! directory, renders them against the project context and runs them in the
//! target project directory.

pub mod hooks;

// Re-export error types from core
pub use kiln_core::{Error, RenderContext, Result};

// Re-export commonly used types
pub use hooks::{
    HookLocator, HookName, HookRegistry, HookRunner, ScriptExecutor, find_hooks, run_hook,
};
