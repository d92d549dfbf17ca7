//! Template hooks
//!
//! A project template may ship scripts that run at fixed lifecycle points of
//! scaffolding: `pre_gen_project` before the project tree is generated and
//! `post_gen_project` after it.
//!
//! ## Execution Model
//!
//! - Hooks live in the template's `hooks/` directory and bind by file stem
//! - A script is rendered against the project context, then run in the
//!   project directory with inherited environment and standard streams
//! - Execution blocks until the script exits; any failure aborts the hook run
//!
//! ## Module Organization
//!
//! - `name`: Hook names and the discovered registry
//! - `locator`: Hook discovery in the template directory
//! - `script`: Script kinds and their launch strategies
//! - `executor`: Child process execution and status mapping
//! - `runner`: Orchestration (`run_hook`)

pub mod executor;
pub mod locator;
pub mod name;
pub mod runner;
pub mod script;

// Re-export main types for convenience
pub use executor::{ScriptExecutor, make_executable};
pub use locator::{HOOKS_DIR, HookLocator, find_hooks};
pub use name::{HookName, HookRegistry};
pub use runner::{HookRunner, HookRunnerBuilder, run_hook};
pub use script::{Interpreters, LaunchStrategy, ScriptKind};
