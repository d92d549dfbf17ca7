//! Hook discovery
//!
//! Finds hook scripts in the `hooks` directory of a project template.

use super::name::{HookName, HookRegistry};
use super::script::ScriptKind;
use indexmap::IndexMap;
use kiln_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory, relative to the template root, that holds hooks
pub const HOOKS_DIR: &str = "hooks";

/// Discover hook scripts in a template directory
pub struct HookLocator {
    hooks_dir: PathBuf,
}

impl HookLocator {
    /// Create a locator for the template rooted at `template_dir`
    #[must_use]
    pub fn new(template_dir: &Path) -> Self {
        Self {
            hooks_dir: template_dir.join(HOOKS_DIR),
        }
    }

    /// Directory searched for hook scripts
    #[must_use]
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Check if the hooks directory exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.hooks_dir.is_dir()
    }

    /// Build a registry of the hooks this template defines
    ///
    /// Only immediate entries of the hooks directory are considered. An entry
    /// binds to a hook when its file name, extension stripped, equals the hook
    /// name. When several files bind to the same hook, the one with the
    /// highest-precedence [`ScriptKind`] wins, then the lexicographically
    /// smallest file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] if the hooks directory exists but cannot
    /// be listed.
    pub fn locate(&self) -> Result<HookRegistry> {
        let mut registry = HookRegistry::new();

        if !self.exists() {
            tracing::debug!(
                "No hooks directory in template: {}",
                self.hooks_dir.display()
            );
            return Ok(registry);
        }

        let mut candidates: IndexMap<HookName, Vec<PathBuf>> = IndexMap::new();
        let entries = fs::read_dir(&self.hooks_dir).map_err(|e| self.discovery_error(e))?;

        for entry in entries {
            let path = entry.map_err(|e| self.discovery_error(e))?.path();

            if !path.is_file() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if is_ignored(file_name) {
                tracing::trace!("Skipping ignored file: {}", path.display());
                continue;
            }

            if let Some(name) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(HookName::from_stem)
            {
                candidates.entry(name).or_default().push(path);
            }
        }

        for (name, mut paths) in candidates {
            paths.sort_by(|a, b| {
                ScriptKind::from_path(a)
                    .precedence()
                    .cmp(&ScriptKind::from_path(b).precedence())
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });

            let mut paths = paths.into_iter();
            let Some(chosen) = paths.next() else {
                continue;
            };
            for shadowed in paths {
                tracing::warn!(
                    "Ignoring {} for hook '{}': {} takes precedence",
                    shadowed.display(),
                    name,
                    chosen.display()
                );
            }

            let chosen = std::path::absolute(&chosen).map_err(|e| self.discovery_error(e))?;
            tracing::debug!("Found hook '{}': {}", name, chosen.display());
            registry.insert(name, chosen);
        }

        Ok(registry)
    }

    fn discovery_error(&self, source: std::io::Error) -> Error {
        Error::Discovery {
            path: self.hooks_dir.clone(),
            source,
        }
    }
}

/// Hidden files and editor backups never bind to a hook
fn is_ignored(file_name: &str) -> bool {
    file_name.starts_with('.')
        || file_name.ends_with('~')
        || file_name.to_lowercase().ends_with(".swp")
}

/// Locate hooks for the template in the current working directory
///
/// The caller must already have changed into the template root.
pub fn find_hooks() -> Result<HookRegistry> {
    let cwd = std::env::current_dir()?;
    HookLocator::new(&cwd).locate()
}
