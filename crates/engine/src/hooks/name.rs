//! Hook names and the discovered hook registry

use indexmap::IndexMap;
use kiln_core::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A lifecycle point at which a template may run a hook
///
/// The set is closed: adding a lifecycle point means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookName {
    /// Runs before the project tree is generated
    PreGenProject,
    /// Runs after the project tree is generated
    PostGenProject,
}

impl HookName {
    /// Every recognized hook, in lifecycle order
    pub const ALL: [HookName; 2] = [HookName::PreGenProject, HookName::PostGenProject];

    /// File stem a script must have to bind to this hook
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreGenProject => "pre_gen_project",
            Self::PostGenProject => "post_gen_project",
        }
    }

    /// Match a file stem against the recognized names (case-sensitive)
    #[must_use]
    pub fn from_stem(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == stem)
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_stem(s).ok_or_else(|| Error::UnknownHook(s.to_string()))
    }
}

/// Hook scripts found in a template's `hooks` directory
///
/// A missing key means the template does not define that hook, which is not
/// an error. Paths are absolute and existed when discovery ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookRegistry {
    scripts: IndexMap<HookName, PathBuf>,
}

impl HookRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: HookName, path: PathBuf) -> Option<PathBuf> {
        self.scripts.insert(name, path)
    }

    /// Script bound to `name`, if the template defines one
    #[must_use]
    pub fn get(&self, name: HookName) -> Option<&Path> {
        self.scripts.get(&name).map(PathBuf::as_path)
    }

    /// Check if the template defines `name`
    #[must_use]
    pub fn contains(&self, name: HookName) -> bool {
        self.scripts.contains_key(&name)
    }

    /// Check if no hooks were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Number of hooks found
    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Iterate over discovered hooks in lifecycle order
    pub fn iter(&self) -> impl Iterator<Item = (HookName, &Path)> {
        HookName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|path| (name, path)))
    }
}
