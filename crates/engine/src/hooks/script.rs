//! Script kinds and how each one is launched
//!
//! Dispatch is a table, not a chain of suffix checks: every supported
//! extension maps to a [`ScriptKind`], and every kind maps to a
//! [`LaunchStrategy`]. Supporting another scripting language means adding a
//! variant here.

use kiln_core::platform::{CURRENT_PLATFORM, Platform};
use std::path::Path;

/// Kinds of hook scripts kiln knows how to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    /// `.py`, run through a Python interpreter
    Python,
    /// `.sh`, run through a POSIX shell
    Shell,
    /// `.bash`, run through bash
    Bash,
    /// Anything else, executed as a program on its own
    Native,
}

impl ScriptKind {
    /// Known kinds in discovery precedence order
    ///
    /// When a hooks directory holds several scripts for the same hook, the one
    /// whose kind comes first wins.
    pub const PRECEDENCE: [ScriptKind; 4] = [Self::Python, Self::Shell, Self::Bash, Self::Native];

    /// Classify a script by its file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py") => Self::Python,
            Some("sh") => Self::Shell,
            Some("bash") => Self::Bash,
            _ => Self::Native,
        }
    }

    /// Position in [`ScriptKind::PRECEDENCE`] (lower wins)
    #[must_use]
    pub fn precedence(self) -> usize {
        Self::PRECEDENCE
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::PRECEDENCE.len())
    }

    /// Default interpreter program for interpreted kinds
    #[must_use]
    pub const fn default_interpreter(self) -> Option<&'static str> {
        match self {
            Self::Python => {
                if cfg!(windows) {
                    Some("python")
                } else {
                    Some("python3")
                }
            }
            Self::Shell => Some("sh"),
            Self::Bash => Some("bash"),
            Self::Native => None,
        }
    }
}

/// How a script is turned into a child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchStrategy {
    /// Spawn `program <script>`
    Interpreter(String),
    /// Spawn the script itself
    Direct,
    /// Hand the script to the platform shell
    ShellWrapped,
}

/// Interpreter programs per script kind
///
/// Starts from [`ScriptKind::default_interpreter`]; configuration may replace
/// individual entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreters {
    /// Program for `.py` hooks
    pub python: String,
    /// Program for `.sh` hooks
    pub shell: String,
    /// Program for `.bash` hooks
    pub bash: String,
}

impl Default for Interpreters {
    fn default() -> Self {
        Self {
            python: default_program(ScriptKind::Python),
            shell: default_program(ScriptKind::Shell),
            bash: default_program(ScriptKind::Bash),
        }
    }
}

fn default_program(kind: ScriptKind) -> String {
    kind.default_interpreter().unwrap_or_default().to_string()
}

impl Interpreters {
    /// Interpreter configured for `kind`, if it is an interpreted kind
    #[must_use]
    pub fn get(&self, kind: ScriptKind) -> Option<&str> {
        match kind {
            ScriptKind::Python => Some(&self.python),
            ScriptKind::Shell => Some(&self.shell),
            ScriptKind::Bash => Some(&self.bash),
            ScriptKind::Native => None,
        }
    }

    /// Resolve the launch strategy for `kind` on `platform`
    #[must_use]
    pub fn strategy_for(&self, kind: ScriptKind, platform: &Platform) -> LaunchStrategy {
        match self.get(kind) {
            Some(program) => LaunchStrategy::Interpreter(program.to_string()),
            None if platform.requires_shell_wrapper => LaunchStrategy::ShellWrapped,
            None => LaunchStrategy::Direct,
        }
    }

    /// Resolve the launch strategy for the script at `path` on this platform
    #[must_use]
    pub fn strategy(&self, path: &Path) -> LaunchStrategy {
        self.strategy_for(ScriptKind::from_path(path), &CURRENT_PLATFORM)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn platform(requires_shell_wrapper: bool) -> Platform {
        Platform {
            requires_shell_wrapper,
        }
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(ScriptKind::from_path(Path::new("a/pre_gen_project.py")), ScriptKind::Python);
        assert_eq!(ScriptKind::from_path(Path::new("post_gen_project.sh")), ScriptKind::Shell);
        assert_eq!(ScriptKind::from_path(Path::new("post_gen_project.bash")), ScriptKind::Bash);
        assert_eq!(ScriptKind::from_path(Path::new("post_gen_project")), ScriptKind::Native);
        assert_eq!(ScriptKind::from_path(Path::new("post_gen_project.rb")), ScriptKind::Native);
        // Extensions are case-sensitive, like hook names
        assert_eq!(ScriptKind::from_path(Path::new("pre_gen_project.PY")), ScriptKind::Native);
    }

    #[test]
    fn test_precedence_order() {
        assert!(ScriptKind::Python.precedence() < ScriptKind::Shell.precedence());
        assert!(ScriptKind::Shell.precedence() < ScriptKind::Bash.precedence());
        assert!(ScriptKind::Bash.precedence() < ScriptKind::Native.precedence());
    }

    #[test]
    fn test_interpreted_kinds_use_interpreter_everywhere() {
        let interpreters = Interpreters::default();

        for wrapped in [false, true] {
            assert_eq!(
                interpreters.strategy_for(ScriptKind::Shell, &platform(wrapped)),
                LaunchStrategy::Interpreter("sh".to_string())
            );
        }
    }

    #[test]
    fn test_native_kind_depends_on_platform_flag() {
        let interpreters = Interpreters::default();

        assert_eq!(
            interpreters.strategy_for(ScriptKind::Native, &platform(false)),
            LaunchStrategy::Direct
        );
        assert_eq!(
            interpreters.strategy_for(ScriptKind::Native, &platform(true)),
            LaunchStrategy::ShellWrapped
        );
    }

    #[test]
    fn test_interpreter_override() {
        let interpreters = Interpreters {
            python: "python3.12".to_string(),
            ..Interpreters::default()
        };

        assert_eq!(
            interpreters.strategy(Path::new("pre_gen_project.py")),
            LaunchStrategy::Interpreter("python3.12".to_string())
        );
    }
}
