//! Hook script execution
//!
//! Launches a hook script as a child process in the project directory, waits
//! for it, and maps the outcome to a [`kiln_core::Result`]. The child inherits
//! the environment and standard streams, so hook output reaches the user live.
//! There is no timeout: a hook that never exits blocks the caller.

use super::script::{Interpreters, LaunchStrategy};
use kiln_core::{Error, Result};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Windows `ERROR_BAD_EXE_FORMAT`
#[cfg(windows)]
const ERROR_BAD_EXE_FORMAT: i32 = 193;

/// Runs hook scripts as child processes
#[derive(Debug, Clone, Default)]
pub struct ScriptExecutor {
    interpreters: Interpreters,
}

impl ScriptExecutor {
    /// Create an executor with the default interpreter table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with a custom interpreter table
    #[must_use]
    pub fn with_interpreters(interpreters: Interpreters) -> Self {
        Self { interpreters }
    }

    /// Interpreter table used to pick a launch strategy
    #[must_use]
    pub fn interpreters(&self) -> &Interpreters {
        &self.interpreters
    }

    /// Execute `script_path` with `working_dir` as its current directory
    ///
    /// Blocks until the child exits.
    ///
    /// # Errors
    ///
    /// - [`Error::HookFailed`] if the script exits with a non-zero status
    ///   (a signal `n` on Unix is reported as status `-n`)
    /// - [`Error::HookMalformed`] if the OS rejects the file as an executable,
    ///   which usually means it is empty or lacks a shebang
    /// - [`Error::HookLaunch`] for any other failure to start the process,
    ///   including a missing `working_dir` (reported against that directory)
    #[tracing::instrument(skip(self), fields(script = %script_path.display(), cwd = %working_dir.display()))]
    pub fn execute(&self, script_path: &Path, working_dir: &Path) -> Result<()> {
        if !working_dir.is_dir() {
            return Err(Error::HookLaunch {
                path: working_dir.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("working directory {} does not exist", working_dir.display()),
                ),
            });
        }

        let script_path = std::path::absolute(script_path).map_err(|source| Error::HookLaunch {
            path: script_path.to_path_buf(),
            source,
        })?;

        make_executable(&script_path).map_err(|source| Error::HookLaunch {
            path: script_path.clone(),
            source,
        })?;

        let strategy = self.interpreters.strategy(&script_path);
        let (program, args) = command_line(&strategy, &script_path);
        tracing::debug!(?strategy, ?program, "Launching hook script");

        let output = duct::cmd(program, args)
            .dir(working_dir)
            .unchecked()
            .run()
            .map_err(|e| launch_error(&script_path, e))?;

        check_status(output.status)
    }
}

/// Program and arguments that launch `script_path` under `strategy`
///
/// Interpreters are resolved on `PATH` up front; an unresolvable name is
/// passed through so the spawn fails with the OS error.
fn command_line(strategy: &LaunchStrategy, script_path: &Path) -> (OsString, Vec<OsString>) {
    let script = script_path.as_os_str().to_os_string();
    match strategy {
        LaunchStrategy::Interpreter(program) => {
            let resolved = which::which(program).map_or_else(
                |e| {
                    tracing::debug!("Could not resolve interpreter '{}': {}", program, e);
                    OsString::from(program)
                },
                PathBuf::into_os_string,
            );
            (resolved, vec![script])
        }
        LaunchStrategy::Direct => (script, Vec::new()),
        LaunchStrategy::ShellWrapped => (OsString::from("cmd"), vec![OsString::from("/C"), script]),
    }
}

/// Map a finished process status to a hook result
fn check_status(status: ExitStatus) -> Result<()> {
    if status.success() {
        tracing::debug!("Hook script succeeded");
        return Ok(());
    }

    let code = exit_code(status);
    tracing::debug!(code, "Hook script failed");
    Err(Error::HookFailed { code })
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Translate a spawn failure, singling out "not an executable format"
fn launch_error(script_path: &Path, source: io::Error) -> Error {
    let path = script_path.to_path_buf();
    if is_exec_format_error(&source) {
        Error::HookMalformed { path, source }
    } else {
        Error::HookLaunch { path, source }
    }
}

fn is_exec_format_error(err: &io::Error) -> bool {
    let code = err.raw_os_error().or_else(|| {
        err.get_ref()
            .and_then(|inner| inner.downcast_ref::<io::Error>())
            .and_then(io::Error::raw_os_error)
    });

    #[cfg(unix)]
    {
        code == Some(libc::ENOEXEC)
    }

    #[cfg(windows)]
    {
        code == Some(ERROR_BAD_EXE_FORMAT)
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        false
    }
}

/// Add the owner execute bit to `path`
///
/// No-op on platforms without permission bits.
pub fn make_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut permissions = fs::metadata(path)?.permissions();
        let mode = permissions.mode();
        if mode & 0o100 == 0 {
            permissions.set_mode(mode | 0o100);
            fs::set_permissions(path, permissions)?;
        }
    }

    #[cfg(not(unix))]
    {
        fs::metadata(path)?;
    }

    Ok(())
}
