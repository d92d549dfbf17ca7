//! XDG directory utilities
//!
//! - `XDG_CONFIG_HOME` defaults to ~/.config

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Get the kiln config directory
///
/// Returns `$XDG_CONFIG_HOME/kiln` or `~/.config/kiln`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("kiln").get_config_home()
}

/// Get the default config file path
///
/// Returns `$XDG_CONFIG_HOME/kiln/kiln.toml` or `~/.config/kiln/kiln.toml`
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("kiln.toml"))
}
