//! Platform capabilities for cross-platform hook execution
//!
//! Platform info is cached on first access.

use std::sync::LazyLock;

/// Current platform information (cached)
///
/// # Example
/// ```
/// use kiln_core::platform::CURRENT_PLATFORM;
///
/// if CURRENT_PLATFORM.requires_shell_wrapper {
///     println!("scripts go through the native shell");
/// }
/// ```
pub static CURRENT_PLATFORM: LazyLock<Platform> = LazyLock::new(Platform::detect);

/// Platform information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Arbitrary scripts cannot be spawned directly and must go through the
    /// platform shell
    pub requires_shell_wrapper: bool,
}

impl Platform {
    /// Detect the capabilities of the platform this binary was built for
    #[must_use]
    pub fn detect() -> Self {
        Self {
            requires_shell_wrapper: cfg!(windows),
        }
    }
}
