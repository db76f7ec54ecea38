//! Config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` ignores environment variables on some platforms, so
//! tests cannot redirect it. `scratchwipe_config_dir()` checks
//! `SCRATCHWIPE_CONFIG_HOME` first and falls back to `dirs::config_dir()`.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const SCRATCHWIPE_CONFIG_HOME_VAR: &str = "SCRATCHWIPE_CONFIG_HOME";

/// Directory that holds `scratchwipe/config.toml`.
///
/// # Returns
///
/// - `Some(PathBuf)` - `SCRATCHWIPE_CONFIG_HOME` or the platform config dir
/// - `None` - If neither is available
pub fn scratchwipe_config_dir() -> Option<PathBuf> {
    std::env::var(SCRATCHWIPE_CONFIG_HOME_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}
