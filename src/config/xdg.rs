//! Platform-aware path resolution for tui-shell.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/tui-shell` or `~/.config/tui-shell`.
//!
//! On **macOS**, uses Apple conventions with an XDG env var override:
//! `$XDG_CONFIG_HOME/tui-shell` or `~/Library/Application Support/tui-shell`.

use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "tui-shell";

/// File name of the main configuration file inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the configuration directory for tui-shell.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tui-shell` (if env var set and non-empty, any platform)
/// 2. Platform default (see module docs)
/// 3. `./.config/tui-shell` when no home directory can be determined
pub fn config_dir() -> PathBuf {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_NAME),
        _ => platform_config_dir().join(APP_NAME),
    }
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    let base = dirs::config_dir();
    #[cfg(not(target_os = "macos"))]
    let base = dirs::home_dir().map(|home| home.join(".config"));

    base.unwrap_or_else(|| PathBuf::from(".config"))
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Creates the configuration directory if it does not exist.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
