//! Default configuration template and file creation.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg::{self, CONFIG_FILE_NAME};

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tui-shell configuration
#
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/tui-shell/config.toml

# ==============================================================================
# Display
# ==============================================================================

[display]

# Text shown by the root view. Use \n to separate lines.
text = "Welcome to tview!\nPress Ctrl+C to exit"

# Horizontal alignment of each line.
# Options: "left", "center", "right"
align = "center"

# ==============================================================================
# Shell
# ==============================================================================

[shell]

# Redraw interval while no input arrives.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Quit when the process receives the interrupt signal (SIGINT).
# Ctrl+C typed into the terminal always quits.
catch_signals = true

# Let the root view fill the whole terminal.
fullscreen = true

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Verbosity when TUI_SHELL_LOG is unset.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"

# Append logs to this file. Empty means stderr, which is hidden while
# the shell owns the screen.
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Writes the default config to the XDG config path.
///
/// See [`create_default_config_at`] for `force` semantics.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let dir = xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: xdg::config_dir(),
        source: e,
    })?;
    let path = dir.join(CONFIG_FILE_NAME);
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Writes the default config to `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        // Back up existing file
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)
}

/// Writes the default template to `path`, creating parent dirs.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
