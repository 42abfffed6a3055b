//! Logging initialization for tui-shell.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `TUI_SHELL_LOG` environment variable, falling back to the `[log]` level
//! from the config file.
//!
//! While the shell owns the alternate screen, stderr output is not visible,
//! so set `log.file` to capture anything below the default `warn` level.
//!
//! # Usage
//!
//! ```bash
//! # Default (warn level, stderr)
//! tui-shell
//!
//! # Debug level
//! TUI_SHELL_LOG=debug tui-shell
//!
//! # Module-specific filtering
//! TUI_SHELL_LOG=tui_shell::tui=trace,warn tui-shell
//! ```

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogConfig;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TUI_SHELL_LOG";

/// Builds the filter: `TUI_SHELL_LOG` when set and valid, else the config level.
pub fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Initialize the global tracing subscriber.
///
/// Writes to `config.file` (appending, without ANSI colors) when set,
/// otherwise to stderr. Fails if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> io::Result<()> {
    let builder = fmt().with_env_filter(filter(config)).with_target(false);

    let installed = if config.file.is_empty() {
        builder.with_writer(io::stderr).try_init()
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    };
    installed.map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use serial_test::serial;

    #[test]
    fn env_filter_parses_valid_directives() {
        let directives = ["info", "debug", "warn", "error", "trace"];
        for d in directives {
            let filter = EnvFilter::try_new(d);
            assert!(filter.is_ok(), "failed to parse directive: {}", d);
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        assert!(EnvFilter::try_new("tui_shell::tui=trace,warn").is_ok());
    }

    #[test]
    #[serial]
    fn filter_falls_back_to_config_level() {
        let original = std::env::var_os(LOG_ENV);
        std::env::remove_var(LOG_ENV);
        let config = LogConfig {
            level: LogLevel::Debug,
            file: String::new(),
        };
        let filter = filter(&config);
        if let Some(v) = original {
            std::env::set_var(LOG_ENV, v);
        }
        assert_eq!(filter.to_string().to_lowercase(), "debug");
    }

    #[test]
    #[serial]
    fn filter_prefers_environment() {
        let original = std::env::var_os(LOG_ENV);
        std::env::set_var(LOG_ENV, "trace");
        let filter = filter(&LogConfig::default());
        match original {
            Some(v) => std::env::set_var(LOG_ENV, v),
            None => std::env::remove_var(LOG_ENV),
        }
        assert_eq!(filter.to_string().to_lowercase(), "trace");
    }

    #[test]
    fn init_fails_for_unwritable_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = LogConfig {
            level: LogLevel::Info,
            file: dir
                .path()
                .join("missing-dir")
                .join("shell.log")
                .to_string_lossy()
                .into_owned(),
        };
        assert!(init(&config).is_err());
    }
}
