//! TOML configuration schema types for tui-shell.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty file yields the built-in behavior:
//! the centered welcome text, a 250ms tick, and warn-level logging.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"1s"`)
//! parsed by the `humantime` crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::tui::app::{ShellOptions, DEFAULT_TICK_RATE};
use crate::widgets::text_view::{DisplayBuffer, TextAlign, DEFAULT_TEXT};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [display]
/// [shell]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What the root text view shows.
    pub display: DisplayConfig,
    /// Event loop settings.
    pub shell: ShellConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Content of the root text view.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text to show. Lines are separated by `\n`.
    pub text: String,
    /// Horizontal alignment of each line.
    pub align: TextAlign,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            align: TextAlign::Center,
        }
    }
}

impl DisplayConfig {
    /// Builds the write-once buffer the view displays.
    pub fn buffer(&self) -> DisplayBuffer {
        DisplayBuffer::new(self.text.clone(), self.align)
    }
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Event loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Idle redraw interval as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Whether the OS interrupt signal quits the shell.
    pub catch_signals: bool,
    /// Whether the root fills the whole screen.
    pub fullscreen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tick_rate: humantime::format_duration(DEFAULT_TICK_RATE).to_string(),
            catch_signals: true,
            fullscreen: true,
        }
    }
}

impl ShellConfig {
    /// Parses `tick_rate`. Zero is rejected.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidDuration {
            field: "shell.tick_rate",
            value: self.tick_rate.clone(),
            message,
        };
        let duration = humantime::parse_duration(&self.tick_rate).map_err(|e| invalid(e.to_string()))?;
        if duration.is_zero() {
            return Err(invalid("must be greater than zero".to_string()));
        }
        Ok(duration)
    }

    /// Runtime options for the shell.
    pub fn options(&self) -> Result<ShellOptions, ConfigError> {
        Ok(ShellOptions {
            tick_rate: self.tick_rate()?,
            catch_signals: self.catch_signals,
        })
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity used when `TUI_SHELL_LOG` is unset.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[display]
text = "Hello\nWorld"
align = "right"

[shell]
tick_rate = "100ms"
catch_signals = false
fullscreen = false

[log]
level = "debug"
file = "/var/log/tui-shell.log"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.display.text, "Hello\nWorld");
        assert_eq!(config.display.align, TextAlign::Right);
        assert_eq!(config.shell.tick_rate, "100ms");
        assert!(!config.shell.catch_signals);
        assert!(!config.shell.fullscreen);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file, "/var/log/tui-shell.log");
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[display]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn default_display_is_centered_welcome() {
        let buffer = Config::default().display.buffer();
        assert_eq!(buffer, DisplayBuffer::default());
    }

    #[test]
    fn default_tick_rate_round_trips_through_humantime() {
        let config = ShellConfig::default();
        assert_eq!(config.tick_rate, "250ms");
        assert_eq!(config.tick_rate().expect("valid"), DEFAULT_TICK_RATE);
    }

    #[test]
    fn default_options_match_shell_defaults() {
        let options = ShellConfig::default().options().expect("valid");
        assert_eq!(options, ShellOptions::default());
    }

    #[test]
    fn tick_rate_accepts_seconds() {
        let config = ShellConfig {
            tick_rate: "1s".to_string(),
            ..ShellConfig::default()
        };
        assert_eq!(config.tick_rate().expect("valid"), Duration::from_secs(1));
    }

    #[test]
    fn tick_rate_rejects_garbage() {
        let config = ShellConfig {
            tick_rate: "soon".to_string(),
            ..ShellConfig::default()
        };
        let err = config.tick_rate().expect_err("invalid duration");
        assert!(err.to_string().contains("shell.tick_rate"));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn tick_rate_rejects_zero() {
        let config = ShellConfig {
            tick_rate: "0s".to_string(),
            ..ShellConfig::default()
        };
        assert!(matches!(
            config.tick_rate(),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn align_parsing() {
        for (raw, expected) in [
            ("left", TextAlign::Left),
            ("center", TextAlign::Center),
            ("right", TextAlign::Right),
        ] {
            let toml_str = format!("[display]\nalign = \"{}\"", raw);
            let config: Config = toml::from_str(&toml_str).expect("valid align");
            assert_eq!(config.display.align, expected);
        }
    }

    #[test]
    fn invalid_align_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[display]\nalign = \"justify\"");
        assert!(result.is_err());
    }

    #[test]
    fn log_level_strings() {
        assert_eq!(LogLevel::Error.as_str(), "error");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn serialize_round_trip_preserves_defaults() {
        let serialized = toml::to_string(&Config::default()).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed, Config::default());
    }
}
