//! tui-shell library
//!
//! A minimal terminal application shell: it takes over the terminal, shows
//! a single root drawable (by default a centered two-line greeting), and
//! exits cleanly when interrupted.
//!
//! ```no_run
//! use tui_shell::{CrosstermConsole, DisplayBuffer, Shell, ShellOptions, TextView};
//!
//! let mut shell = Shell::new(CrosstermConsole::new(), ShellOptions::default());
//! shell.set_root(TextView::new(DisplayBuffer::default()), true);
//! shell.run()?;
//! # Ok::<(), tui_shell::ShellError>(())
//! ```
//!
//! `run()` blocks until Ctrl+C (typed into the terminal, or delivered as a
//! signal) or a [`QuitHandle`] asks it to stop. The terminal is restored on
//! every exit path.

/// Configuration file schema, loading and XDG path resolution.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

/// Terminal shell: lifecycle, console abstraction, events and rendering.
pub mod tui;

/// Drawables the shell can install as its root.
pub mod widgets;

pub use tui::app::{QuitHandle, Shell, ShellOptions, ShellState};
pub use tui::console::{Console, CrosstermConsole};
pub use tui::error::ShellError;
pub use widgets::text_view::{DisplayBuffer, TextAlign, TextView};
pub use widgets::Drawable;
