//! The physical terminal behind a shell.
//!
//! [`Console`] is the seam between the shell's lifecycle and the device it
//! drives. [`CrosstermConsole`] talks to the real terminal through crossterm;
//! tests substitute a recording console backed by ratatui's `TestBackend`.

use crossterm::{
    event::{Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::stream::{LocalBoxStream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use std::io::{self, stdout, IsTerminal, Stdout};
use std::sync::Once;

/// Stream of raw input events read from a console.
pub type EventSource = LocalBoxStream<'static, io::Result<CrosstermEvent>>;

/// A terminal device the shell can take over.
pub trait Console {
    /// Backend ratatui draws through.
    type Backend: Backend;

    /// Enters raw mode and the alternate screen.
    ///
    /// On error, any mode change already made must be undone before
    /// returning.
    fn acquire(&mut self) -> io::Result<()>;

    /// Leaves the alternate screen and raw mode.
    fn release(&mut self) -> io::Result<()>;

    /// Creates the backend for drawing onto this console.
    fn backend(&mut self) -> io::Result<Self::Backend>;

    /// Opens the input event stream.
    fn events(&mut self) -> EventSource;

    /// Installs a process-wide hook that restores the console on panic.
    fn install_panic_hook(&self) {}
}

/// The process's controlling terminal, driven through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermConsole;

impl CrosstermConsole {
    /// Creates a console over stdout.
    pub fn new() -> Self {
        Self
    }
}

impl Console for CrosstermConsole {
    type Backend = CrosstermBackend<Stdout>;

    fn acquire(&mut self) -> io::Result<()> {
        if !stdout().is_terminal() {
            return Err(io::Error::other("stdout is not a terminal"));
        }
        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
            if let Err(restore) = disable_raw_mode() {
                tracing::warn!("failed to leave raw mode after partial setup: {}", restore);
            }
            return Err(e);
        }
        tracing::debug!("entered raw mode and alternate screen");
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        restore_terminal()?;
        tracing::debug!("left alternate screen and raw mode");
        Ok(())
    }

    fn backend(&mut self) -> io::Result<Self::Backend> {
        Ok(CrosstermBackend::new(stdout()))
    }

    fn events(&mut self) -> EventSource {
        EventStream::new().boxed_local()
    }

    fn install_panic_hook(&self) {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |panic_info| {
                let _ = restore_terminal();
                original_hook(panic_info);
            }));
        });
    }
}

/// Restores the terminal to its original state.
///
/// Both steps are attempted even if the first fails.
fn restore_terminal() -> io::Result<()> {
    let screen = execute!(stdout(), LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}
