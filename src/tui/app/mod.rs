//! The application shell and its blocking render loop.
//!
//! A [`Shell`] owns one terminal session: it acquires the console, holds a
//! single root [`Drawable`], runs the render/input loop until interrupted,
//! and restores the console on every exit path.
//!
//! Lifecycle: `Uninitialized → Initialized → Running → Terminated`. There is
//! no way back out of `Terminated`.

use crate::tui::console::Console;
use crate::tui::error::ShellError;
use crate::tui::event::{handle_event, Action, EventHandler};
use crate::tui::ui::render_root;
use crate::widgets::Drawable;
use ratatui::Terminal;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default redraw interval when no input arrives.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Lifecycle stage of a [`Shell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Constructed; the terminal has not been touched.
    Uninitialized,
    /// Terminal acquired, loop not yet entered.
    Initialized,
    /// Inside `run()`.
    Running,
    /// Session over; the terminal has been released.
    Terminated,
}

/// Runtime options for a [`Shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Redraw interval while idle.
    pub tick_rate: Duration,
    /// Treat the OS interrupt signal as a quit request.
    pub catch_signals: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            catch_signals: true,
        }
    }
}

/// Requests that a running shell stop.
///
/// Cloneable and `Send`, so another thread can end a `run()` that is
/// blocked waiting for input. Requesting quit before `run()` makes the loop
/// return after its first render.
#[derive(Debug, Clone)]
pub struct QuitHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl QuitHandle {
    /// Asks the shell to quit. Idempotent.
    pub fn quit(&self) {
        self.tx.send_replace(true);
    }

    /// Whether quit has been requested.
    pub fn is_requested(&self) -> bool {
        *self.tx.borrow()
    }
}

/// The installed root drawable.
struct Root {
    drawable: Box<dyn Drawable>,
    fullscreen: bool,
}

/// Terminal application shell.
///
/// Explicitly constructed and owned; nothing about it is process-global
/// except the panic hook the console may install.
pub struct Shell<C: Console> {
    console: C,
    options: ShellOptions,
    state: ShellState,
    root: Option<Root>,
    terminal: Option<Terminal<C::Backend>>,
    /// True while the console is in raw mode and the alternate screen.
    acquired: bool,
    quit: Arc<watch::Sender<bool>>,
}

impl<C: Console> Shell<C> {
    /// Creates an uninitialized shell over `console`.
    pub fn new(console: C, options: ShellOptions) -> Self {
        let (quit, _) = watch::channel(false);
        Self {
            console,
            options,
            state: ShellState::Uninitialized,
            root: None,
            terminal: None,
            acquired: false,
            quit: Arc::new(quit),
        }
    }

    /// Current lifecycle stage.
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Options the shell was created with.
    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// The console this shell drives.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The ratatui terminal, once initialized.
    ///
    /// Kept after termination so the last rendered frame can be inspected.
    pub fn terminal(&self) -> Option<&Terminal<C::Backend>> {
        self.terminal.as_ref()
    }

    /// The installed root drawable, if any.
    pub fn root(&self) -> Option<&dyn Drawable> {
        self.root.as_ref().map(|root| root.drawable.as_ref())
    }

    /// Whether the root was installed fullscreen. `None` without a root.
    pub fn is_fullscreen(&self) -> Option<bool> {
        self.root.as_ref().map(|root| root.fullscreen)
    }

    /// Returns a handle that can stop `run()` from another thread.
    pub fn quit_handle(&self) -> QuitHandle {
        QuitHandle {
            tx: Arc::clone(&self.quit),
        }
    }

    /// Installs `drawable` as the sole visible region, replacing any previous root.
    pub fn set_root(&mut self, drawable: impl Drawable + 'static, fullscreen: bool) -> &mut Self {
        self.root = Some(Root {
            drawable: Box::new(drawable),
            fullscreen,
        });
        self
    }

    /// Acquires the terminal: raw mode plus the alternate screen.
    ///
    /// A no-op once initialized. On failure the console is left in its
    /// original mode and the shell is `Terminated`.
    pub fn initialize(&mut self) -> Result<(), ShellError> {
        match self.state {
            ShellState::Uninitialized => {}
            ShellState::Terminated => return Err(ShellError::Terminated),
            ShellState::Initialized | ShellState::Running => return Ok(()),
        }

        if let Err(e) = self.console.acquire() {
            tracing::debug!("terminal acquisition failed: {}", e);
            self.state = ShellState::Terminated;
            return Err(ShellError::TerminalUnavailable(e));
        }
        self.acquired = true;

        let terminal = self.console.backend().and_then(|backend| {
            let mut terminal = Terminal::new(backend)?;
            terminal.clear()?;
            Ok(terminal)
        });
        match terminal {
            Ok(terminal) => self.terminal = Some(terminal),
            Err(e) => {
                if let Err(restore) = self.shutdown() {
                    tracing::warn!("failed to restore terminal after setup error: {}", restore);
                }
                return Err(ShellError::TerminalUnavailable(e));
            }
        }

        self.state = ShellState::Initialized;
        tracing::debug!("shell initialized");
        Ok(())
    }

    /// Runs the render/input loop until quit, blocking the calling thread.
    ///
    /// Initializes first if needed. The terminal is released before this
    /// returns, on success and on error alike.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.state == ShellState::Terminated {
            return Err(ShellError::Terminated);
        }
        self.initialize()?;

        self.console.install_panic_hook();
        self.state = ShellState::Running;
        tracing::info!("shell running");

        let result = self.block_on_loop();
        let restored = self.shutdown();

        match (result, restored) {
            (Ok(()), restored) => {
                tracing::info!("shell stopped");
                restored
            }
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(restore)) => {
                tracing::warn!("failed to restore terminal after error: {}", restore);
                Err(e)
            }
        }
    }

    /// Restores the terminal to its pre-`initialize()` mode.
    ///
    /// Idempotent: once released, later calls return `Ok(())` without
    /// touching the console. Always leaves the shell `Terminated`.
    pub fn shutdown(&mut self) -> Result<(), ShellError> {
        self.state = ShellState::Terminated;
        if !self.acquired {
            return Ok(());
        }
        self.acquired = false;

        let cursor = match self.terminal.as_mut() {
            Some(terminal) => terminal.show_cursor(),
            None => Ok(()),
        };
        let released = self.console.release();
        tracing::debug!("terminal released");
        released.and(cursor).map_err(ShellError::RenderError)
    }

    /// Drives the async loop on a single-threaded runtime.
    fn block_on_loop(&mut self) -> Result<(), ShellError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ShellError::RenderError)?;
        runtime.block_on(self.event_loop())
    }

    /// Main event loop: renders the root, waits for an event, dispatches it.
    async fn event_loop(&mut self) -> Result<(), ShellError> {
        let mut handler = EventHandler::new(self.options.tick_rate, self.options.catch_signals);
        let mut reader = self.console.events();
        let mut quit = self.quit.subscribe();
        let terminal = self.terminal.as_mut().ok_or_else(|| {
            ShellError::RenderError(io::Error::new(
                io::ErrorKind::NotConnected,
                "terminal not initialized",
            ))
        })?;
        let root = self.root.as_ref();

        loop {
            terminal
                .draw(|frame| {
                    if let Some(root) = root {
                        render_root(frame, root.drawable.as_ref(), root.fullscreen);
                    }
                })
                .map_err(ShellError::RenderError)?;

            let event = handler
                .next(&mut reader, &mut quit)
                .await
                .map_err(ShellError::RenderError)?;
            match handle_event(event) {
                Action::Quit => {
                    tracing::debug!("quit requested");
                    return Ok(());
                }
                Action::Redraw => {
                    tracing::debug!("redraw after {:?}", event);
                }
                Action::None => {}
            }
        }
    }
}

impl<C: Console> Drop for Shell<C> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::warn!("failed to restore terminal on drop: {}", e);
        }
    }
}

impl<C: Console> fmt::Debug for Shell<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("has_root", &self.root.is_some())
            .field("acquired", &self.acquired)
            .finish()
    }
}

#[cfg(test)]
mod tests;
