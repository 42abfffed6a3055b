//! Event handling for the shell.
//!
//! Wraps crossterm events and adds a tick for periodic redraw plus an
//! interrupt variant raised by the OS signal or a [`QuitHandle`].
//!
//! [`QuitHandle`]: crate::tui::app::QuitHandle

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::future::{self, Fuse, FusedFuture, FutureExt, LocalBoxFuture};
use futures::{Stream, StreamExt};
use std::fmt;
use std::io;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;

/// Smallest tick interval the handler accepts.
pub const MIN_TICK_RATE: Duration = Duration::from_millis(1);

/// Shell-level event variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for redraw.
    Tick,
    /// Quit was requested by signal or handle.
    Interrupt,
}

/// Action produced by handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do before the next render.
    None,
    /// Screen geometry changed; the next render picks up the new size.
    Redraw,
    /// Leave the loop.
    Quit,
}

/// Event handler that merges terminal input, ticks, and interrupts.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
    /// Whether the OS interrupt signal counts as a quit request.
    catch_signals: bool,
    /// OS interrupt listener, shared by every `next()` call.
    ///
    /// Registered on first poll and kept alive afterwards, so a signal that
    /// lands while the caller is drawing is still seen by the next call.
    interrupt: Fuse<LocalBoxFuture<'static, io::Result<()>>>,
}

impl EventHandler {
    /// Creates a new EventHandler. Tick rates below [`MIN_TICK_RATE`] are raised to it.
    pub fn new(tick_rate: Duration, catch_signals: bool) -> Self {
        let interrupt = if catch_signals {
            tokio::signal::ctrl_c().boxed_local()
        } else {
            future::pending::<io::Result<()>>().boxed_local()
        };
        Self {
            tick_rate: tick_rate.max(MIN_TICK_RATE),
            catch_signals,
            interrupt: interrupt.fuse(),
        }
    }

    /// Waits for the next event.
    ///
    /// Races terminal input against the tick timer, the quit channel and,
    /// when enabled, Ctrl+C delivered as a signal. A closed input stream is
    /// reported as `UnexpectedEof`.
    pub async fn next<S>(&mut self, reader: &mut S, quit: &mut watch::Receiver<bool>) -> io::Result<Event>
    where
        S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
    {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = quit.wait_for(|requested| *requested) => {
                    return Ok(Event::Interrupt);
                }
                signal = &mut self.interrupt => {
                    signal?;
                    tracing::debug!("received interrupt signal");
                    return Ok(Event::Interrupt);
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("tick_rate", &self.tick_rate)
            .field("catch_signals", &self.catch_signals)
            .field("interrupted", &self.interrupt.is_terminated())
            .finish()
    }
}

/// Returns true if the key is Ctrl+C.
///
/// Raw mode turns Ctrl+C into an ordinary key event, so the shell treats it
/// as the interrupt itself. Release events are ignored.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Maps an event to the action the loop takes.
pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Key(key) if is_interrupt(&key) => Action::Quit,
        Event::Interrupt => Action::Quit,
        Event::Resize(_, _) => Action::Redraw,
        Event::Key(_) | Event::Tick => Action::None,
    }
}
