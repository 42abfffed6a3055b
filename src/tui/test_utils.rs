//! Shared test utilities for shell testing with ratatui TestBackend.
//!
//! Provides helpers for creating test terminals and extracting buffer
//! content, and a [`MockConsole`] that records terminal mode transitions
//! and replays scripted input.

#![cfg(test)]

use crate::tui::console::{Console, EventSource};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use futures::stream::{self, StreamExt};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::io;
use std::sync::{Arc, Mutex};

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    (0..area.height).find(|&row| row_text(buffer, row).contains(text))
}

/// Ctrl+C as delivered by a terminal in raw mode.
pub fn ctrl_c() -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

/// Sends SIGINT to the current process, as a terminal's Ctrl+C would
/// outside raw mode.
///
/// Only call this once a tokio interrupt listener is registered, otherwise
/// the default action ends the test process.
#[cfg(unix)]
pub fn send_interrupt_signal() {
    let status = std::process::Command::new("kill")
        .args(["-INT", &std::process::id().to_string()])
        .status()
        .expect("failed to run kill");
    assert!(status.success(), "kill -INT failed: {status}");
}

/// Observable mode of a mock terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Cooked mode, primary screen.
    Normal,
    /// Raw mode, primary screen.
    Raw,
    /// Raw mode, alternate screen.
    RawAlternate,
}

/// One scripted input step.
#[derive(Debug)]
pub enum Scripted {
    /// Deliver an event.
    Event(CrosstermEvent),
    /// Fail the stream with an I/O error of this kind.
    Fail(io::ErrorKind),
    /// Close the stream.
    End,
}

/// Console double that records every mode transition.
///
/// The transition log is shared, so it stays readable after the console
/// has been moved into (or dropped with) a shell.
#[derive(Debug)]
pub struct MockConsole {
    width: u16,
    height: u16,
    modes: Arc<Mutex<Vec<TerminalMode>>>,
    acquire_error: Option<io::ErrorKind>,
    release_error: Option<io::ErrorKind>,
    backend_error: Option<io::ErrorKind>,
    script: Vec<Scripted>,
    /// Number of `acquire()` calls.
    pub acquire_calls: usize,
    /// Number of `release()` calls.
    pub release_calls: usize,
    /// Number of `events()` calls.
    pub events_calls: usize,
}

impl MockConsole {
    /// A working console of the given size with no scripted input.
    ///
    /// Once the script runs out the stream stays pending.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            modes: Arc::new(Mutex::new(vec![TerminalMode::Normal])),
            acquire_error: None,
            release_error: None,
            backend_error: None,
            script: Vec::new(),
            acquire_calls: 0,
            release_calls: 0,
            events_calls: 0,
        }
    }

    /// Replays `script` as input.
    pub fn with_script(mut self, script: Vec<Scripted>) -> Self {
        self.script = script;
        self
    }

    /// Makes `acquire()` fail after entering raw mode, rolling raw mode back.
    pub fn failing_acquire(mut self, kind: io::ErrorKind) -> Self {
        self.acquire_error = Some(kind);
        self
    }

    /// Makes `release()` restore the mode but report an error.
    pub fn failing_release(mut self, kind: io::ErrorKind) -> Self {
        self.release_error = Some(kind);
        self
    }

    /// Makes `backend()` fail after a successful acquire.
    pub fn failing_backend(mut self, kind: io::ErrorKind) -> Self {
        self.backend_error = Some(kind);
        self
    }

    /// Shared handle to the recorded mode transitions.
    pub fn mode_log(&self) -> Arc<Mutex<Vec<TerminalMode>>> {
        Arc::clone(&self.modes)
    }

    /// Snapshot of the recorded mode transitions, initial mode first.
    pub fn modes(&self) -> Vec<TerminalMode> {
        self.modes.lock().expect("mode log poisoned").clone()
    }

    /// The current mode.
    pub fn mode(&self) -> TerminalMode {
        *self.modes().last().expect("mode log is never empty")
    }

    fn record(&self, mode: TerminalMode) {
        self.modes.lock().expect("mode log poisoned").push(mode);
    }
}

impl Console for MockConsole {
    type Backend = TestBackend;

    fn acquire(&mut self) -> io::Result<()> {
        self.acquire_calls += 1;
        self.record(TerminalMode::Raw);
        if let Some(kind) = self.acquire_error {
            self.record(TerminalMode::Normal);
            return Err(io::Error::new(kind, "mock acquire failure"));
        }
        self.record(TerminalMode::RawAlternate);
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        self.release_calls += 1;
        self.record(TerminalMode::Normal);
        match self.release_error {
            Some(kind) => Err(io::Error::new(kind, "mock release failure")),
            None => Ok(()),
        }
    }

    fn backend(&mut self) -> io::Result<Self::Backend> {
        match self.backend_error {
            Some(kind) => Err(io::Error::new(kind, "mock backend failure")),
            None => Ok(TestBackend::new(self.width, self.height)),
        }
    }

    fn events(&mut self) -> EventSource {
        self.events_calls += 1;
        let script = std::mem::take(&mut self.script);
        let closes = script.iter().any(|step| matches!(step, Scripted::End));
        let items: Vec<io::Result<CrosstermEvent>> = script
            .into_iter()
            .map_while(|step| match step {
                Scripted::Event(event) => Some(Ok(event)),
                Scripted::Fail(kind) => Some(Err(io::Error::new(kind, "mock input failure"))),
                Scripted::End => None,
            })
            .collect();
        let head = stream::iter(items);
        if closes {
            head.boxed_local()
        } else {
            head.chain(stream::pending()).boxed_local()
        }
    }
}
