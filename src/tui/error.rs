//! Error types for the terminal shell.

use std::io;
use thiserror::Error;

/// Errors that end a shell session.
///
/// Every variant is fatal. By the time one reaches the caller the terminal
/// has already been restored.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The terminal could not be acquired at startup.
    ///
    /// Raised when the process has no controlling terminal or the terminal
    /// cannot be switched into raw mode and the alternate screen.
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(#[source] io::Error),

    /// The terminal session was lost while the loop was running.
    #[error("render error: {0}")]
    RenderError(#[source] io::Error),

    /// `run()` was called on a shell that has already terminated.
    #[error("shell has already terminated")]
    Terminated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_terminal_unavailable() {
        let err = ShellError::TerminalUnavailable(io::Error::other("stdout is not a terminal"));
        let msg = err.to_string();
        assert!(msg.contains("terminal unavailable"));
        assert!(msg.contains("stdout is not a terminal"));
    }

    #[test]
    fn display_render_error() {
        let err = ShellError::RenderError(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let msg = err.to_string();
        assert!(msg.contains("render error"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn io_variants_chain_their_source() {
        let err = ShellError::RenderError(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&ShellError::Terminated).is_none());
    }
}
