//! Terminal shell built on ratatui and crossterm.
//!
//! [`app::Shell`] owns the session lifecycle, [`console`] abstracts the
//! terminal device, [`event`] merges input with ticks and interrupts, and
//! [`ui`] composes the frame.

pub mod app;
pub mod console;
pub mod error;
pub mod event;
pub mod test_utils;
pub mod ui;
