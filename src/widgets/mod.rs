//! Drawable regions the shell can install as its root.
//!
//! A [`Drawable`] renders itself into a ratatui [`Frame`] within the area the
//! shell hands it. Drawables are rendered through `&self`, so the shell can
//! never alter what a drawable displays.

pub mod text_view;

use ratatui::layout::Rect;
use ratatui::Frame;

/// Anything capable of producing a rendered frame for the terminal.
pub trait Drawable {
    /// Render into `area` of the given frame.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Area this drawable occupies when installed without `fullscreen`.
    ///
    /// Defaults to the whole screen. The shell clips the result to the
    /// screen before drawing.
    fn area(&self, screen: Rect) -> Rect {
        screen
    }
}
