//! Static text display widget.

use crate::widgets::Drawable;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};
use serde::{Deserialize, Serialize};

/// Text shown when no other content is configured.
pub const DEFAULT_TEXT: &str = "Welcome to tview!\nPress Ctrl+C to exit";

/// Horizontal alignment of each line of a [`DisplayBuffer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush with the left edge.
    Left,
    /// Centered within the available width.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

impl From<TextAlign> for Alignment {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        }
    }
}

/// The text currently shown, with its alignment.
///
/// Set once at construction. There are no setters: once a buffer has been
/// handed to a [`TextView`] its content and alignment stay fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    content: String,
    alignment: TextAlign,
}

impl DisplayBuffer {
    /// Creates a buffer holding `content` aligned with `alignment`.
    pub fn new(content: impl Into<String>, alignment: TextAlign) -> Self {
        Self {
            content: content.into(),
            alignment,
        }
    }

    /// The displayed text. Lines are separated by `\n`.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Horizontal alignment applied to every line.
    pub fn alignment(&self) -> TextAlign {
        self.alignment
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT, TextAlign::Center)
    }
}

/// Borderless widget rendering a [`DisplayBuffer`] from the top of its area.
///
/// Long lines wrap at word boundaries; leading whitespace is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    buffer: DisplayBuffer,
    rect: Option<Rect>,
}

impl TextView {
    /// Creates a view over `buffer` that fills whatever area it is given.
    pub fn new(buffer: DisplayBuffer) -> Self {
        Self { buffer, rect: None }
    }

    /// Pins the view to `rect` when installed without `fullscreen`.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// The buffer this view displays.
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }
}

impl Drawable for TextView {
    fn draw(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.buffer.content())
            .alignment(self.buffer.alignment().into())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn area(&self, screen: Rect) -> Rect {
        self.rect.unwrap_or(screen)
    }
}
