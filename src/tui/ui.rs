//! Frame composition for the shell.

use crate::widgets::Drawable;
use ratatui::Frame;

/// Renders the root drawable into the frame.
///
/// A fullscreen root receives the whole frame. Otherwise the root's own
/// [`Drawable::area`] is used, clipped to the screen; a root that falls
/// entirely off-screen draws nothing.
pub fn render_root(frame: &mut Frame, root: &dyn Drawable, fullscreen: bool) {
    let screen = frame.area();
    let area = if fullscreen {
        screen
    } else {
        root.area(screen).intersection(screen)
    };
    if area.is_empty() {
        return;
    }
    root.draw(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::{find_row_with_text, row_text, test_terminal};
    use crate::widgets::text_view::{DisplayBuffer, TextAlign, TextView};
    use ratatui::layout::Rect;

    fn render_to_buffer(root: &dyn Drawable, fullscreen: bool) -> ratatui::buffer::Buffer {
        let mut terminal = test_terminal(30, 8);
        terminal
            .draw(|frame| render_root(frame, root, fullscreen))
            .expect("draw failed");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn fullscreen_root_ignores_pinned_rect() {
        let view = TextView::new(DisplayBuffer::new("hello", TextAlign::Left))
            .with_rect(Rect::new(5, 4, 10, 1));
        let buffer = render_to_buffer(&view, true);
        assert_eq!(find_row_with_text(&buffer, "hello"), Some(0));
        assert!(row_text(&buffer, 0).starts_with("hello"));
    }

    #[test]
    fn windowed_root_draws_in_its_rect() {
        let view = TextView::new(DisplayBuffer::new("hello", TextAlign::Left))
            .with_rect(Rect::new(5, 4, 10, 1));
        let buffer = render_to_buffer(&view, false);
        assert_eq!(find_row_with_text(&buffer, "hello"), Some(4));
        assert_eq!(row_text(&buffer, 4).find("hello"), Some(5));
    }

    #[test]
    fn windowed_root_is_clipped_to_screen() {
        let view = TextView::new(DisplayBuffer::new("edge", TextAlign::Left))
            .with_rect(Rect::new(26, 7, 20, 5));
        let buffer = render_to_buffer(&view, false);
        assert!(row_text(&buffer, 7).ends_with("edge"));
    }

    #[test]
    fn off_screen_root_draws_nothing() {
        let view = TextView::new(DisplayBuffer::new("hidden", TextAlign::Left))
            .with_rect(Rect::new(40, 20, 10, 2));
        let buffer = render_to_buffer(&view, false);
        assert_eq!(find_row_with_text(&buffer, "hidden"), None);
    }
}
