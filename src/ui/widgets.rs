//! Dialog and overlay widgets for perch.
//!
//! Holds the draw functions used by [crate::ui::render]: the modal
//! new-file input dialog and the bottom-right status message overlay.

use crate::app::AppState;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draws the modal new-file dialog: a bordered, centered box with a title
/// and the live input buffer. The terminal cursor is placed after the
/// last character, which also makes it visible for this frame.
pub fn draw_input_dialog(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let rect = centered_area(area, 44, 3);

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" New File ").centered());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let visible_width = inner.width as usize;
    let (view, cursor_offset) = input_tail_view(app.dialog().buffer(), visible_width);
    frame.render_widget(Paragraph::new(Line::raw(view.to_string())), inner);

    frame.set_cursor_position((inner.x + cursor_offset as u16, inner.y));
}

/// Draws a status message overlay at the bottom right.
/// Used for non-fatal errors such as a failed delete or a name clash.
pub fn draw_message_overlay(frame: &mut Frame, text: &str) {
    let area = frame.area();

    let min_width = 24;
    let border_pad = 2;
    let width = ((text.width() + border_pad + 2).max(min_width)).min(area.width as usize) as u16;
    let height = 3u16.min(area.height);

    let rect = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(height),
        width,
        height,
    };

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(" Error ", Style::default().fg(Color::Red)));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    frame.render_widget(Paragraph::new(Line::raw(text.to_string())), inner);
}

/// Returns a `width` x `height` rectangle centered in `area`, clamped to
/// fit. Recomputed every frame, so the dialog reflows with the terminal.
fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Returns the tail of `input` that fits into `visible` columns plus the
/// display width of that tail (the cursor column, cursor pinned at the
/// end of the buffer).
fn input_tail_view(input: &str, visible: usize) -> (&str, usize) {
    if input.width() <= visible {
        return (input, input.width());
    }

    let mut current_w = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        // keep one column free for the cursor cell
        if current_w + ch.width().unwrap_or(0) > visible.saturating_sub(1) {
            break;
        }
        current_w += ch.width().unwrap_or(0);
        start = idx;
    }
    (&input[start..], input[start..].width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_area_is_clamped() {
        let rect = centered_area(Rect::new(0, 0, 20, 5), 44, 3);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.x, 0);
    }

    #[test]
    fn short_input_is_shown_whole() {
        let (view, cursor) = input_tail_view("abc", 10);
        assert_eq!(view, "abc");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn long_input_shows_the_tail() {
        let (view, cursor) = input_tail_view("abcdefghij", 5);
        assert_eq!(view, "ghij");
        assert!(cursor <= 5);
    }
}
