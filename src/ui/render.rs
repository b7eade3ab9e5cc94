//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop,
//! the status line and the flowing entry layout of the listing pane.
//!
//! This module stays pure rendering: it reads state and produces widgets,
//! without owning any perch core logic.

use crate::app::{AppState, UiMode};
use crate::core::DirEntry;
use crate::ui::widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Renders the entire terminal UI for perch on each frame.
///
/// Row 0 is the status line with the current directory path; the rest of
/// the screen is the bordered listing pane. The dialog and the status
/// message are drawn on top when present. All geometry is recomputed from
/// the frame area, so a resize simply takes effect on the next draw.
pub fn render(frame: &mut Frame, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    draw_status_line(frame, app, rows[0]);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    let lines = entry_lines(
        app.nav().entries(),
        app.nav().selected_idx(),
        inner.width as usize,
    );
    frame.render_widget(Paragraph::new(lines), inner);

    if app.mode() == UiMode::NewFileDialog {
        widgets::draw_input_dialog(frame, app);
    }

    if let Some(text) = app.status() {
        widgets::draw_message_overlay(frame, text);
    }
}

/// Draws the current path on the left and the selection position on the
/// right of the status row.
fn draw_status_line(frame: &mut Frame, app: &AppState, rect: Rect) {
    let mut path = app.nav().current_dir().to_string_lossy().into_owned();
    if app.show_hidden() {
        path.push_str("  [hidden]");
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            path,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        rect,
    );

    let total = app.nav().entries().len();
    let counter = if total == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", app.nav().selected_idx() + 1, total)
    };
    frame.render_widget(
        Paragraph::new(Line::raw(counter)).alignment(Alignment::Right),
        rect,
    );
}

/// Lays out entries left-to-right in pairs of rows: a names row and a
/// marker row beneath it carrying the `^` under the selected entry.
///
/// A new row-pair starts whenever the next entry's rendered width would
/// overflow `width`; an entry wider than the whole pane gets a row-pair
/// of its own and is clipped by the renderer.
pub fn entry_lines(entries: &[DirEntry], selected: usize, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let dir_style = Style::default().add_modifier(Modifier::UNDERLINED);

    let mut lines = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut marker = String::new();
    let mut x = 0usize;

    for (i, entry) in entries.iter().enumerate() {
        let name = entry.name_str().into_owned();
        let name_width = name.width();

        if x > 0 && x + name_width > width {
            lines.push(Line::from(std::mem::take(&mut row)));
            lines.push(Line::raw(std::mem::take(&mut marker)));
            x = 0;
        }

        if i == selected {
            while marker.len() < x {
                marker.push(' ');
            }
            marker.push('^');
        }

        let style = if entry.is_dir() {
            dir_style
        } else {
            Style::default()
        };
        row.push(Span::styled(name, style));
        row.push(Span::raw(" "));

        x += name_width + 1;
    }

    if !row.is_empty() {
        lines.push(Line::from(row));
        lines.push(Line::raw(marker));
    }
    lines
}
