//! TUI widgets: ratatui components for the chat layout
//!
//! Layout:
//! ┌── Header (3) ──────────────────────────┐
//! ├── Conversation (flex) ─────────────────┤
//! ├── StatusBar (1) ───────────────────────┤
//! └── Input (3) ───────────────────────────┘

pub mod conversation;
pub mod error_panel;
pub mod header;
pub mod help;
pub mod input;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions for a terminal area
pub struct ChatLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub status_bar: Rect,
    pub input: Rect,
}

impl ChatLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            header: chunks[0],
            conversation: chunks[1],
            status_bar: chunks[2],
            input: chunks[3],
        }
    }

    /// Centered overlay covering the given percentages of `area`
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
