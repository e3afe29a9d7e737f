//! Input widget: single message line, dimmed while a reply is pending

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        if self.state.is_pending() {
            format!(" Waiting for {}... ", self.state.labels.assistant_name)
        } else {
            " Message ".to_string()
        }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pending = self.state.is_pending();
        let color = if pending { Color::DarkGray } else { Color::Green };

        let input = self.state.input.as_str();
        let cursor = self.state.cursor_pos.min(input.len());
        let (before, rest) = input.split_at(cursor);

        let mut spans = vec![Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if pending {
            spans.push(Span::styled(input, Style::default().fg(Color::DarkGray)));
        } else {
            let mut chars = rest.chars();
            let under_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".into());
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                under_cursor,
                Style::default().fg(Color::Black).bg(color),
            ));
            spans.push(Span::raw(chars.as_str()));
        }

        // Keep the cursor in view on long input
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = PROMPT.len() + before.chars().count();
        let scroll_x = (cursor_col + 1).saturating_sub(inner_width);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .style(Style::default().fg(color));

        Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, scroll_x.min(u16::MAX as usize) as u16))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_shows_typed_text() {
        let mut state = TuiState::default();
        for c in "hello".chars() {
            state.insert_char(c);
        }
        let text = render(&state);
        assert!(text.contains("Message"));
        assert!(text.contains("> hello"));
    }

    #[test]
    fn test_pending_title() {
        let mut state = TuiState::default();
        state.snapshot.pending = true;
        assert!(render(&state).contains("Waiting for MyAssistant..."));
    }
}
