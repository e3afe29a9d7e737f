//! Status bar widget: pending indicator, flash messages, key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub const THINKING: &str = "I'm thinking...";
const HINTS: &str = "Enter:send  Esc:stop  PgUp/PgDn:scroll  F1:help  Ctrl+C:quit";

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Left and right text of the bar
    pub fn texts(&self) -> (Option<String>, String) {
        let left = self
            .state
            .is_pending()
            .then(|| format!(" {} {} ", self.state.spinner(), THINKING));

        let right = match (&self.state.flash_message, &self.state.snapshot.error) {
            (Some((flash, _)), _) => flash.clone(),
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => HINTS.to_string(),
        };
        (left, right)
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (left, right) = self.texts();

        let mut left_width = 0;
        if let Some(left) = left {
            left_width = left.chars().count() as u16;
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            buf.set_line(area.x, area.y, &Line::from(Span::styled(left, style)), left_width);
        }

        let right_style = if self.state.flash_message.is_none() && self.state.snapshot.error.is_some() {
            bg_style.fg(Color::LightRed)
        } else {
            bg_style
        };
        let right_width = right.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            buf.set_line(
                right_x,
                area.y,
                &Line::from(Span::styled(right, right_style)),
                right_width + 1,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_shown_only_while_pending() {
        let mut state = TuiState::default();
        let (left, right) = StatusBarWidget::new(&state).texts();
        assert!(left.is_none());
        assert_eq!(right, HINTS);

        state.snapshot.pending = true;
        let (left, _) = StatusBarWidget::new(&state).texts();
        assert!(left.unwrap().contains(THINKING));
    }

    #[test]
    fn test_flash_beats_error() {
        let mut state = TuiState::default();
        state.snapshot.error = Some("stream read error".into());
        assert_eq!(
            StatusBarWidget::new(&state).texts().1,
            "Error: stream read error"
        );

        state.set_flash("Conversation cleared");
        assert_eq!(StatusBarWidget::new(&state).texts().1, "Conversation cleared");
    }

    #[test]
    fn test_zero_height_area_renders_nothing() {
        let mut state = TuiState::default();
        state.snapshot.pending = true;
        let area = Rect::new(0, 0, 40, 0);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&state).render(area, &mut buf);
        assert!(buf.content.is_empty());
    }

    #[test]
    fn test_renders_thinking_and_hints() {
        let mut state = TuiState::default();
        state.snapshot.pending = true;
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&state).render(area, &mut buf);

        let text = crate::tui::widgets::buffer_text(&buf);
        assert!(text.contains(THINKING));
        assert!(text.contains("Esc:stop"));
    }
}
