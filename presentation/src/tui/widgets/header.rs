//! Header widget: app name, model and endpoint

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels = &self.state.labels;
        let (dot, dot_color) = if self.state.connection_error.is_some() {
            ("○ ", Color::Red)
        } else {
            ("◉ ", Color::Green)
        };

        let mut spans = vec![
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(
                labels.assistant_name.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !labels.model.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                labels.model.as_str(),
                Style::default().fg(Color::White),
            ));
        }
        if !labels.endpoint.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                labels.endpoint.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.app_name))
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
