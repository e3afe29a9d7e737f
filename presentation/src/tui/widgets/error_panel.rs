//! Shown instead of the chat when the model could not be reached

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ErrorPanelWidget<'a> {
    endpoint: &'a str,
    error: &'a str,
}

impl<'a> ErrorPanelWidget<'a> {
    pub fn new(endpoint: &'a str, error: &'a str) -> Self {
        Self { endpoint, error }
    }
}

impl<'a> Widget for ErrorPanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let red = Style::default().fg(Color::Red);
        let target = if self.endpoint.is_empty() {
            "Could not connect to the model.".to_string()
        } else {
            format!("Could not connect to the model at {}.", self.endpoint)
        };

        let lines = vec![
            Line::from(Span::styled(target, red.add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(self.error, red)),
            Line::from(""),
            Line::from("Make sure the inference endpoint is running, then start again."),
            Line::from(Span::styled(
                "Press Ctrl+C or q to quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Connection error ")
            .style(red);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
