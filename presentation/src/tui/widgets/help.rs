//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const KEYS: [(&str, &str); 6] = [
    ("Enter", "Send message"),
    ("Esc", "Stop the reply in progress"),
    ("PgUp/PgDn", "Scroll the conversation"),
    ("Ctrl+A/E", "Start/end of input"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
];

const COMMANDS: [(&str, &str); 3] = [
    ("/clear", "Start a new conversation"),
    ("/help", "Show this help"),
    ("/quit", "Quit (also /exit, /q)"),
];

pub struct HelpWidget;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entries(items: &[(&'static str, &'static str)], color: Color) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", key), Style::default().fg(color)),
                Span::raw(*what),
            ])
        })
        .collect()
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![heading("Keyboard Shortcuts"), Line::from("")];
        lines.extend(entries(&KEYS, Color::Yellow));
        lines.push(Line::from(""));
        lines.push(heading("Commands"));
        lines.push(Line::from(""));
        lines.extend(entries(&COMMANDS, Color::Green));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
