//! Conversation widget: the visible transcript, bottom-anchored

use crate::tui::state::{ChatLabels, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use streamchat_domain::{Role, SessionSnapshot};

pub struct ConversationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

/// Render the transcript as lines. System messages are never shown.
pub fn transcript_lines<'a>(snapshot: &'a SessionSnapshot, labels: &'a ChatLabels) -> Text<'a> {
    let mut lines: Vec<Line> = Vec::new();
    let visible: Vec<_> = snapshot.transcript.visible().collect();
    let last = visible.len().saturating_sub(1);

    for (i, msg) in visible.into_iter().enumerate() {
        let (name, color) = match msg.role {
            Role::User => (labels.user_name.as_str(), Color::Yellow),
            _ => (labels.assistant_name.as_str(), Color::Green),
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        for content_line in msg.content.lines() {
            lines.push(Line::from(format!("  {}", content_line)));
        }

        let streaming = snapshot.pending && i == last && msg.role == Role::Assistant;
        if streaming {
            lines.push(Line::from(Span::styled("  ▌", Style::default().fg(color))));
        }
        if let Some(failure) = &msg.failure {
            lines.push(Line::from(Span::styled(
                format!("  ✗ {}", failure),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }

    Text::from(lines)
}

/// Top scroll position for a view `scroll_offset` lines up from the bottom
fn scroll_from_top(total_lines: usize, visible_height: u16, scroll_offset: usize) -> u16 {
    let total_lines = total_lines.min(u16::MAX as usize) as u16;
    if total_lines <= visible_height {
        return 0;
    }
    let max_scroll = total_lines - visible_height;
    let offset = scroll_offset.min(max_scroll as usize) as u16;
    max_scroll - offset
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = transcript_lines(&self.state.snapshot, &self.state.labels);
        let visible_height = area.height.saturating_sub(2);
        let content_width = area.width.saturating_sub(2);

        // Measured without the block so line_count is pure content
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width);
        let scroll = scroll_from_top(total_lines, visible_height, self.state.scroll_offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
