//! TUI application state
//!
//! Everything the widgets render. The transcript itself lives in the
//! session; `snapshot` is the latest copy received from its watch channel.

use std::time::{Duration, Instant};
use streamchat_domain::SessionSnapshot;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Names and endpoint details shown by the header and transcript
#[derive(Debug, Clone)]
pub struct ChatLabels {
    pub app_name: String,
    pub model: String,
    pub endpoint: String,
    pub assistant_name: String,
    pub user_name: String,
}

impl Default for ChatLabels {
    fn default() -> Self {
        Self {
            app_name: "streamchat".to_string(),
            model: String::new(),
            endpoint: String::new(),
            assistant_name: "MyAssistant".to_string(),
            user_name: "You".to_string(),
        }
    }
}

/// Central TUI state, owned by the `TuiApp` select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    pub snapshot: SessionSnapshot,
    pub labels: ChatLabels,
    /// Set when the inference service could not be reached at startup
    pub connection_error: Option<String>,

    pub input: String,
    /// Byte offset into `input`
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom of the conversation
    pub scroll_offset: usize,

    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,
    spinner_frame: usize,

    pub should_quit: bool,
}

impl TuiState {
    pub fn new(labels: ChatLabels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.snapshot.pending
    }

    /// Replace the snapshot; new content pins the view to the bottom
    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        if snapshot.transcript.len() != self.snapshot.transcript.len() {
            self.scroll_offset = 0;
        }
        self.snapshot = snapshot;
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Take the input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    // -- Status line --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than `max_age`
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    /// Advance the pending spinner
    pub fn tick(&mut self) {
        if self.is_pending() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.spinner_frame]
    }
}
