//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ──> KeyAction ──> ChatSession::{submit, cancel, clear}
//!   ├─ watch::Receiver<SessionSnapshot> ──> TuiState::apply_snapshot
//!   └─ tick_interval (spinner, flash expiry)
//! ```
//!
//! Reply tasks run on their own; the loop only observes their effect through
//! the session's snapshot channel.

use super::command::{SlashCommand, Submitted};
use super::keys::{KeyAction, PAGE_LINES, map_key};
use super::state::{ChatLabels, TuiState};
use super::widgets::{
    ChatLayout, conversation::ConversationWidget, error_panel::ErrorPanelWidget,
    header::HeaderWidget, help::HelpWidget, input::InputWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use streamchat_application::{ChatSession, InferenceService};
use streamchat_domain::SessionSnapshot;
use tokio::sync::watch;
use tracing::{debug, info};

const TICK: Duration = Duration::from_millis(100);
const FLASH_TTL: Duration = Duration::from_secs(4);

/// Main TUI application
pub struct TuiApp<S: InferenceService + 'static> {
    session: Option<ChatSession<S>>,
    snapshots: watch::Receiver<SessionSnapshot>,
    // Keeps `snapshots` open when there is no session
    _idle: Option<watch::Sender<SessionSnapshot>>,
    state: TuiState,
}

impl<S: InferenceService + 'static> TuiApp<S> {
    pub fn new(session: ChatSession<S>, labels: ChatLabels) -> Self {
        let snapshots = session.subscribe();
        let mut state = TuiState::new(labels);
        state.snapshot = session.snapshot();

        Self {
            session: Some(session),
            snapshots,
            _idle: None,
            state,
        }
    }

    /// A TUI that only shows why the model is unreachable
    pub fn unavailable(error: impl Into<String>, labels: ChatLabels) -> Self {
        let (idle, snapshots) = watch::channel(SessionSnapshot::default());
        let mut state = TuiState::new(labels);
        state.connection_error = Some(error.into());

        Self {
            session: None,
            snapshots,
            _idle: Some(idle),
            state,
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        // Restore the terminal even if something panics mid-frame
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Some(session) = &self.session {
            session.cancel();
        }
        info!("TUI closed");
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK);

        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_action(map_key(key)),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => return Ok(()),
                },

                changed = self.snapshots.changed() => {
                    if changed.is_ok() {
                        let snapshot = self.snapshots.borrow_and_update().clone();
                        self.state.apply_snapshot(snapshot);
                    }
                }

                _ = tick.tick() => {
                    self.state.tick();
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        }
    }

    /// Apply a key action to the state and the session
    pub fn handle_action(&mut self, action: KeyAction) {
        if self.state.connection_error.is_some() {
            match action {
                KeyAction::Quit | KeyAction::Stop | KeyAction::InsertChar('q') => {
                    self.state.should_quit = true
                }
                KeyAction::ToggleHelp => self.state.show_help = !self.state.show_help,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::ToggleHelp => self.state.show_help = !self.state.show_help,
            KeyAction::Stop => {
                if self.state.show_help {
                    self.state.show_help = false;
                } else if self.session.as_ref().is_some_and(|s| s.cancel()) {
                    self.state.set_flash("Stopped");
                }
            }
            KeyAction::ScrollUp => self.state.scroll_up(PAGE_LINES),
            KeyAction::ScrollDown => self.state.scroll_down(PAGE_LINES),
            KeyAction::InsertChar(c) => self.state.insert_char(c),
            KeyAction::DeleteChar => self.state.delete_char(),
            KeyAction::CursorLeft => self.state.cursor_left(),
            KeyAction::CursorRight => self.state.cursor_right(),
            KeyAction::CursorHome => self.state.cursor_home(),
            KeyAction::CursorEnd => self.state.cursor_end(),
            KeyAction::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        match Submitted::parse(&self.state.input) {
            Submitted::Empty => {}
            Submitted::Command(command) => {
                self.state.take_input();
                self.run_command(command);
            }
            Submitted::Message(text) => {
                if !self.state.snapshot.accepts_input() {
                    self.state.set_flash("Still answering. Press Esc to stop.");
                    return;
                }
                let Some(session) = &self.session else {
                    return;
                };
                self.state.take_input();
                let submission = session.submit(text);
                debug!("Submitted request {}", submission.epoch);
                // Picked up by the next snapshot change; applied now so the
                // input is disabled before the next key arrives.
                self.state.apply_snapshot(session.snapshot());
            }
        }
    }

    fn run_command(&mut self, command: SlashCommand) {
        match command {
            SlashCommand::Quit => self.state.should_quit = true,
            SlashCommand::Help => self.state.show_help = true,
            SlashCommand::Clear => {
                if let Some(session) = &self.session {
                    session.clear();
                    self.state.apply_snapshot(session.snapshot());
                }
                self.state.scroll_offset = 0;
                self.state.set_flash("Conversation cleared");
            }
            SlashCommand::Unknown(name) => {
                self.state
                    .set_flash(format!("Unknown command /{} (try /help)", name));
            }
        }
    }
}

fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = ChatLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    match &state.connection_error {
        Some(error) => {
            let body = ratatui::layout::Rect {
                height: layout.conversation.height + layout.status_bar.height + layout.input.height,
                ..layout.conversation
            };
            frame.render_widget(ErrorPanelWidget::new(&state.labels.endpoint, error), body);
        }
        None => {
            frame.render_widget(ConversationWidget::new(state), layout.conversation);
            frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
            frame.render_widget(InputWidget::new(state), layout.input);
        }
    }

    if state.show_help {
        frame.render_widget(HelpWidget, ChatLayout::centered_overlay(60, 60, frame.area()));
    }
}
