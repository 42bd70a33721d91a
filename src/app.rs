//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, FieldName, Form, LoginCredentials, SubmitOutcome, View, QUIT_BUTTON, SIGN_IN_BUTTON,
};
use crate::submit::SubmitSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Consumers of accepted submissions
    sinks: Vec<Box<dyn SubmitSink>>,
    /// Whether the app should quit
    quit: bool,
    /// Bumped on changes outside the login form (view, dialogs, status)
    revision: u64,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, sinks: Vec<Box<dyn SubmitSink>>) -> Self {
        let mut state = AppState::new(config.validation_options());
        if let Some(email) = &config.prefill_email {
            state.login.set_field_value(FieldName::Email, email.clone());
        }

        Self {
            state,
            sinks,
            quit: false,
            revision: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Combined change counter; the event loop redraws when it moves
    pub fn revision(&self) -> u64 {
        self.revision.wrapping_add(self.state.login.revision())
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
                self.touch();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await?,
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.login.is_buttons_row_active();
        let with_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // AltGr arrives as Ctrl+Alt on Windows and produces printable chars
        let is_text_input = !with_ctrl || key.modifiers.contains(KeyModifiers::ALT);
        let with_submit_modifier = with_ctrl
            || key
                .modifiers
                .contains(crate::platform::SUBMIT_MODIFIER);

        // Clear any status messages on key press
        if self.state.status_message.take().is_some() {
            self.touch();
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login.prev_field(),
            KeyCode::Left if on_buttons => self.state.login.prev_button(),
            KeyCode::Right if on_buttons => self.state.login.next_button(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if with_submit_modifier => {
                self.submit().await;
            }
            KeyCode::Char('u') if with_ctrl => self.state.login.clear_active_field(),
            // Enter on the buttons row triggers the selected button
            KeyCode::Enter if on_buttons => match self.state.login.selected_button() {
                SIGN_IN_BUTTON => {
                    self.submit().await;
                }
                QUIT_BUTTON => self.quit(),
                _ => {}
            },
            KeyCode::Enter => self.state.login.next_field(),
            KeyCode::Esc => self.quit(),
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons && is_text_input => self.state.login.input_char(c),
            KeyCode::Backspace if !on_buttons => self.state.login.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_submitted_key(&mut self, _key: KeyEvent) {
        self.state.current_view = View::Login;
        self.touch();
    }

    /// Submit the login form and hand accepted values to every sink
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.state.login.submit();
        match &outcome {
            SubmitOutcome::Accepted(credentials) => {
                self.deliver(credentials).await;
                self.state.status_message =
                    Some(format!("Login accepted for {}", credentials.email));
                self.state.last_accepted = Some(credentials.clone());
                self.state.current_view = View::Submitted;
            }
            SubmitOutcome::Rejected => {
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
        }
        self.touch();
        outcome
    }

    async fn deliver(&mut self, credentials: &LoginCredentials) {
        for sink in &self.sinks {
            if let Err(e) = sink.accept(credentials).await {
                tracing::warn!("Submit sink {} failed: {e}", sink.name());
                self.state
                    .push_error(format!("Could not deliver submission to {}: {e}", sink.name()));
            }
        }
    }
}
