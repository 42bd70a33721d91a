//! Application state definitions

use super::forms::{LoginCredentials, LoginForm, ValidationOptions};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    /// Shown after an accepted submit until the next key press
    Submitted,
}

/// State for the whole screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub login: LoginForm,
    /// Last credentials accepted by the form
    pub last_accepted: Option<LoginCredentials>,
    /// Short message for the status bar
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            login: LoginForm::with_options(options),
            ..Self::default()
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
