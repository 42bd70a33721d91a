//! Login form state and its transitions

use super::field::FormField;
use super::validation::{error_message, FieldName, ValidationOptions, Validity};
use std::collections::BTreeSet;
use std::fmt;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focus index of the buttons row (after email and password)
pub const BUTTONS_ROW: usize = 2;
/// Button indices on the buttons row
pub const SIGN_IN_BUTTON: usize = 0;
pub const QUIT_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Values handed to submit sinks when the form is accepted
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a submit attempt. Rejection is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(LoginCredentials),
    Rejected,
}

/// The login screen's form: two fields, the touched set, and focus.
#[derive(Debug, Clone)]
pub struct LoginForm {
    email: FormField,
    password: FormField,
    touched: BTreeSet<FieldName>,
    active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Sign in, 1=Quit)
    selected_button: usize,
    revision: u64,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::with_options(ValidationOptions::default())
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            email: FormField::email(options),
            password: FormField::password(options),
            touched: BTreeSet::new(),
            active_field_index: 0,
            selected_button: SIGN_IN_BUTTON,
            revision: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    /// Replace a field's value. Only that field's errors are recomputed.
    pub fn set_field_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
        self.bump();
    }

    pub fn validity(&self, name: FieldName) -> Validity {
        self.field(name).validity()
    }

    pub fn form_validity(&self) -> bool {
        FieldName::ALL
            .iter()
            .all(|name| self.field(*name).is_valid())
    }

    pub fn touched(&self) -> &BTreeSet<FieldName> {
        &self.touched
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    pub fn mark_touched(&mut self, name: FieldName) {
        if self.touched.insert(name) {
            self.bump();
        }
    }

    pub fn mark_all_touched(&mut self) {
        for name in FieldName::ALL {
            self.mark_touched(name);
        }
    }

    /// Emit the values when valid, otherwise reveal every field's errors
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.form_validity() {
            SubmitOutcome::Accepted(self.values())
        } else {
            tracing::info!("Login form is invalid");
            for name in FieldName::ALL {
                let kinds: Vec<&str> = self
                    .field(name)
                    .errors()
                    .iter()
                    .map(|k| k.as_str())
                    .collect();
                if !kinds.is_empty() {
                    tracing::debug!("{name}: {}", kinds.join(", "));
                }
            }
            self.mark_all_touched();
            SubmitOutcome::Rejected
        }
    }

    pub fn values(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Messages the view should show for a field. Empty until touched.
    pub fn visible_messages(&self, name: FieldName) -> Vec<&'static str> {
        if !self.is_touched(name) {
            return Vec::new();
        }
        self.field(name)
            .errors()
            .iter()
            .map(|kind| error_message(name, *kind))
            .collect()
    }

    /// Incremented on every observable change; the view redraws when it moves
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Field under the cursor, `None` on the buttons row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn selected_button(&self) -> usize {
        self.selected_button
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
        self.bump();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
        self.bump();
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            let value = self.field(name).with_char(c);
            self.set_field_value(name, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            let value = self.field(name).without_last_char();
            self.set_field_value(name, value);
        }
    }

    pub fn clear_active_field(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.set_field_value(name, String::new());
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(BUTTONS_ROW);
        if index == self.active_field_index {
            return;
        }
        // Leaving a field counts as interacting with it
        if let Some(name) = self.active_field_name() {
            self.mark_touched(name);
        }
        self.active_field_index = index;
        self.bump();
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            // Index 2 is buttons row, no FormField for it
            _ => None,
        }
    }
}
