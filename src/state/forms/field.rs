//! Form field value objects

use super::validation::{validate, ErrorKind, FieldName, Rule, ValidationOptions, Validity};
use std::collections::BTreeSet;

/// Represents a single form field with its rules and current value.
///
/// `errors` is private so it can only change through `set_text`, which keeps
/// it in step with `value`.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    value: String,
    errors: BTreeSet<ErrorKind>,
    rules: Vec<Rule>,
    options: ValidationOptions,
    pub is_masked: bool,
}

impl FormField {
    /// Create an empty field with the given rules
    pub fn new(name: FieldName, rules: Vec<Rule>, options: ValidationOptions) -> Self {
        let mut field = Self {
            name,
            label: name.label().to_string(),
            value: String::new(),
            errors: BTreeSet::new(),
            rules,
            options,
            is_masked: false,
        };
        field.revalidate();
        field
    }

    /// Email field: required, email syntax
    pub fn email(options: ValidationOptions) -> Self {
        Self::new(FieldName::Email, vec![Rule::Required, Rule::Email], options)
    }

    /// Password field: required, rendered masked
    pub fn password(options: ValidationOptions) -> Self {
        Self {
            is_masked: true,
            ..Self::new(FieldName::Password, vec![Rule::Required], options)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &BTreeSet<ErrorKind> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn validity(&self) -> Validity {
        Validity::from_errors(self.errors.clone())
    }

    /// Set the text value and recompute errors
    pub fn set_text(&mut self, value: String) {
        self.value = value;
        self.revalidate();
    }

    /// Value after appending a character
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value after removing the last character
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.rules, &self.value, &self.options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_email_field_is_empty_and_required() {
        let field = FormField::email(ValidationOptions::default());
        assert_eq!(field.name, FieldName::Email);
        assert_eq!(field.label, "Email");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.errors(), &BTreeSet::from([ErrorKind::Required]));
        assert!(!field.is_masked);
    }

    #[test]
    fn test_password_field_is_masked() {
        let mut field = FormField::password(ValidationOptions::default());
        assert!(field.is_masked);
        field.set_text("secret".to_string());
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.as_text(), "secret");
    }

    #[test]
    fn test_errors_follow_value() {
        let mut field = FormField::email(ValidationOptions::default());
        field.set_text("notanemail".to_string());
        assert_eq!(field.errors(), &BTreeSet::from([ErrorKind::Email]));

        field.set_text("test@example.com".to_string());
        assert!(field.is_valid());

        field.set_text(String::new());
        assert_eq!(field.errors(), &BTreeSet::from([ErrorKind::Required]));
    }

    #[test]
    fn test_char_helpers_do_not_mutate() {
        let mut field = FormField::email(ValidationOptions::default());
        field.set_text("ab".to_string());
        assert_eq!(field.with_char('c'), "abc");
        assert_eq!(field.without_last_char(), "a");
        assert_eq!(field.as_text(), "ab");
    }

    #[test]
    fn test_without_last_char_on_empty() {
        let field = FormField::password(ValidationOptions::default());
        assert_eq!(field.without_last_char(), "");
    }

    #[test]
    fn test_validity_snapshot() {
        let mut field = FormField::password(ValidationOptions::default());
        field.set_text("password123".to_string());
        assert_eq!(
            field.validity(),
            Validity {
                valid: true,
                errors: BTreeSet::new()
            }
        );
    }
}
