//! Validity rules for the login fields
//!
//! Errors are plain data: a field's error set is recomputed from its value on
//! every change and rendered by the view layer, never returned as `Err`.

use email_address::{EmailAddress, Options};
use std::collections::BTreeSet;
use std::fmt;

/// Names of the fields on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Email,
    Password,
}

impl FieldName {
    /// Every field, in display order
    pub const ALL: [FieldName; 2] = [FieldName::Email, FieldName::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated rule on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Required,
    Email,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
        }
    }
}

/// A named predicate checked against a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Violated by the empty string. Whitespace counts as a value.
    Required,
    /// Violated by a non-empty value that is not an email address.
    Email,
}

impl Rule {
    /// Check the rule, returning the error it contributes when violated
    pub fn check(&self, value: &str, options: &ValidationOptions) -> Option<ErrorKind> {
        match self {
            Rule::Required => value.is_empty().then_some(ErrorKind::Required),
            Rule::Email => (!value.is_empty() && !is_email_address(value, options))
                .then_some(ErrorKind::Email),
        }
    }
}

/// Knobs for the email syntax check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Require a dotted domain (`user@example.com` but not `user@localhost`)
    pub require_tld: bool,
}

/// RFC 5322 addr-spec check. Display-name forms (`Jane <jane@example.com>`)
/// are not accepted.
pub fn is_email_address(value: &str, options: &ValidationOptions) -> bool {
    let parse_options = Options::default().without_display_text();
    let parse_options = if options.require_tld {
        parse_options.with_required_tld()
    } else {
        parse_options
    };

    EmailAddress::parse_with_options(value, parse_options).is_ok()
}

/// Run every rule against a value
pub fn validate(rules: &[Rule], value: &str, options: &ValidationOptions) -> BTreeSet<ErrorKind> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value, options))
        .collect()
}

/// Fixed user-facing message for a violated rule
pub fn error_message(field: FieldName, kind: ErrorKind) -> &'static str {
    match (field, kind) {
        (FieldName::Email, ErrorKind::Required) => "Email is required.",
        (FieldName::Password, ErrorKind::Required) => "Password is required.",
        (_, ErrorKind::Email) => "Invalid email format.",
    }
}

/// Snapshot of a field's validation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    pub errors: BTreeSet<ErrorKind>,
}

impl Validity {
    pub fn from_errors(errors: BTreeSet<ErrorKind>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
