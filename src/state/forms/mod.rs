//! Form domain layer
//!
//! This module provides the login form model: field values, derived
//! validation errors, the touched set, and submit gating.

#![allow(dead_code)]

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{Form, LoginCredentials, LoginForm, SubmitOutcome, QUIT_BUTTON, SIGN_IN_BUTTON};
pub use validation::{FieldName, ValidationOptions};
