//! Confirmation shown after an accepted submit

use super::base::{render_dialog, DialogConfig};
use crate::state::LoginCredentials;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the overlay for accepted credentials. No authentication happens.
pub fn render_submitted_dialog(frame: &mut Frame, credentials: &LoginCredentials) {
    let message = format!("Login accepted for {}", credentials.email);
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "any key",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Login accepted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
