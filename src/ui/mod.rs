//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_login(frame, main_area, app);

    if let (View::Submitted, Some(credentials)) =
        (&app.state.current_view, &app.state.last_accepted)
    {
        components::render_submitted_dialog(frame, credentials);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors overlay everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldName, Form, LoginCredentials};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default(), vec![])
    }

    #[test]
    fn test_renders_fields_and_buttons() {
        let screen = render(&new_app());
        assert!(screen.contains("Sign in"));
        assert!(screen.contains("Email"));
        assert!(screen.contains("Password"));
        assert!(screen.contains("Quit"));
    }

    #[test]
    fn test_untouched_invalid_fields_show_no_messages() {
        let app = new_app();
        assert!(!app.state.login.form_validity());

        let screen = render(&app);
        assert!(!screen.contains("Email is required."));
        assert!(!screen.contains("Password is required."));
    }

    #[test]
    fn test_rejected_submit_reveals_all_messages() {
        let mut app = new_app();
        app.state.login.submit();

        let screen = render(&app);
        assert!(screen.contains("Email is required."));
        assert!(screen.contains("Password is required."));
    }

    #[test]
    fn test_only_touched_field_shows_message() {
        let mut app = new_app();
        app.state.login.set_field_value(FieldName::Email, "notanemail");
        app.state.login.next_field();

        let screen = render(&app);
        assert!(screen.contains("Invalid email format."));
        assert!(!screen.contains("Password is required."));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = new_app();
        app.state
            .login
            .set_field_value(FieldName::Password, "hunter2");

        let screen = render(&app);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn test_submitted_dialog() {
        let mut app = new_app();
        app.state.current_view = View::Submitted;
        app.state.last_accepted = Some(LoginCredentials {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        });

        let screen = render(&app);
        assert!(screen.contains("Login accepted"));
        assert!(screen.contains("Login accepted for test@example.com"));
        assert!(!screen.contains("password123"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = new_app();
        app.push_error("disk full");

        let screen = render(&app);
        assert!(screen.contains("disk full"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_status_message_in_status_bar() {
        let mut app = new_app();
        app.state.status_message = Some("Please fix the highlighted fields".to_string());

        let screen = render(&app);
        assert!(screen.contains("Please fix the highlighted fields"));
    }
}
