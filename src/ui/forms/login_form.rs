//! Login form rendering

use super::field_renderer::{draw_field, draw_messages};
use crate::app::App;
use crate::state::{FieldName, Form, QUIT_BUTTON, SIGN_IN_BUTTON};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the login box
pub const FORM_WIDTH: u16 = 52;
/// Height of the login box, including borders and margin
pub const FORM_HEIGHT: u16 = 18;

/// Rows reserved under each field for its messages
const MESSAGE_ROWS: u16 = 2;

/// Draw the login form centered in `area`
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login;
    let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(MESSAGE_ROWS),  // Email messages
            Constraint::Length(3),             // Password
            Constraint::Length(MESSAGE_ROWS),  // Password messages
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(form_area);

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    for (idx, name) in FieldName::ALL.iter().enumerate() {
        let messages = form.visible_messages(*name);
        let field_area = chunks[idx * 2];
        let message_area = chunks[idx * 2 + 1];

        draw_field(
            frame,
            field_area,
            form.field(*name),
            form.active_field() == idx,
            !messages.is_empty(),
        );
        draw_messages(frame, message_area, &messages);
    }

    draw_buttons(frame, chunks[4], app);

    let help = Paragraph::new(Line::from(Span::styled(
        "Tab to move between fields",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, chunks[5]);
}

/// Draw the Sign in / Quit row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login;
    let on_buttons = form.is_buttons_row_active();

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Sign in stays selectable when the form is invalid so a rejected
    // submit can reveal the errors.
    render_button(
        frame,
        button_chunks[0],
        "Sign in",
        on_buttons && form.selected_button() == SIGN_IN_BUTTON,
        form.form_validity(),
        Some(Color::Green),
    );

    render_button(
        frame,
        button_chunks[1],
        "Quit",
        on_buttons && form.selected_button() == QUIT_BUTTON,
        true,
        Some(Color::Gray),
    );
}
