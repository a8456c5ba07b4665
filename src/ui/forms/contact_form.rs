//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::forms::Form;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a single-line field: box plus error line
const FIELD_HEIGHT: u16 = 4;

/// Draw the five fields, the submit button and the key hints
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // First / last name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let names = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let form = &app.state.form;
    let areas = [names[0], names[1], chunks[1], chunks[2], chunks[3]];
    for (index, field_area) in areas.into_iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                field_area,
                field,
                form.errors.get(field.name),
                form.active_field_index == index,
            );
        }
    }

    render_submit_button(
        frame,
        chunks[4],
        app.submission.status(),
        app.is_submit_focused(),
    );

    let help_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::SEND_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": send  "),
        Span::styled(
            crate::platform::COPY_EMAIL_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": copy email"),
    ];
    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}
