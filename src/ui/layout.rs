//! Layout components (header, columns, status bar)

use crate::app::App;
use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions
pub struct ScreenLayout {
    pub header: Rect,
    pub connect: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, two columns and the status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Connect panel
            Constraint::Percentage(60), // Form
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        connect: columns[0],
        form: columns[1],
        status_bar: rows[2],
    }
}

/// Draw the section heading
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Get In Touch",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.submission.status();
    let status_color = match status {
        SubmissionStatus::Idle => Color::Gray,
        SubmissionStatus::Sending => Color::Yellow,
        SubmissionStatus::Sent => Color::Green,
        SubmissionStatus::Failed => Color::Red,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.button_label()),
        Style::default().fg(status_color),
    )];

    let error_count = app.state.form.errors.len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{error_count} field(s) need attention"),
            Style::default().fg(Color::LightRed),
        ));
    }

    if let Some(sent_at) = app.state.last_sent_at {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Last sent {}", sent_at.format("%H:%M")),
            Style::default().fg(Color::Green),
        ));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status_widget =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_widget, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
