//! Field rendering utilities for forms

use crate::state::forms::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its inline error line underneath.
///
/// `area` must be at least one row taller than the input box; the last row
/// is reserved for the error text.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = if error.is_some() && !is_active {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = field.as_text();
    let display_str = if value.is_empty() && !is_active {
        field.label()
    } else {
        value
    };
    let display_style = if value.is_empty() && !is_active {
        Style::default().fg(Color::DarkGray)
    } else {
        text_style
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), display_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, display_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(message) = error {
        let error_line =
            Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::LightRed));
        frame.render_widget(error_line, chunks[1]);
    }
}
