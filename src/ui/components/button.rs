//! Button component for TUI

use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, color: Color) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button; its text is the current status label
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    status: SubmissionStatus,
    is_selected: bool,
) {
    let color = match status {
        SubmissionStatus::Idle => Color::White,
        SubmissionStatus::Sending => Color::Yellow,
        SubmissionStatus::Sent => Color::Green,
        SubmissionStatus::Failed => Color::Red,
    };
    render_button(frame, area, status.label(), is_selected, color);
}
