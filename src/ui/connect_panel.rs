//! "Let's Connect" panel with contact details

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BLURB: &str = "I'm always interested in discussing new opportunities, innovative \
projects, and collaborations in AI/ML, full-stack development, and research.";

/// Draw the connect panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let profile = &app.state.profile;
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(Span::styled(
            "Let's Connect",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(BLURB, value_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mail      ", label_style),
            Span::styled(profile.email.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled("LinkedIn  ", label_style),
            Span::styled(profile.linkedin.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled("GitHub    ", label_style),
            Span::styled(profile.github.as_str(), value_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
