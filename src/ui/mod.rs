//! UI module for rendering the TUI

mod components;
mod connect_panel;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    connect_panel::draw(frame, screen.connect, app);
    forms::draw_contact_form(frame, screen.form, app);
    layout::draw_status_bar(frame, screen.status_bar, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::MockMailerTrait;
    use crate::state::forms::{FieldName, Form, SUBMIT_ROW};
    use crate::state::Profile;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        let mut mock = MockMailerTrait::new();
        mock.expect_send().times(0);
        App::with_mailer(Arc::new(mock), Profile::default())
    }

    fn render(app: &App) -> Buffer {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_idle_label_and_placeholders() {
        let app = test_app();
        let text = buffer_text(&render(&app));
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("Let's Connect"));
        assert!(text.contains("Send Message"));
        for name in FieldName::ALL {
            assert!(text.contains(name.label()), "{name}");
        }
    }

    #[test]
    fn test_renders_inline_errors() {
        let mut app = test_app();
        app.state.form.set_value(FieldName::Email, "bad");
        app.state.form.validate();
        app.state.form.set_active_field(SUBMIT_ROW);

        let text = buffer_text(&render(&app));
        assert!(text.contains("First name is required"));
        assert!(text.contains("Email is invalid"));
        assert!(!text.contains("Email is required"));
    }

    #[test]
    fn test_renders_profile_details() {
        let app = test_app();
        let text = buffer_text(&render(&app));
        assert!(text.contains(&app.state.profile.email));
        assert!(text.contains(&app.state.profile.github));
    }
}
