//! Application state and core logic

use crate::config::{MailerConfig, TuiConfig};
use crate::mailer::{EmailJsClient, MailerTrait};
use crate::state::forms::{FieldName, Form, SUBMIT_ROW};
use crate::state::{AppState, Profile, SubmissionController, SubmissionStatus, SubmitOutcome};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C of a double-tap quit
const QUIT_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Drives submits and owns the status label
    pub submission: SubmissionController,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App from the user's config and environment
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let mailer_config = MailerConfig::from_env(&config);
        if mailer_config.uses_placeholders() {
            tracing::warn!("EmailJS identifiers not configured, sends will be rejected");
        }

        let mailer: Arc<dyn MailerTrait> = Arc::new(EmailJsClient::new(mailer_config));
        Ok(Self::with_mailer(mailer, Profile::from(&config.profile)))
    }

    /// Create an App around any mailer
    pub fn with_mailer(mailer: Arc<dyn MailerTrait>, profile: Profile) -> Self {
        Self {
            state: AppState::new(profile),
            submission: SubmissionController::new(mailer),
            quit: false,
            copy_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current text of the submit button
    pub fn button_label(&self) -> &'static str {
        self.submission.label()
    }

    /// Apply finished mail calls and expired timers
    pub fn tick(&mut self) {
        let before = self.submission.status();
        if self.submission.poll_events(&mut self.state.form) == 0 {
            return;
        }
        let after = self.submission.status();
        if before != after && after == SubmissionStatus::Sent {
            self.state.last_sent_at = Some(Local::now());
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Double Ctrl+C quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < QUIT_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.copy_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_email()?;
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Up if !self.state.form.is_active_field_multiline() => {
                self.state.form.prev_field()
            }
            KeyCode::Down if !self.state.form.is_active_field_multiline() => {
                self.state.form.next_field()
            }
            KeyCode::Enter if self.state.form.is_submit_row_active() => {
                self.submit();
            }
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.state.form.input_char('\n')
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the form
    fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.submission.submit(&mut self.state.form);
        match outcome {
            SubmitOutcome::Invalid => {
                // Jump to the first field that needs fixing
                let first_error = self.state.form.errors.iter().next().map(|(field, _)| field);
                if let Some(index) = first_error
                    .and_then(|field| FieldName::ALL.iter().position(|name| *name == field))
                {
                    self.state.form.set_active_field(index);
                }
            }
            SubmitOutcome::Started(cycle) => {
                self.copy_message = None;
                tracing::debug!(%cycle, "submit accepted");
            }
            SubmitOutcome::Busy => {
                self.copy_message = Some("Still sending, please wait".to_string());
            }
        }
        outcome
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Copy the contact email to the clipboard
    fn copy_email(&mut self) -> Result<()> {
        let email = self.state.profile.email.clone();
        match self.copy_to_clipboard(&email) {
            Ok(()) => self.copy_message = Some(format!("Copied {email}")),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
        Ok(())
    }

    /// Whether the submit row has focus
    pub fn is_submit_focused(&self) -> bool {
        self.state.form.active_field() == SUBMIT_ROW
    }
}
