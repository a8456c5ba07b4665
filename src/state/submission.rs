//! Submission controller
//!
//! Drives one submit from validation through the mail call to the status
//! label, and reverts `Sent`/`Failed` back to `Idle` after [`RESET_DELAY`].
//!
//! Mailer calls and reversion timers run as spawned tasks and report back as
//! [`SubmissionEvent`]s on a channel owned by the controller. Each accepted
//! submit opens a new cycle; events tagged with an older cycle are dropped.

use crate::mailer::{MailerError, MailerReceipt, MailerTrait};
use crate::state::forms::ContactForm;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// How long `Sent`/`Failed` stay on the button before reverting
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Status of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Inputs to the status state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// A submit passed validation
    SubmitAccepted,
    MailerSucceeded,
    MailerFailed,
    ResetElapsed,
}

impl SubmissionStatus {
    /// Button label for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Failed => "Failed to Send!",
        }
    }

    /// Pure transition function. Events that do not apply leave the status unchanged.
    pub fn next(self, event: StatusEvent) -> Self {
        match (self, event) {
            (Self::Idle | Self::Sent | Self::Failed, StatusEvent::SubmitAccepted) => Self::Sending,
            (Self::Sending, StatusEvent::MailerSucceeded) => Self::Sent,
            (Self::Sending, StatusEvent::MailerFailed) => Self::Failed,
            (Self::Sent | Self::Failed, StatusEvent::ResetElapsed) => Self::Idle,
            (status, _) => status,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }
}

/// Completion reported by a spawned task
#[derive(Debug)]
pub enum SubmissionEvent {
    MailerFinished {
        cycle: Uuid,
        outcome: Result<MailerReceipt, MailerError>,
    },
    ResetElapsed {
        cycle: Uuid,
    },
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors were recorded on the form
    Invalid,
    /// A mail call is now in flight
    Started(Uuid),
    /// A mail call was already in flight
    Busy,
}

/// Owns the status, the current cycle and the pending reversion timer
pub struct SubmissionController {
    mailer: Arc<dyn MailerTrait>,
    status: SubmissionStatus,
    cycle: Option<Uuid>,
    reset_timer: Option<AbortHandle>,
    reset_delay: Duration,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
}

impl SubmissionController {
    pub fn new(mailer: Arc<dyn MailerTrait>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            mailer,
            status: SubmissionStatus::Idle,
            cycle: None,
            reset_timer: None,
            reset_delay: RESET_DELAY,
            events_tx,
            events_rx,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Validate the form and, if it passes, start a mail call
    pub fn submit(&mut self, form: &mut ContactForm) -> SubmitOutcome {
        if self.status == SubmissionStatus::Sending {
            tracing::debug!(cycle = ?self.cycle, "submit ignored, message already sending");
            return SubmitOutcome::Busy;
        }

        if !form.validate() {
            tracing::debug!(errors = form.errors.len(), "contact form failed validation");
            return SubmitOutcome::Invalid;
        }

        self.cancel_reset();

        let cycle = Uuid::new_v4();
        self.cycle = Some(cycle);
        self.status = self.status.next(StatusEvent::SubmitAccepted);

        let mailer = Arc::clone(&self.mailer);
        let message = form.to_message();
        let tx = self.events_tx.clone();
        tracing::info!(%cycle, "sending contact message");
        tokio::spawn(async move {
            let outcome = mailer.send(&message).await;
            // Receiver only disappears when the form is torn down
            let _ = tx.send(SubmissionEvent::MailerFinished { cycle, outcome });
        });

        SubmitOutcome::Started(cycle)
    }

    /// Apply one event from a spawned task
    pub fn apply(&mut self, event: SubmissionEvent, form: &mut ContactForm) {
        match event {
            SubmissionEvent::MailerFinished { cycle, outcome } => {
                if !self.is_current(cycle) || self.status != SubmissionStatus::Sending {
                    tracing::debug!(%cycle, "dropping stale mailer result");
                    return;
                }
                match outcome {
                    Ok(receipt) => {
                        tracing::info!(%cycle, status = receipt.status, text = %receipt.text, "message sent");
                        self.status = self.status.next(StatusEvent::MailerSucceeded);
                        form.clear_values();
                    }
                    Err(err) => {
                        tracing::warn!(%cycle, error = %err, "failed to send message");
                        self.status = self.status.next(StatusEvent::MailerFailed);
                    }
                }
                self.schedule_reset(cycle);
            }
            SubmissionEvent::ResetElapsed { cycle } => {
                if !self.is_current(cycle) || !self.status.is_settled() {
                    tracing::debug!(%cycle, "dropping stale status reset");
                    return;
                }
                self.reset_timer = None;
                self.status = self.status.next(StatusEvent::ResetElapsed);
            }
        }
    }

    /// Apply every event already queued. Returns how many were applied.
    pub fn poll_events(&mut self, form: &mut ContactForm) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event, form);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event from a spawned task
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.recv().await
    }

    #[cfg(test)]
    pub fn has_pending_reset(&self) -> bool {
        self.reset_timer.is_some()
    }

    fn is_current(&self, cycle: Uuid) -> bool {
        self.cycle == Some(cycle)
    }

    fn schedule_reset(&mut self, cycle: Uuid) {
        self.cancel_reset();
        let deadline = Instant::now() + self.reset_delay;
        let tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(SubmissionEvent::ResetElapsed { cycle });
        });
        self.reset_timer = Some(handle.abort_handle());
    }

    fn cancel_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
