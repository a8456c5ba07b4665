//! Trait abstraction for the mail service to enable mocking in tests

use super::{ContactMessage, MailerError, MailerReceipt};
use async_trait::async_trait;

/// Trait for mail delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Deliver one contact message
    async fn send(&self, message: &ContactMessage) -> Result<MailerReceipt, MailerError>;
}
