//! Transactional-email delivery
//!
//! [`MailerTrait`] is the seam the submission controller talks to;
//! [`EmailJsClient`] implements it against the EmailJS REST API.

mod client;
mod traits;

use serde::Serialize;

pub use client::EmailJsClient;
pub use traits::MailerTrait;

#[cfg(test)]
pub use traits::MockMailerTrait;

/// The five values handed to the mail template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    #[serde(rename = "user_firstname")]
    pub first_name: String,
    #[serde(rename = "user_lastname")]
    pub last_name: String,
    #[serde(rename = "user_email")]
    pub email: String,
    #[serde(rename = "user_phone")]
    pub phone: String,
    pub message: String,
}

/// Successful delivery as reported by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerReceipt {
    /// HTTP status code
    pub status: u16,
    /// Descriptive text from the response body
    pub text: String,
}

/// Errors returned by the mail service
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// HTTP transport failure
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Service answered with a non-success status
    #[error("mail service rejected the message with status {status}: {text}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Descriptive text from the response body
        text: String,
    },
}
