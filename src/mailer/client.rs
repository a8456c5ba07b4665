//! EmailJS REST client
//!
//! Sends a contact message through the EmailJS `/api/v1.0/email/send`
//! endpoint using the service/template/public-key triple from config.

use super::{ContactMessage, MailerError, MailerReceipt, MailerTrait};
use crate::config::MailerConfig;
use async_trait::async_trait;
use serde::Serialize;

/// Request body for the send endpoint
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactMessage,
}

/// Client for the EmailJS API
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: MailerConfig,
}

impl EmailJsClient {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_client(client: reqwest::Client, config: MailerConfig) -> Self {
        Self { client, config }
    }

    pub(crate) fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.api_url.trim_end_matches('/')
        )
    }

    pub(crate) fn build_request<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: message,
        }
    }
}

#[async_trait]
impl MailerTrait for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<MailerReceipt, MailerError> {
        let url = self.endpoint();
        tracing::debug!(%url, template = %self.config.template_id, "posting contact message");

        let response = self
            .client
            .post(&url)
            .json(&self.build_request(message))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(MailerReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(MailerError::Rejected {
                status: status.as_u16(),
                text,
            })
        }
    }
}
