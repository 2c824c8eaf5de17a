//! Outbound delivery to Teams incoming webhooks.
//!
//! [`TeamsWebhook`] POSTs a JSON-encoded [`CardMessage`] to the resolved
//! webhook URL. There is no retry: a failed delivery fails the request.

use std::time::Duration;

use async_trait::async_trait;

use notigate_core::card::CardMessage;
use notigate_core::sink::{SinkError, WebhookSink};

/// [`WebhookSink`] that delivers MessageCards over HTTPS.
pub struct TeamsWebhook {
    client: reqwest::Client,
}

impl TeamsWebhook {
    /// Create a sink with a bounded per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self { client }
    }
}

#[async_trait]
impl WebhookSink for TeamsWebhook {
    async fn deliver(&self, url: &str, card: &CardMessage) -> Result<(), SinkError> {
        let response = self
            .client
            .post(url)
            .json(card)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
