//! Outbound webhook delivery contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::card::CardMessage;

/// Webhook delivery failure.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The endpoint answered with a non-2xx status. `body` is the response
    /// body text, surfaced to the caller as error detail.
    #[error("webhook returned HTTP {status}")]
    Rejected { status: u16, body: String },

    /// The request never produced a response (network, DNS, timeout).
    #[error("webhook request failed: {0}")]
    Transport(String),
}

/// Accepts a card for delivery to a webhook URL.
///
/// A single attempt per request; the gateway does not retry.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn deliver(&self, url: &str, card: &CardMessage) -> Result<(), SinkError>;
}
