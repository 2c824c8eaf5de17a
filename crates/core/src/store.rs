//! Webhook settings store contract.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Settings document for one application, as stored under
/// `artifacts/{appId}/public/data/settings/teams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsDoc {
    /// The Teams incoming-webhook URL. May be absent or empty on a
    /// half-configured application.
    pub url: Option<String>,
}

/// Settings store failure (transport error, timeout, unexpected status).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings store request failed: {0}")]
    Unavailable(String),
}

/// Document lookup by path.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the document at `path`, or `None` when no document exists.
    async fn fetch(&self, path: &str) -> Result<Option<SettingsDoc>, StoreError>;
}
