//! HTTP client for the settings document store.
//!
//! Documents are addressed by slash-separated paths relative to the store's
//! base URL. A 404 means the document does not exist; any other non-2xx
//! status or transport failure is reported as [`StoreError::Unavailable`].

use std::time::Duration;

use async_trait::async_trait;

use notigate_core::store::{ConfigStore, SettingsDoc, StoreError};

/// [`ConfigStore`] backed by an HTTP document store.
pub struct HttpSettingsStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSettingsStore {
    /// Create a store client with a bounded per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl ConfigStore for HttpSettingsStore {
    async fn fetch(&self, path: &str) -> Result<Option<SettingsDoc>, StoreError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "settings store returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let doc = response
            .json::<SettingsDoc>()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Some(doc))
    }
}
