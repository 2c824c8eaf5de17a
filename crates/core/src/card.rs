//! Notification payload validation and the Teams MessageCard wire format.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Theme color applied when the caller does not specify one (Teams blue,
/// hex without `#`).
pub const DEFAULT_THEME_COLOR: &str = "0078D4";

/// Fixed `@context` value for legacy MessageCard payloads.
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// Fixed `@type` value for legacy MessageCard payloads.
pub const CARD_TYPE: &str = "MessageCard";

/// A validated notification ready to be rendered as a card.
///
/// `title` and `text` are guaranteed non-empty. `color` is the theme color
/// as supplied by the caller, or [`DEFAULT_THEME_COLOR`] when absent -- an
/// explicitly empty string is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub text: String,
    pub color: String,
}

impl NotificationPayload {
    /// Validate the raw request fields into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidPayload`] when `title` or `text` is
    /// absent or empty.
    pub fn new(
        title: Option<String>,
        text: Option<String>,
        color: Option<String>,
    ) -> Result<Self, GatewayError> {
        let title = title.filter(|t| !t.is_empty());
        let text = text.filter(|t| !t.is_empty());

        match (title, text) {
            (Some(title), Some(text)) => Ok(Self {
                title,
                text,
                color: color.unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
            }),
            _ => Err(GatewayError::InvalidPayload(
                "Bad request. Missing required fields: title and text.".to_string(),
            )),
        }
    }
}

/// Wire object POSTed to the Teams incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMessage {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub title: String,
    pub text: String,
}

impl CardMessage {
    /// Build a card from a validated payload.
    pub fn from_payload(payload: &NotificationPayload) -> Self {
        Self {
            context: CARD_CONTEXT.to_string(),
            card_type: CARD_TYPE.to_string(),
            theme_color: payload.color.clone(),
            title: payload.title.clone(),
            text: payload.text.clone(),
        }
    }
}
