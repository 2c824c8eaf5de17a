//! Handler for `POST /notify` -- the notification relay endpoint.
//!
//! Authentication and authorization happen in the [`AuthorizedSender`]
//! extractor before this handler runs. The handler validates the payload,
//! resolves the application's webhook settings, and delivers the card;
//! the first failing step terminates the request.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use notigate_core::card::{CardMessage, NotificationPayload};
use notigate_core::error::GatewayError;
use notigate_core::settings::{resolve_app_id, webhook_settings_path};
use notigate_core::sink::SinkError;

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthorizedSender;
use crate::state::AppState;

/// Request body for `POST /notify`.
///
/// `title` and `text` are required and must be non-empty. `color` is a hex
/// theme color without `#`. `appId` selects which application's webhook
/// settings to use.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "appId")]
    pub app_id: Option<String>,
}

/// Acknowledgment returned when the card was accepted by Teams.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /notify
///
/// Relay a notification from an authorized sender to the Teams webhook
/// configured for the request's application id.
pub async fn send_notification(
    sender: AuthorizedSender,
    State(state): State<AppState>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> ApiResult<Json<NotifyResponse>> {
    // A body that fails JSON extraction is indistinguishable, to the caller,
    // from one that omits the required fields.
    let Json(request) = payload.map_err(|_| {
        GatewayError::InvalidPayload(
            "Bad request. Missing required fields: title and text.".into(),
        )
    })?;

    let notification =
        NotificationPayload::new(request.title, request.text, request.color)?;

    let app_id = resolve_app_id(request.app_id.as_deref());
    let path = webhook_settings_path(&app_id);

    let doc = state.store.fetch(&path).await.map_err(|e| {
        tracing::error!(error = %e, path = %path, "settings store lookup failed");
        GatewayError::ConfigMissing("Teams webhook URL not configured.".into())
    })?;

    let Some(doc) = doc else {
        tracing::warn!(path = %path, "Teams webhook URL not configured");
        return Err(
            GatewayError::ConfigMissing("Teams webhook URL not configured.".into()).into(),
        );
    };

    let url = match doc.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            tracing::warn!(path = %path, "Teams webhook URL is empty");
            return Err(
                GatewayError::ConfigMissing("Teams webhook URL is empty.".into()).into(),
            );
        }
    };

    let card = CardMessage::from_payload(&notification);

    state.sink.deliver(&url, &card).await.map_err(|e| match e {
        SinkError::Rejected { status, body } => GatewayError::Upstream {
            status: Some(status),
            detail: body,
        },
        SinkError::Transport(detail) => GatewayError::Upstream {
            status: None,
            detail,
        },
    })?;

    tracing::info!(email = %sender.email, title = %notification.title, "notification sent");

    Ok(Json(NotifyResponse {
        success: true,
        message: "Notification sent to Teams successfully.",
    }))
}

/// Fallback for `/notify` requests that are not POST.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
