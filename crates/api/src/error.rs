use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use notigate_core::error::GatewayError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`GatewayError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the gateway's JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `notigate_core`.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The request used a method other than POST.
    #[error("method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed. Use POST.".to_string(),
                None,
            ),

            ApiError::Gateway(err) => match err {
                GatewayError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg, None),
                GatewayError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
                GatewayError::InvalidPayload(msg) => (StatusCode::BAD_REQUEST, msg, None),
                GatewayError::ConfigMissing(msg) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
                }
                GatewayError::Upstream { status, detail } => {
                    tracing::error!(status = ?status, detail = %detail, "webhook relay failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to send Teams notification.".to_string(),
                        Some(detail),
                    )
                }
                GatewayError::Internal(msg) => {
                    tracing::error!(error = %msg, "unexpected internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error.".to_string(),
                        Some(msg),
                    )
                }
            },
        };

        let mut body = json!({ "error": message });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}
