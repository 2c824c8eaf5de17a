//! Bearer-token authentication extractor for the notify endpoint.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notigate_core::error::GatewayError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated, allow-listed sender extracted from the `Authorization`
/// header.
///
/// Use this as an extractor parameter in any handler that relays
/// notifications:
///
/// ```ignore
/// async fn my_handler(sender: AuthorizedSender) -> ApiResult<Json<()>> {
///     tracing::info!(email = %sender.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// A missing or malformed header and a failed verification both reject with
/// 401; a verified token whose email is unverified or not allow-listed
/// rejects with 403 and a security log line recording the attempted email.
#[derive(Debug, Clone)]
pub struct AuthorizedSender {
    /// The sender's verified email address.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthorizedSender {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                GatewayError::Unauthenticated(
                    "Unauthorized. Missing or invalid Authorization header.".into(),
                )
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            GatewayError::Unauthenticated(
                "Unauthorized. Missing or invalid Authorization header.".into(),
            )
        })?;

        let claims = state.verifier.verify(token).await.map_err(|e| {
            tracing::warn!(error = %e, "token verification failed");
            GatewayError::Unauthenticated("Unauthorized. Invalid identity token.".into())
        })?;

        if !state.allow_list.permits(&claims) {
            tracing::warn!(email = %claims.email, "unauthorized access attempt");
            return Err(
                GatewayError::Forbidden("Forbidden. User not in whitelist.".into()).into(),
            );
        }

        Ok(AuthorizedSender {
            email: claims.email,
        })
    }
}
