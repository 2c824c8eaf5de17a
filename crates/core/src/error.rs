use thiserror::Error;

/// Domain-level failure kinds for the notification gateway.
///
/// Variants carry the caller-facing message; the HTTP layer in
/// `notigate-api` maps each kind to its status code and JSON body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("configuration missing: {0}")]
    ConfigMissing(String),

    /// The webhook endpoint rejected the message or was unreachable.
    /// `status` is the HTTP status when one was received; `detail` is the
    /// response body (or transport error) surfaced to the caller.
    #[error("upstream webhook failure: {detail}")]
    Upstream {
        status: Option<u16>,
        detail: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}
