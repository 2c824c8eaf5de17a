//! Identity verification contract.

use async_trait::async_trait;
use thiserror::Error;

/// Claims produced by a successful token verification.
///
/// Immutable; lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The sender's email address.
    pub email: String,
    /// Whether the identity provider has verified the email.
    pub email_verified: bool,
}

/// Token verification failure.
///
/// The reason is for server-side logs; callers collapse every verification
/// failure into a single unauthenticated response.
#[derive(Debug, Clone, Error)]
#[error("token verification failed: {0}")]
pub struct IdentityError(pub String);

/// Validates an opaque bearer token and returns the embedded claims.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, IdentityError>;
}
