//! HS256 identity-token validation.
//!
//! The gateway only *verifies* tokens; issuing them is the identity
//! provider's job. Tokens are HS256-signed JWTs whose claims carry the
//! sender's email and verification flag.

use async_trait::async_trait;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use notigate_core::identity::{Claims, IdentityError, IdentityVerifier};

/// JWT claims expected in every identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// The sender's email address.
    pub email: String,
    /// Whether the identity provider has verified the email. Absent means
    /// unverified.
    #[serde(default)]
    pub email_verified: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required | Default |
    /// |--------------|----------|---------|
    /// | `JWT_SECRET` | **yes**  | --      |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self { secret }
    }
}

/// Validate and decode an identity token, returning the embedded [`TokenClaims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// [`IdentityVerifier`] backed by HS256 JWT validation.
pub struct JwtVerifier {
    config: JwtConfig,
}

impl JwtVerifier {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, IdentityError> {
        let claims =
            validate_token(token, &self.config).map_err(|e| IdentityError(e.to_string()))?;

        Ok(Claims {
            email: claims.email,
            email_verified: claims.email_verified,
        })
    }
}
