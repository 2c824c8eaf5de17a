//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 identity-token validation and the production
//!   [`IdentityVerifier`](notigate_core::identity::IdentityVerifier) impl.

pub mod jwt;
