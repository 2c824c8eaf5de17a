//! Authentication middleware extractors.
//!
//! - [`auth::AuthorizedSender`] -- Extracts an authenticated, allow-listed
//!   sender from a Bearer token.

pub mod auth;
