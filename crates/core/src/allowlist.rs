//! The static sender allow-list.

use std::collections::HashSet;

use crate::identity::Claims;

/// Fixed set of emails authorized to send notifications.
///
/// Loaded once at startup from configuration and never mutated; concurrent
/// requests share it read-only.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    emails: HashSet<String>,
}

impl AllowList {
    pub fn new<I>(emails: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            emails: emails.into_iter().collect(),
        }
    }

    /// Parse a comma-separated list, trimming whitespace and dropping empty
    /// entries.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        )
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    /// Whether the claims belong to an authorized sender: the email must be
    /// verified by the identity provider and present in the list.
    pub fn permits(&self, claims: &Claims) -> bool {
        claims.email_verified && self.contains(&claims.email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
