use notigate_core::allowlist::AllowList;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Network and timeout fields have defaults suitable for local development;
/// the allow-list, settings-store URL, and JWT secret must be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout in seconds for settings-store and webhook calls (default: `10`).
    pub upstream_timeout_secs: u64,
    /// Emails authorized to send notifications, parsed from the
    /// comma-separated `ALLOWED_EMAILS` env var.
    pub allowed_emails: Vec<String>,
    /// Base URL of the settings document store.
    pub settings_store_url: String,
    /// Identity-token validation configuration (secret).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Required | Default   |
    /// |-------------------------|----------|-----------|
    /// | `HOST`                  | no       | `0.0.0.0` |
    /// | `PORT`                  | no       | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS`  | no       | `30`      |
    /// | `UPSTREAM_TIMEOUT_SECS` | no       | `10`      |
    /// | `ALLOWED_EMAILS`        | **yes**  | --        |
    /// | `SETTINGS_STORE_URL`    | **yes**  | --        |
    /// | `JWT_SECRET`            | **yes**  | --        |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a numeric variable fails
    /// to parse, which is the desired behaviour -- misconfiguration should
    /// fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let allowed_emails: Vec<String> = std::env::var("ALLOWED_EMAILS")
            .expect("ALLOWED_EMAILS must be set in the environment")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        assert!(
            !allowed_emails.is_empty(),
            "ALLOWED_EMAILS must contain at least one address"
        );

        let settings_store_url = std::env::var("SETTINGS_STORE_URL")
            .expect("SETTINGS_STORE_URL must be set in the environment");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            upstream_timeout_secs,
            allowed_emails,
            settings_store_url,
            jwt,
        }
    }

    /// Build the sender allow-list from the configured emails.
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(self.allowed_emails.iter().cloned())
    }
}
