//! Lookup keys for per-application webhook settings.

/// Application id used when a request does not name one.
pub const DEFAULT_APP_ID: &str = "default-app-id";

/// Resolve the effective application id for a request.
///
/// An absent or empty id falls back to [`DEFAULT_APP_ID`].
pub fn resolve_app_id(raw: Option<&str>) -> String {
    match raw {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => DEFAULT_APP_ID.to_string(),
    }
}

/// Settings-store path holding the Teams webhook document for an application.
pub fn webhook_settings_path(app_id: &str) -> String {
    format!("artifacts/{app_id}/public/data/settings/teams")
}
