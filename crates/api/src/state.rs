use std::sync::Arc;

use notigate_core::allowlist::AllowList;
use notigate_core::identity::IdentityVerifier;
use notigate_core::sink::WebhookSink;
use notigate_core::store::ConfigStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`). The collaborators are
/// trait objects so tests can substitute fakes for the token verifier, the
/// settings store, and the webhook sink.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Emails authorized to send notifications. Never mutated after startup.
    pub allow_list: Arc<AllowList>,
    /// Identity-token verifier.
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Webhook settings store.
    pub store: Arc<dyn ConfigStore>,
    /// Outbound webhook sink.
    pub sink: Arc<dyn WebhookSink>,
}
