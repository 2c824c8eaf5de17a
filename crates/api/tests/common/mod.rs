//! Shared fixtures for integration tests: fake collaborators, an app
//! builder that mirrors the production wiring, and request/response helpers.
//!
//! The fakes record every interaction so tests can assert that early
//! failures never reach the settings store or the webhook sink.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

use notigate_api::auth::jwt::{JwtConfig, TokenClaims};
use notigate_api::config::ServerConfig;
use notigate_api::router::build_app_router;
use notigate_api::state::AppState;
use notigate_core::allowlist::AllowList;
use notigate_core::card::CardMessage;
use notigate_core::identity::{Claims, IdentityError, IdentityVerifier};
use notigate_core::sink::{SinkError, WebhookSink};
use notigate_core::store::{ConfigStore, SettingsDoc, StoreError};

/// Secret shared by minted test tokens and the test config.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Webhook URL returned by the default store document.
pub const TEST_WEBHOOK_URL: &str = "https://hooks.example/abc";

// ---------------------------------------------------------------------------
// Fake collaborators
// ---------------------------------------------------------------------------

/// Verifier that returns a fixed result and counts invocations.
pub struct StaticVerifier {
    pub result: Result<Claims, String>,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, _token: &str) -> Result<Claims, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(IdentityError)
    }
}

/// Store that returns a fixed document and records the requested paths.
pub struct StaticStore {
    pub doc: Result<Option<SettingsDoc>, String>,
    pub paths: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ConfigStore for StaticStore {
    async fn fetch(&self, path: &str) -> Result<Option<SettingsDoc>, StoreError> {
        self.paths.lock().unwrap().push(path.to_string());
        self.doc.clone().map_err(StoreError::Unavailable)
    }
}

/// Sink that records deliveries and answers with a fixed response.
pub struct RecordingSink {
    pub response: Result<(), (u16, String)>,
    pub deliveries: Arc<Mutex<Vec<(String, CardMessage)>>>,
}

#[async_trait]
impl WebhookSink for RecordingSink {
    async fn deliver(&self, url: &str, card: &CardMessage) -> Result<(), SinkError> {
        self.deliveries
            .lock()
            .unwrap()
            .push((url.to_string(), card.clone()));
        self.response
            .clone()
            .map_err(|(status, body)| SinkError::Rejected { status, body })
    }
}

// ---------------------------------------------------------------------------
// App builder
// ---------------------------------------------------------------------------

/// The app under test plus handles into its recording fakes.
pub struct TestApp {
    pub app: Router,
    pub verifier_calls: Arc<AtomicUsize>,
    pub store_paths: Arc<Mutex<Vec<String>>>,
    pub deliveries: Arc<Mutex<Vec<(String, CardMessage)>>>,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        upstream_timeout_secs: 10,
        allowed_emails: vec![
            "user1@example.com".to_string(),
            "user2@example.com".to_string(),
        ],
        settings_store_url: "http://settings.invalid".to_string(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the app with an explicit verifier, mirroring the `main.rs` wiring
/// through [`build_app_router`] so tests exercise the production middleware
/// stack.
pub fn build_test_app_with_verifier(
    verifier: Arc<dyn IdentityVerifier>,
    doc: Result<Option<SettingsDoc>, String>,
    sink_response: Result<(), (u16, String)>,
) -> TestApp {
    let config = test_config();
    let store_paths = Arc::new(Mutex::new(Vec::new()));
    let deliveries = Arc::new(Mutex::new(Vec::new()));

    let state = AppState {
        allow_list: Arc::new(AllowList::new(config.allowed_emails.iter().cloned())),
        verifier,
        store: Arc::new(StaticStore {
            doc,
            paths: Arc::clone(&store_paths),
        }),
        sink: Arc::new(RecordingSink {
            response: sink_response,
            deliveries: Arc::clone(&deliveries),
        }),
        config: Arc::new(config.clone()),
    };

    TestApp {
        app: build_app_router(state, &config),
        verifier_calls: Arc::new(AtomicUsize::new(0)),
        store_paths,
        deliveries,
    }
}

/// Build the app with fixed collaborator outcomes.
pub fn build_test_app(
    verifier: Result<Claims, String>,
    doc: Result<Option<SettingsDoc>, String>,
    sink_response: Result<(), (u16, String)>,
) -> TestApp {
    let verifier_calls = Arc::new(AtomicUsize::new(0));
    let static_verifier = Arc::new(StaticVerifier {
        result: verifier,
        calls: Arc::clone(&verifier_calls),
    });

    let mut test_app = build_test_app_with_verifier(static_verifier, doc, sink_response);
    test_app.verifier_calls = verifier_calls;
    test_app
}

/// An app whose collaborators all succeed for `user1@example.com`.
pub fn default_test_app() -> TestApp {
    build_test_app(
        Ok(verified_claims("user1@example.com")),
        Ok(doc_with_url(TEST_WEBHOOK_URL)),
        Ok(()),
    )
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn verified_claims(email: &str) -> Claims {
    Claims {
        email: email.to_string(),
        email_verified: true,
    }
}

pub fn doc_with_url(url: &str) -> Option<SettingsDoc> {
    Some(SettingsDoc {
        url: Some(url.to_string()),
    })
}

/// Mint an HS256 token the production `JwtVerifier` accepts.
pub fn mint_token(secret: &str, email: &str, email_verified: bool) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = TokenClaims {
        email: email.to_string(),
        email_verified,
        exp: now + 600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encoding should succeed")
}

// ---------------------------------------------------------------------------
// Request / response helpers
// ---------------------------------------------------------------------------

/// Build a `POST /notify` request with an optional `Authorization` header.
pub fn notify_request(auth: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/notify")
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an arbitrary request against the app.
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
