//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, Utc};
use tower::ServiceExt;

use gatepass_core::config::AppConfig;
use gatepass_core::types::UserId;
use gatepass_database::Store;
use gatepass_entity::pass::{CreatePass, Pass};
use gatepass_entity::user::{CreateUser, User};
use gatepass_service::{LogService, PassService, ReportService, UserService};

/// Test application context backed by the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store handle for seeding and direct verification
    pub store: Store,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::default();
        let store = Store::in_memory();

        let user_service = Arc::new(UserService::new(
            store.users(),
            store.passes(),
            store.logs(),
        ));
        let pass_service = Arc::new(PassService::new(
            store.users(),
            store.passes(),
            store.logs(),
        ));
        let log_service = Arc::new(LogService::new(
            store.users(),
            store.passes(),
            store.logs(),
        ));
        let report_service = Arc::new(ReportService::new(
            store.users(),
            store.passes(),
            store.logs(),
        ));

        let state = gatepass_api::AppState {
            config: Arc::new(config),
            store: store.clone(),
            user_service,
            pass_service,
            log_service,
            report_service,
        };

        Self {
            router: gatepass_api::build_router(state),
            store,
        }
    }

    /// Seed a user directly through the store
    pub async fn seed_user(&self, name: &str, email: &str) -> User {
        self.store
            .users()
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await
            .expect("Failed to seed user")
    }

    /// Seed a pass directly through the store
    pub async fn seed_pass(
        &self,
        user_id: UserId,
        kind: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Pass {
        self.store
            .passes()
            .create(&CreatePass {
                user_id,
                kind: kind.to_string(),
                start_date: start,
                end_date: end,
            })
            .await
            .expect("Failed to seed pass")
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a POST request with an urlencoded form body
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body = String::from_utf8(body_bytes.to_vec()).expect("Body is not UTF-8");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response captured from the test router
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body decoded as text
    pub body: String,
}

impl TestResponse {
    /// `Location` header for redirect assertions
    pub fn location(&self) -> &str {
        self.headers
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
