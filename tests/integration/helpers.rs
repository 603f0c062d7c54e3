//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use gameshelf_api::{AppState, build_app};
use gameshelf_core::config::{AppConfig, DatabaseBackend};
use gameshelf_database::Database;

pub const PASSWORD: &str = "correct horse battery";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when empty.
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `id` inside `data`.
    pub fn id(&self) -> i64 {
        self.data()["id"].as_i64().expect("response has no data.id")
    }
}

/// A registered user with a logged-in session.
pub struct TestUser {
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let router = build_app(AppState::new(config.clone(), Database::memory()));
        Self { router, config }
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let body = match body {
            Some(b) => Body::from(serde_json::to_vec(&b).expect("Failed to serialize body")),
            None => Body::empty(),
        };
        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, username: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/users",
                Some(json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": PASSWORD,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Log in and return the token pair body
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Register and log in
    pub async fn user(&self, username: &str) -> TestUser {
        let id = self.register(username).await;
        let response = self.login(username, PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK);
        TestUser {
            id,
            access_token: token(&response, "access_token"),
            refresh_token: token(&response, "refresh_token"),
        }
    }

    /// Create a lookup row and return its id
    pub async fn lookup(&self, collection: &str, name: &str, token: &str) -> i64 {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/{collection}"),
                Some(json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create a game with fresh genre, developer and publisher rows
    pub async fn game(&self, title: &str, token: &str) -> i64 {
        let genre_id = self.lookup("genres", &format!("{title} genre"), token).await;
        let developer_id = self
            .lookup("developers", &format!("{title} studio"), token)
            .await;
        let publisher_id = self
            .lookup("publishers", &format!("{title} publishing"), token)
            .await;

        let response = self
            .request(
                "POST",
                "/api/v1/games",
                Some(json!({
                    "title": title,
                    "description": "A game",
                    "release_date": "2020-01-01",
                    "genre_id": genre_id,
                    "developer_id": developer_id,
                    "publisher_id": publisher_id,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }
}

fn token(response: &TestResponse, field: &str) -> String {
    response.data()[field]
        .as_str()
        .expect("token missing")
        .to_string()
}
