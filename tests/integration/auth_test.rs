//! Integration tests for the login, refresh, and token checks.

use http::StatusCode;
use serde_json::json;

use gameshelf_auth::jwt::JwtEncoder;
use gameshelf_core::config::AuthConfig;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("gaby").await;

    let response = app.login("gaby", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.data()["access_token"].is_string());
    assert!(response.data()["refresh_token"].is_string());
    assert_eq!(response.data()["token_type"], "Bearer");
}

#[tokio::test]
async fn test_login_failures_share_a_message() {
    let app = TestApp::new();
    app.register("gaby").await;

    let wrong_password = app.login("gaby", "not the password").await;
    let unknown_user = app.login("nobody", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["error"], "UNAUTHORIZED");
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
    assert!(wrong_password.body.get("data").is_none());
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["username"].is_array());
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&gaby.access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], gaby.id);
    assert_eq!(response.data()["username"], "gaby");
    assert!(response.data().get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let forged = JwtEncoder::new(&AuthConfig {
        jwt_secret: "someone-else".to_string(),
        ..app.config.auth.clone()
    })
    .generate_token_pair(gaby.id, "gaby")
    .unwrap();

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&forged.access_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_cannot_authorize_requests() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&gaby.refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_flow() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": gaby.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let access = response.data()["access_token"].as_str().unwrap().to_string();

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&access))
        .await;
    assert_eq!(me.status, StatusCode::OK);

    // An access token is not accepted as a refresh token.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": gaby.access_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let response = app
        .request("POST", "/api/v1/auth/logout", None, Some(&gaby.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["message"], "Logged out successfully");

    let response = app.request("POST", "/api/v1/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["backend"], "memory");
}
