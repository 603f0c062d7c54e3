//! Integration tests for user accounts.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_register_hides_password_hash() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "username": "gaby",
                "email": "gaby@example.com",
                "password": PASSWORD,
                "bio": "Speedrunner",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["bio"], "Speedrunner");
    assert!(response.data().get("password").is_none());
    assert!(response.data().get("password_hash").is_none());

    let listed = app.request("GET", "/api/v1/users", None, None).await;
    assert_eq!(listed.data().as_array().unwrap().len(), 1);
    assert!(listed.data()[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_and_username() {
    let app = TestApp::new();
    app.register("gaby").await;

    let same_email = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "username": "other",
                "email": "gaby@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(same_email.status, StatusCode::CONFLICT);

    let same_username = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "username": "gaby",
                "email": "other@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(same_username.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();

    let bad_email = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({ "username": "gaby", "email": "nope", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert!(bad_email.body["details"]["email"].is_array());

    let short_password = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({ "username": "gaby", "email": "g@example.com", "password": "short" })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);

    let missing_field = app
        .request("POST", "/api/v1/users", Some(json!({ "username": "gaby" })), None)
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_field.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_users_edit_only_themselves() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let felipe = app.user("felipe").await;
    let path = format!("/api/v1/users/{}", gaby.id);

    let response = app
        .request("PATCH", &path, Some(json!({ "bio": "hacked" })), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("DELETE", &path, None, Some(&felipe.access_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("PATCH", &path, Some(json!({ "bio": "Updated" })), Some(&gaby.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["bio"], "Updated");
    assert_eq!(response.data()["username"], "gaby");

    let response = app.request("PATCH", &path, Some(json!({ "bio": "x" })), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let path = format!("/api/v1/users/{}", gaby.id);

    let response = app.request("DELETE", &path, None, Some(&gaby.access_token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, serde_json::Value::Null);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    // The token outlives the account, but the account is gone.
    let response = app.request("DELETE", &path, None, Some(&gaby.access_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_path_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/users/abc", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let path = format!("/api/v1/users/{}/password", gaby.id);

    let mismatched = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "old_password": PASSWORD,
                "new_password": "brand new secret",
                "confirm_password": "different secret",
            })),
            Some(&gaby.access_token),
        )
        .await;
    assert_eq!(mismatched.status, StatusCode::BAD_REQUEST);

    let wrong_old = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "old_password": "wrong password",
                "new_password": "brand new secret",
                "confirm_password": "brand new secret",
            })),
            Some(&gaby.access_token),
        )
        .await;
    assert_eq!(wrong_old.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "old_password": PASSWORD,
                "new_password": "brand new secret",
                "confirm_password": "brand new secret",
            })),
            Some(&gaby.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(app.login("gaby", PASSWORD).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.login("gaby", "brand new secret").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_needs_fresh_token() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let refreshed = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": gaby.refresh_token })),
            None,
        )
        .await;
    let stale = refreshed.data()["access_token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}/password", gaby.id),
            Some(json!({
                "old_password": PASSWORD,
                "new_password": "brand new secret",
                "confirm_password": "brand new secret",
            })),
            Some(&stale),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
