//! Integration tests for backlogs and followers.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_backlog_lifecycle() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let felipe = app.user("felipe").await;
    let game_id = app.game("Tunic", &gaby.access_token).await;
    let body = json!({ "user_id": gaby.id, "game_id": game_id });

    let response = app
        .request("POST", "/api/v1/user_backlogs", Some(body.clone()), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("POST", "/api/v1/user_backlogs", Some(body.clone()), Some(&gaby.access_token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.id();

    let response = app
        .request("POST", "/api/v1/user_backlogs", Some(body), Some(&gaby.access_token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "GET",
            &format!("/api/v1/user_backlogs/user/{}/game/{game_id}", gaby.id),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.id(), id);

    let response = app
        .request("GET", &format!("/api/v1/user_backlogs/user/{}", gaby.id), None, None)
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 1);

    let path = format!("/api/v1/user_backlogs/{id}");
    let response = app.request("DELETE", &path, None, Some(&felipe.access_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = app.request("DELETE", &path, None, Some(&gaby.access_token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_follow_lifecycle() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let felipe = app.user("felipe").await;
    let body = json!({ "user_id": gaby.id, "follower_id": felipe.id });

    // Only the follower may create the relation.
    let response = app
        .request("POST", "/api/v1/followers/follow", Some(body.clone()), Some(&gaby.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("POST", "/api/v1/followers/follow", Some(body.clone()), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["follower_id"], felipe.id);

    let response = app
        .request("POST", "/api/v1/followers/follow", Some(body.clone()), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request("GET", &format!("/api/v1/followers/{}", gaby.id), None, None)
        .await;
    assert_eq!(response.data()[0]["username"], "felipe");
    assert!(response.data()[0].get("password_hash").is_none());

    let response = app
        .request("GET", &format!("/api/v1/followers/following/{}", felipe.id), None, None)
        .await;
    assert_eq!(response.data()[0]["username"], "gaby");

    let response = app
        .request("DELETE", "/api/v1/followers/unfollow", Some(body.clone()), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = app
        .request("DELETE", "/api/v1/followers/unfollow", Some(body), Some(&felipe.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_follow_edge_cases() {
    let app = TestApp::new();
    let felipe = app.user("felipe").await;

    let response = app
        .request(
            "POST",
            "/api/v1/followers/follow",
            Some(json!({ "user_id": felipe.id, "follower_id": felipe.id })),
            Some(&felipe.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/v1/followers/follow",
            Some(json!({ "user_id": 4242, "follower_id": felipe.id })),
            Some(&felipe.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
