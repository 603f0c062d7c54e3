//! Integration tests for user reviews.

use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{TestApp, TestUser};

struct Fixture {
    app: TestApp,
    author: TestUser,
    game_id: i64,
    status_id: i64,
}

async fn fixture() -> Fixture {
    let app = TestApp::new();
    let author = app.user("gaby").await;
    let game_id = app.game("Outer Wilds", &author.access_token).await;
    let status_id = app
        .lookup("game_statuses", "Completed", &author.access_token)
        .await;
    Fixture {
        app,
        author,
        game_id,
        status_id,
    }
}

impl Fixture {
    fn review(&self, score: i64) -> Value {
        json!({
            "game_id": self.game_id,
            "user_id": self.author.id,
            "score": score,
            "status_id": self.status_id,
            "review": "Unforgettable",
        })
    }

    async fn create(&self, score: i64) -> crate::helpers::TestResponse {
        self.app
            .request(
                "POST",
                "/api/v1/user_reviews",
                Some(self.review(score)),
                Some(&self.author.access_token),
            )
            .await
    }
}

#[tokio::test]
async fn test_create_and_list_reviews() {
    let f = fixture().await;

    let response = f.create(10).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["score"], 10);
    assert_eq!(response.data()["mastered"], false);
    let id = response.id();

    for path in [
        "/api/v1/user_reviews".to_string(),
        format!("/api/v1/user_reviews/game/{}", f.game_id),
        format!("/api/v1/user_reviews/user/{}", f.author.id),
    ] {
        let response = f.app.request("GET", &path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.data()[0]["id"], id, "{path}");
    }

    let response = f
        .app
        .request("GET", "/api/v1/user_reviews/user/999", None, None)
        .await;
    assert_eq!(response.data(), &json!([]));
}

#[tokio::test]
async fn test_score_out_of_range() {
    let f = fixture().await;

    for score in [0, 11, -3] {
        let response = f.create(score).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "score {score}");
        assert!(response.body["details"]["score"].is_array());
    }
}

#[tokio::test]
async fn test_second_review_is_conflict() {
    let f = fixture().await;
    f.create(8).await;

    let response = f.create(9).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "User review already exists");
}

#[tokio::test]
async fn test_reviews_are_author_only() {
    let f = fixture().await;
    let other = f.app.user("felipe").await;

    let response = f
        .app
        .request(
            "POST",
            "/api/v1/user_reviews",
            Some(f.review(5)),
            Some(&other.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let id = f.create(7).await.id();
    let path = format!("/api/v1/user_reviews/{id}");

    let response = f
        .app
        .request("PATCH", &path, Some(json!({ "score": 1 })), Some(&other.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = f
        .app
        .request("DELETE", &path, None, Some(&other.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = f
        .app
        .request(
            "PATCH",
            &path,
            Some(json!({ "score": 9, "mastered": true })),
            Some(&f.author.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["score"], 9);
    assert_eq!(response.data()["mastered"], true);
    assert_eq!(response.data()["review"], "Unforgettable");

    let response = f
        .app
        .request("DELETE", &path, None, Some(&f.author.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = f.app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_game_removes_its_reviews() {
    let f = fixture().await;
    let id = f.create(6).await.id();

    let response = f
        .app
        .request(
            "DELETE",
            &format!("/api/v1/games/{}", f.game_id),
            None,
            Some(&f.author.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = f
        .app
        .request("GET", &format!("/api/v1/user_reviews/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
