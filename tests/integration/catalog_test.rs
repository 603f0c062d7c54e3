//! Integration tests for games, lookups, and platform links.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_game_crud() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let token = gaby.access_token.as_str();
    let id = app.game("Hades", token).await;
    let path = format!("/api/v1/games/{id}");

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "Hades");
    assert_eq!(response.data()["release_date"], "2020-01-01");

    let response = app
        .request("GET", "/api/v1/games/title?title=Hades", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.id(), id);

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "description": "Roguelike dungeon crawler" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["description"], "Roguelike dungeon crawler");
    assert_eq!(response.data()["title"], "Hades");

    let response = app.request("DELETE", &path, None, Some(token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("DELETE", &path, None, Some(token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let response = app
        .request("GET", "/api/v1/games/title?title=Hades", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_lookup_needs_title_param() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/games/title", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "Invalid query string");
    assert!(response.body["details"]["query"].is_array());
}

#[tokio::test]
async fn test_game_mutations_need_a_token() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/games", Some(json!({ "title": "Celeste" })), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("DELETE", "/api/v1/games/1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/v1/games", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data(), &json!([]));
}

#[tokio::test]
async fn test_duplicate_title_and_unknown_references() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let token = gaby.access_token.as_str();
    let id = app.game("Celeste", token).await;
    let existing = app.request("GET", &format!("/api/v1/games/{id}"), None, None).await;
    let game = existing.data();

    let response = app
        .request(
            "POST",
            "/api/v1/games",
            Some(json!({
                "title": "Celeste",
                "description": "Again",
                "release_date": "2018-01-25",
                "genre_id": game["genre_id"],
                "developer_id": game["developer_id"],
                "publisher_id": game["publisher_id"],
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "POST",
            "/api/v1/games",
            Some(json!({
                "title": "Celeste Classic",
                "description": "PICO-8 original",
                "release_date": "2015-08-01",
                "genre_id": 9999,
                "developer_id": game["developer_id"],
                "publisher_id": game["publisher_id"],
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_crud() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let token = gaby.access_token.as_str();

    for collection in ["genres", "platforms", "publishers", "developers", "game_statuses"] {
        let id = app.lookup(collection, "First", token).await;
        let path = format!("/api/v1/{collection}/{id}");

        let response = app
            .request(
                "POST",
                &format!("/api/v1/{collection}"),
                Some(json!({ "name": "First" })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CONFLICT, "{collection}");

        let response = app
            .request("PATCH", &path, Some(json!({ "name": "Renamed" })), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{collection}");
        assert_eq!(response.data()["name"], "Renamed");

        let response = app.request("GET", &format!("/api/v1/{collection}"), None, None).await;
        assert_eq!(response.data().as_array().unwrap().len(), 1, "{collection}");

        let response = app.request("DELETE", &path, None, Some(token)).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT, "{collection}");
        let response = app.request("GET", &path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{collection}");
    }
}

#[tokio::test]
async fn test_lookup_name_required() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;

    let response = app
        .request(
            "POST",
            "/api/v1/genres",
            Some(json!({ "name": "" })),
            Some(&gaby.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_referenced_lookup_cannot_be_deleted() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let token = gaby.access_token.as_str();
    let id = app.game("Hollow Knight", token).await;
    let game = app.request("GET", &format!("/api/v1/games/{id}"), None, None).await;
    let genre_id = game.data()["genre_id"].as_i64().unwrap();

    let response = app
        .request("DELETE", &format!("/api/v1/genres/{genre_id}"), None, Some(token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_game_platform_links() {
    let app = TestApp::new();
    let gaby = app.user("gaby").await;
    let token = gaby.access_token.as_str();
    let game_id = app.game("Stardew Valley", token).await;
    let pc = app.lookup("platforms", "PC", token).await;
    let switch = app.lookup("platforms", "Nintendo Switch", token).await;

    for platform_id in [pc, switch] {
        let response = app
            .request(
                "POST",
                "/api/v1/game_platforms",
                Some(json!({ "game_id": game_id, "platform_id": platform_id })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "POST",
            "/api/v1/game_platforms",
            Some(json!({ "game_id": game_id, "platform_id": pc })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request("GET", &format!("/api/v1/game_platforms/games/{game_id}"), None, None)
        .await;
    let names: Vec<_> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["PC", "Nintendo Switch"]);

    let response = app
        .request("GET", &format!("/api/v1/game_platforms/platforms/{pc}"), None, None)
        .await;
    assert_eq!(response.data()[0]["title"], "Stardew Valley");

    let unlink = format!("/api/v1/game_platforms/games/{game_id}/platforms/{pc}");
    let response = app.request("DELETE", &unlink, None, Some(token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = app.request("DELETE", &unlink, None, Some(token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
