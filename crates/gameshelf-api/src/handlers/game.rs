//! Game handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::game::Game;

use crate::dto::request::{CreateGameRequest, TitleQuery, UpdateGameRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/games
pub async fn list_games(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Game>>>> {
    Ok(Json(ApiResponse::ok(state.game_service.list().await?)))
}

/// GET /api/v1/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Game>>> {
    Ok(Json(ApiResponse::ok(state.game_service.get(id).await?)))
}

/// GET /api/v1/games/title?title=
pub async fn get_game_by_title(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TitleQuery>,
) -> ApiResult<Json<ApiResponse<Game>>> {
    let game = state.game_service.find_by_title(&query.title).await?;
    Ok(Json(ApiResponse::ok(game)))
}

/// POST /api/v1/games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateGameRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Game>>)> {
    let game = state.game_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(game))))
}

/// PATCH /api/v1/games/{id}
pub async fn update_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateGameRequest>,
) -> ApiResult<Json<ApiResponse<Game>>> {
    let game = state.game_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(game)))
}

/// DELETE /api/v1/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.game_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
