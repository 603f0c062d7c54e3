//! Game ↔ platform link handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::game::{Game, GamePlatform};
use gameshelf_entity::lookup::Platform;

use crate::dto::request::GamePlatformRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/game_platforms
pub async fn link(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<GamePlatformRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GamePlatform>>)> {
    let link = state.game_platform_service.link(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(link))))
}

/// DELETE /api/v1/game_platforms/games/{game_id}/platforms/{platform_id}
pub async fn unlink(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((game_id, platform_id)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .game_platform_service
        .unlink(&auth, GamePlatform { game_id, platform_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/game_platforms/games/{game_id}
pub async fn platforms_for_game(
    State(state): State<AppState>,
    ApiPath(game_id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Vec<Platform>>>> {
    Ok(Json(ApiResponse::ok(
        state.game_platform_service.platforms_for_game(game_id).await?,
    )))
}

/// GET /api/v1/game_platforms/platforms/{platform_id}
pub async fn games_for_platform(
    State(state): State<AppState>,
    ApiPath(platform_id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Vec<Game>>>> {
    Ok(Json(ApiResponse::ok(
        state.game_platform_service.games_for_platform(platform_id).await?,
    )))
}
