//! User backlog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::backlog::BacklogEntry;

use crate::dto::request::CreateBacklogRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/user_backlogs
pub async fn list_backlogs(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<BacklogEntry>>>> {
    Ok(Json(ApiResponse::ok(state.backlog_service.list().await?)))
}

/// GET /api/v1/user_backlogs/{id}
pub async fn get_backlog_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<BacklogEntry>>> {
    Ok(Json(ApiResponse::ok(state.backlog_service.get(id).await?)))
}

/// GET /api/v1/user_backlogs/user/{user_id}
pub async fn list_user_backlog(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Vec<BacklogEntry>>>> {
    Ok(Json(ApiResponse::ok(
        state.backlog_service.list_by_user(user_id).await?,
    )))
}

/// GET /api/v1/user_backlogs/user/{user_id}/game/{game_id}
pub async fn get_user_game_entry(
    State(state): State<AppState>,
    ApiPath((user_id, game_id)): ApiPath<(i64, i64)>,
) -> ApiResult<Json<ApiResponse<BacklogEntry>>> {
    let entry = state.backlog_service.get_entry(user_id, game_id).await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// POST /api/v1/user_backlogs
pub async fn add_to_backlog(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBacklogRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BacklogEntry>>)> {
    let entry = state.backlog_service.add(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}

/// DELETE /api/v1/user_backlogs/{id}
pub async fn remove_from_backlog(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.backlog_service.remove(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
