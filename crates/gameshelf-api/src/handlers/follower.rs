//! Follower handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::follower::Follower;

use crate::dto::request::FollowRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/followers/follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Follower>>)> {
    let follower = state.follower_service.follow(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(follower))))
}

/// DELETE /api/v1/followers/unfollow
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> ApiResult<StatusCode> {
    state.follower_service.unfollow(&auth, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/followers/{user_id}
pub async fn followers_of(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.follower_service.followers_of(user_id).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/v1/followers/following/{follower_id}
pub async fn following_of(
    State(state): State<AppState>,
    ApiPath(follower_id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.follower_service.following_of(follower_id).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}
