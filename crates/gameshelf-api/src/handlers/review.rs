//! User review handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::review::UserReview;

use crate::dto::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

type Reviews = Json<ApiResponse<Vec<UserReview>>>;

/// GET /api/v1/user_reviews
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Reviews> {
    Ok(Json(ApiResponse::ok(state.review_service.list().await?)))
}

/// GET /api/v1/user_reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<UserReview>>> {
    Ok(Json(ApiResponse::ok(state.review_service.get(id).await?)))
}

/// GET /api/v1/user_reviews/game/{game_id}
pub async fn list_by_game(
    State(state): State<AppState>,
    ApiPath(game_id): ApiPath<i64>,
) -> ApiResult<Reviews> {
    Ok(Json(ApiResponse::ok(
        state.review_service.list_by_game(game_id).await?,
    )))
}

/// GET /api/v1/user_reviews/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Reviews> {
    Ok(Json(ApiResponse::ok(
        state.review_service.list_by_user(user_id).await?,
    )))
}

/// POST /api/v1/user_reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserReview>>)> {
    let review = state.review_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// PATCH /api/v1/user_reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ApiResponse<UserReview>>> {
    let review = state.review_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(review)))
}

/// DELETE /api/v1/user_reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.review_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
