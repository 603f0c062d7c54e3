//! Auth handlers: login, refresh, logout, me.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, RefreshResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let pair = state.auth_service.login(&req.username, &req.password).await?;
    Ok(Json(ApiResponse::ok(pair.into())))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<RefreshResponse>>> {
    let token = state.auth_service.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(token.into())))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<MessageResponse>> {
    state.auth_service.logout(&auth);
    Json(ApiResponse::ok(MessageResponse::new("Logged out successfully")))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
