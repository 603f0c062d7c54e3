//! Handlers shared by the five lookup tables.
//!
//! Each handler is generic over the row type; [`LookupRoute`] picks the
//! matching service out of [`AppState`].

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use gameshelf_entity::lookup::{Developer, GameStatus, Genre, LookupEntity, Platform, Publisher};
use gameshelf_service::LookupService;

use crate::dto::request::{LookupRequest, UpdateLookupRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// A lookup entity served over HTTP.
pub trait LookupRoute: LookupEntity {
    fn service(state: &AppState) -> &Arc<LookupService<Self>>;
}

macro_rules! lookup_route {
    ($ty:ty, $field:ident) => {
        impl LookupRoute for $ty {
            fn service(state: &AppState) -> &Arc<LookupService<Self>> {
                &state.$field
            }
        }
    };
}

lookup_route!(Genre, genre_service);
lookup_route!(Platform, platform_service);
lookup_route!(Publisher, publisher_service);
lookup_route!(Developer, developer_service);
lookup_route!(GameStatus, game_status_service);

/// GET /api/v1/{lookup}
pub async fn list<T: LookupRoute>(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<T>>>> {
    Ok(Json(ApiResponse::ok(T::service(&state).list().await?)))
}

/// GET /api/v1/{lookup}/{id}
pub async fn get<T: LookupRoute>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<ApiResponse<T>>> {
    Ok(Json(ApiResponse::ok(T::service(&state).get(id).await?)))
}

/// POST /api/v1/{lookup}
pub async fn create<T: LookupRoute>(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<LookupRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<T>>)> {
    let row = T::service(&state).create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row))))
}

/// PATCH /api/v1/{lookup}/{id}
pub async fn update<T: LookupRoute>(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateLookupRequest>,
) -> ApiResult<Json<ApiResponse<T>>> {
    let row = T::service(&state).update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(row)))
}

/// DELETE /api/v1/{lookup}/{id}
pub async fn delete<T: LookupRoute>(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    T::service(&state).delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
