use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::auth::AdminClaims;
use crate::domain::BannerInput;
use crate::infrastructure::AppState;

// Homepage carousel, newest first
#[utoipa::path(
    get,
    path = "/api/banners",
    responses((status = 200, description = "Banners, newest first"))
)]
pub async fn list_banners(State(state): State<AppState>) -> impl IntoResponse {
    match state.banner_repo.find_all().await {
        Ok(banners) => (StatusCode::OK, Json(banners)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/banners",
    responses(
        (status = 201, description = "Banner created"),
        (status = 400, description = "Missing title or image")
    )
)]
pub async fn create_banner(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<BannerInput>,
) -> impl IntoResponse {
    match state.banner_repo.create(payload).await {
        Ok(banner) => (StatusCode::CREATED, Json(json!({ "id": banner.id }))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner updated"),
        (status = 404, description = "Banner not found")
    )
)]
pub async fn update_banner(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<BannerInput>,
) -> impl IntoResponse {
    match state.banner_repo.update(id, payload).await {
        Ok(banner) => (StatusCode::OK, Json(banner)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner deleted"),
        (status = 404, description = "Banner not found")
    )
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.banner_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Banner deleted" }))).into_response(),
        Err(e) => e.into_response(),
    }
}
