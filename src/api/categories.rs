use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::auth::AdminClaims;
use crate::domain::CategoryInput;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Categories ordered by name"))
)]
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    match state.category_repo.find_all().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/categories",
    responses(
        (status = 201, description = "Category created"),
        (status = 400, description = "Missing or duplicate name")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<CategoryInput>,
) -> impl IntoResponse {
    match state.category_repo.create(payload).await {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category updated"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryInput>,
) -> impl IntoResponse {
    match state.category_repo.update(id, payload).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.category_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Category deleted" }))).into_response(),
        Err(e) => e.into_response(),
    }
}
