//! Product API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use super::request_base_url;
use crate::auth::AdminClaims;
use crate::domain::{DomainError, ProductFilter, ProductInput};
use crate::infrastructure::AppState;
use crate::services::catalog::{self, SizeRequest};
use crate::services::media::resolve_document_urls;

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("search" = Option<String>, Query, description = "Substring of name or design code"),
        ("category" = Option<String>, Query, description = "Exact category name"),
        ("color" = Option<String>, Query, description = "Exact variant color name")
    ),
    responses(
        (status = 200, description = "Products with nested variants, newest first")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ProductFilter>,
) -> impl IntoResponse {
    match state.product_repo.find_all(filter).await {
        Ok(mut products) => {
            if let Some(base) = request_base_url(&state, &headers) {
                for doc in &mut products {
                    resolve_document_urls(doc, &base);
                }
            }
            (StatusCode::OK, Json(products)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with nested variants and media"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.product_repo.find_by_id(id).await {
        Ok(Some(mut doc)) => {
            if let Some(base) = request_base_url(&state, &headers) {
                resolve_document_urls(&mut doc, &base);
            }
            (StatusCode::OK, Json(doc)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Product not found" })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/products",
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Invalid product"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminClaims,
    Json(payload): Json<ProductInput>,
) -> impl IntoResponse {
    match state.product_repo.create(payload).await {
        Ok(id) => {
            tracing::info!("Product {} created by {} (user {})", id, admin.username, admin.sub);
            (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to create product: {}", e);
            e.into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product and its variants replaced"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<ProductInput>,
) -> impl IntoResponse {
    match state.product_repo.update(id, payload).await {
        Ok(()) => {
            tracing::info!("Product {} updated by {}", id, admin.username);
            (
                StatusCode::OK,
                Json(json!({ "message": "Product updated", "id": id })),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AdminClaims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.product_repo.delete(id).await {
        Ok(()) => {
            tracing::info!("Product {} deleted by {}", id, admin.username);
            (StatusCode::OK, Json(json!({ "message": "Product deleted" }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct CartLineRequest {
    pub color_name: String,
    #[serde(default)]
    pub sizes: Vec<SizeRequest>,
}

/// Price a (product, color, sizes) selection into an item the cart accepts
#[utoipa::path(
    post,
    path = "/api/products/{id}/cart-line",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Priced line item for the cart"),
        (status = 400, description = "Color or size not offered"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn build_cart_line(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CartLineRequest>,
) -> impl IntoResponse {
    let product = match state.product_repo.find_by_id(id).await {
        Ok(Some(p)) => p,
        Ok(None) => return DomainError::NotFound.into_response(),
        Err(e) => return e.into_response(),
    };

    match catalog::line_item_for(&product, &payload.color_name, &payload.sizes) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}
