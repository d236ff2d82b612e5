use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::colors::closest_standard_color;

/// Every variant color name with the hex codes used for it
#[utoipa::path(
    get,
    path = "/api/colors",
    responses((status = 200, description = "Color names with their hex codes"))
)]
pub async fn list_colors(State(state): State<AppState>) -> impl IntoResponse {
    match state.product_repo.list_colors().await {
        Ok(colors) => (StatusCode::OK, Json(colors)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[derive(Deserialize)]
pub struct ClosestQuery {
    #[serde(default)]
    hex: String,
}

#[utoipa::path(
    get,
    path = "/api/colors/closest",
    params(("hex" = String, Query, description = "Color as #rrggbb")),
    responses(
        (status = 200, description = "Nearest standard color"),
        (status = 400, description = "Not a hex color")
    )
)]
pub async fn closest_color(Query(query): Query<ClosestQuery>) -> impl IntoResponse {
    match closest_standard_color(&query.hex) {
        Some(name) => (
            StatusCode::OK,
            Json(json!({ "hex": query.hex, "color_name": name })),
        )
            .into_response(),
        None => DomainError::Validation(format!("invalid hex color: {}", query.hex))
            .into_response(),
    }
}
