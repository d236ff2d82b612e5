use axum::{
    Json,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::json;

use super::request_base_url;
use crate::auth::AdminClaims;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::uploads::UPLOADS_ROUTE;
use crate::services::media::resolve_media_url;

#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 200, description = "File stored, its URL returned"),
        (status = 400, description = "No file in the form")
    )
)]
pub async fn upload_file(
    State(state): State<AppState>,
    _claims: AdminClaims,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return DomainError::Validation(format!("invalid multipart body: {}", e))
                    .into_response();
            }
        };
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                return DomainError::Validation(format!("failed to read upload: {}", e))
                    .into_response();
            }
        };

        return match state.uploads.store(&original_name, &data).await {
            Ok(file_name) => {
                // The stored form is what products keep; display_url is for previews
                let url = format!("{}/{}", UPLOADS_ROUTE, file_name);
                let body = match request_base_url(&state, &headers) {
                    Some(base) => json!({ "url": url, "display_url": resolve_media_url(&url, &base) }),
                    None => json!({ "url": url }),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => e.into_response(),
        };
    }

    DomainError::Validation("no file uploaded".to_string()).into_response()
}
