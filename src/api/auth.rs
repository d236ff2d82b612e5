use crate::auth::{issue_token, verify_password};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::user;
use axum::{Json, extract::State, response::IntoResponse};
use sea_orm::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/login",
    responses(
        (status = 200, description = "Admin signed in, bearer token returned"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, DomainError> {
    tracing::info!("Login attempt for user: {}", payload.username);

    let user = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(state.db())
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", payload.username);
            DomainError::Unauthorized
        })?;

    if !verify_password(&payload.password, &user.password_hash) {
        tracing::warn!("Password verification failed for user: {}", user.username);
        return Err(DomainError::Unauthorized);
    }

    let token = issue_token(user.id, &user.username, &user.role)?;
    tracing::info!("User {} signed in", user.username);
    Ok(Json(json!({
        "message": "Login successful",
        "user": { "id": user.id, "username": user.username, "role": user.role },
        "token": token
    })))
}
