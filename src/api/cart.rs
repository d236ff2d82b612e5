use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::services::{Cart, render_order_summary, whatsapp_link};

/// Render the order message and messaging link for a client-side cart
#[utoipa::path(
    post,
    path = "/api/cart/summary",
    responses((status = 200, description = "Order message and WhatsApp link"))
)]
pub async fn order_summary(
    State(state): State<AppState>,
    Json(cart): Json<Cart>,
) -> impl IntoResponse {
    let message = render_order_summary(&cart);
    let whatsapp_url = whatsapp_link(&state.config.whatsapp_number, &cart);

    (
        StatusCode::OK,
        Json(json!({
            "item_count": cart.count(),
            "grand_total": cart.grand_total(),
            "message": message,
            "whatsapp_url": whatsapp_url,
        })),
    )
}
