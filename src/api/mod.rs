pub mod auth;
pub mod banners;
pub mod cart;
pub mod categories;
pub mod colors;
pub mod error;
pub mod health;
pub mod products;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderMap, header},
    routing::{get, post, put},
};

use crate::infrastructure::AppState;

/// Largest accepted image upload
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build API router with AppState (repositories, uploads, config)
pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/login", post(auth::login))
        // Uploads
        .route(
            "/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            put(categories::update_category).delete(categories::delete_category),
        )
        // Colors
        .route("/colors", get(colors::list_colors))
        .route("/colors/closest", get(colors::closest_color))
        // Products
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/:id/cart-line", post(products::build_cart_line))
        // Banners
        .route(
            "/banners",
            get(banners::list_banners).post(banners::create_banner),
        )
        .route(
            "/banners/:id",
            put(banners::update_banner).delete(banners::delete_banner),
        )
        // Cart
        .route("/cart/summary", post(cart::order_summary))
        // Unknown API paths must not fall through to the SPA
        .fallback(|| async { crate::domain::DomainError::NotFound })
        .with_state(state)
}

/// Origin that relative media URLs are resolved against: the configured
/// public URL, else the request's `Host`.
pub(crate) fn request_base_url(state: &AppState, headers: &HeaderMap) -> Option<String> {
    if let Some(base) = &state.config.public_base_url {
        return Some(base.clone());
    }
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    Some(format!("{}://{}", scheme, host))
}
