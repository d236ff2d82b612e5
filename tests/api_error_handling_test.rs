use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use shoap::auth;
use shoap::config::Config;
use shoap::db;
use shoap::infrastructure::AppState;
use shoap::models::{product, variant};
use shoap::server::build_router;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db, Config::default())
}

// Helper to create a valid auth token
fn get_test_token() -> String {
    auth::issue_token(1, "test_admin", "admin").expect("Failed to create token")
}

fn authed(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::AUTHORIZATION, format!("Bearer {}", get_test_token()))
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    json["error"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_get_product_not_found() {
    let state = setup_test_state().await;
    let app: Router = build_router(state);

    let req = Request::builder()
        .uri("/api/products/999")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Product not found");

    // Update of an unknown product is reported, not silently accepted
    let payload = json!({ "name": "Ghost", "price": 10 });
    let req = authed(
        "PUT",
        "/api/products/999",
        Body::from(serde_json::to_vec(&payload).unwrap()),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = authed("DELETE", "/api/products/999", Body::empty());
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = authed(
        "POST",
        "/api/products/999/cart-line",
        Body::from(r#"{"color_name":"Red","sizes":[{"size":"M","qty":1}]}"#),
    );
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = build_router(setup_test_state().await);

    let req = Request::builder()
        .uri("/api/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Resource not found");
}

#[tokio::test]
async fn test_create_product_invalid_input() {
    let state = setup_test_state().await;
    let db = state.db().clone();
    let app = build_router(state);

    // Malformed JSON
    let req = authed("POST", "/api/products", Body::from("invalid json"));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-numeric price never reaches the store
    let payload = json!({
        "name": "Kurti",
        "price": "abc",
        "variants": [{ "color_name": "Red", "color_hex": "#FF0000" }]
    });
    let req = authed(
        "POST",
        "/api/products",
        Body::from(serde_json::to_vec(&payload).unwrap()),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert!(response.status().is_client_error());

    // Blank name
    let payload = json!({ "name": " ", "price": 10 });
    let req = authed(
        "POST",
        "/api/products",
        Body::from(serde_json::to_vec(&payload).unwrap()),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "name is required");

    // One bad variant rejects the whole product
    let payload = json!({
        "name": "Kurti",
        "price": 10,
        "variants": [
            { "color_name": "Red", "color_hex": "#FF0000" },
            { "color_name": "", "color_hex": "not-a-color" }
        ]
    });
    let req = authed(
        "POST",
        "/api/products",
        Body::from(serde_json::to_vec(&payload).unwrap()),
    );
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(product::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(variant::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_category_and_banner_validation() {
    let app = build_router(setup_test_state().await);

    let req = authed("POST", "/api/categories", Body::from(r#"{"name":"Kurti"}"#));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let req = authed("POST", "/api/categories", Body::from(r#"{"name":"Kurti"}"#));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let req = authed("POST", "/api/categories", Body::from(r#"{"name":""}"#));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let req = authed("PUT", "/api/categories/42", Body::from(r#"{"name":"Tops"}"#));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = authed("POST", "/api/banners", Body::from(r#"{"image_url":"/uploads/b.jpg"}"#));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "title is required");

    let req = authed("DELETE", "/api/banners/42", Body::empty());
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cart_line_rejects_unavailable_selection() {
    let app = build_router(setup_test_state().await);

    let payload = json!({
        "name": "Kurti",
        "price": 500,
        "variants": [{ "color_name": "Red", "color_hex": "#FF0000", "size": "M" }]
    });
    let req = authed(
        "POST",
        "/api/products",
        Body::from(serde_json::to_vec(&payload).unwrap()),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/products/{}/cart-line", id);

    for selection in [
        json!({ "color_name": "Blue", "sizes": [{ "size": "M", "qty": 1 }] }),
        json!({ "color_name": "Red", "sizes": [{ "size": "XXL", "qty": 1 }] }),
        json!({ "color_name": "Red", "sizes": [{ "size": "M", "qty": 0 }] }),
    ] {
        let req = authed("POST", &uri, Body::from(serde_json::to_vec(&selection).unwrap()));
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", selection);
    }
}
