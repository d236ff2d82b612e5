use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::auth::login,
        api::products::list_products,
        api::products::get_product,
        api::products::create_product,
        api::products::update_product,
        api::products::delete_product,
        api::products::build_cart_line,
        api::categories::list_categories,
        api::categories::create_category,
        api::categories::update_category,
        api::categories::delete_category,
        api::banners::list_banners,
        api::banners::create_banner,
        api::banners::update_banner,
        api::banners::delete_banner,
        api::colors::list_colors,
        api::colors::closest_color,
        api::upload::upload_file,
        api::cart::order_summary,
    ),
    tags(
        (name = "shoap", description = "Shoap storefront API")
    )
)]
pub struct ApiDoc;
