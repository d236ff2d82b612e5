use crate::domain::{
    BannerInput, BannerRepository, CategoryInput, CategoryRepository, DomainError, MediaInput,
    ProductInput, ProductRepository, VariantInput,
};
use crate::infrastructure::auth::{ADMIN_ROLE, hash_password};
use crate::infrastructure::{
    SeaOrmBannerRepository, SeaOrmCategoryRepository, SeaOrmProductRepository,
};
use crate::models::media::MediaType;
use crate::models::{product, user};
use sea_orm::*;

/// Make sure the configured admin account exists with a hashed password.
///
/// An existing account with an empty hash (migrated from plaintext storage)
/// gets the configured password hashed in.
pub async fn ensure_default_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<(), DomainError> {
    let now = chrono::Utc::now().to_rfc3339();
    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;

    match existing {
        Some(u) if !u.password_hash.is_empty() => {
            tracing::debug!("Admin user {} already present", username);
        }
        Some(u) => {
            let mut active: user::ActiveModel = u.into();
            active.password_hash = Set(hash_password(password)?);
            active.updated_at = Set(now);
            active.update(db).await?;
            tracing::info!("Re-hashed password of admin user {}", username);
        }
        None => {
            let admin = user::ActiveModel {
                username: Set(username.to_owned()),
                password_hash: Set(hash_password(password)?),
                role: Set(ADMIN_ROLE.to_owned()),
                created_at: Set(now.clone()),
                updated_at: Set(now),
                ..Default::default()
            };
            admin.insert(db).await?;
            tracing::info!("Default admin user {} created", username);
        }
    }

    Ok(())
}

fn variant(color: &str, hex: &str, size: &str, extra: f64, image: &str) -> VariantInput {
    VariantInput {
        color_name: color.to_owned(),
        color_hex: hex.to_owned(),
        size: Some(size.to_owned()),
        extra_price: Some(extra),
        media: vec![MediaInput {
            url: image.to_owned(),
            kind: MediaType::Image,
        }],
    }
}

/// Insert a small demo catalog when the store has no products yet
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    if product::Entity::find().count(db).await? > 0 {
        tracing::info!("Catalog not empty, skipping demo data");
        return Ok(());
    }

    let categories = SeaOrmCategoryRepository::new(db.clone());
    for name in ["Kurti", "Crop-Top", "Co-ord Set"] {
        categories
            .create(CategoryInput {
                name: name.to_owned(),
                image_url: Some(format!("/uploads/category-{}.jpg", name.to_lowercase())),
            })
            .await?;
    }

    let products = SeaOrmProductRepository::new(db.clone());
    products
        .create(ProductInput {
            name: "Block Print Kurti".to_owned(),
            description: Some("Hand block printed cotton kurti".to_owned()),
            price: 1299.0,
            category: Some("Kurti".to_owned()),
            stock: Some(12),
            design_code: Some("KT-101".to_owned()),
            variants: vec![
                variant("Maroon", "#800000", "M", 0.0, "/uploads/kt-101-maroon.jpg"),
                variant("Maroon", "#800000", "XL", 100.0, "/uploads/kt-101-maroon.jpg"),
                variant("Blue", "#0000FF", "M", 0.0, "/uploads/kt-101-blue.jpg"),
            ],
            ..Default::default()
        })
        .await?;

    products
        .create(ProductInput {
            name: "Ribbed Crop-top".to_owned(),
            price: 699.0,
            category: Some("Crop-Top".to_owned()),
            stock: Some(5),
            design_code: Some("CT-10".to_owned()),
            is_on_sale: true,
            sale_price: Some(549.0),
            variants: vec![
                variant("Black", "#000000", "N/A", 0.0, "/uploads/ct-10-black.jpg"),
                variant("Green", "#0f4810", "N/A", 0.0, "/uploads/ct-10-green.jpg"),
            ],
            ..Default::default()
        })
        .await?;

    let banners = SeaOrmBannerRepository::new(db.clone());
    banners
        .create(BannerInput {
            image_url: "/uploads/banner-festive.jpg".to_owned(),
            title: "Festive Edit".to_owned(),
            subtitle: Some("New arrivals every week".to_owned()),
            link_url: Some("/shop?category=Kurti".to_owned()),
        })
        .await?;

    tracing::info!("Demo catalog seeded");
    Ok(())
}
