use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{media, variant};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
    pub design_code: Option<String>,
    pub is_on_sale: bool,
    pub sale_price: Option<f64>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::variant::Entity")]
    Variants,
}

impl Related<super::variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Price charged before any size surcharge
    pub fn effective_price(&self) -> f64 {
        effective_price(self.price, self.is_on_sale, self.sale_price)
    }
}

/// Sale price wins only when the product is on sale and the sale price is set
pub fn effective_price(price: f64, is_on_sale: bool, sale_price: Option<f64>) -> f64 {
    match sale_price {
        Some(sale) if is_on_sale && sale > 0.0 => sale,
        _ => price,
    }
}

// DTOs for API responses

/// Product with its variants and their media nested inside
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
    pub in_stock: bool,
    pub design_code: Option<String>,
    pub is_on_sale: bool,
    pub sale_price: Option<f64>,
    pub created_at: String,
    /// `image_url` resolved against the public origin; the stored value is left as is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_image_url: Option<String>,
    pub variants: Vec<VariantDocument>,
    pub colors: Vec<ColorOption>,
}

impl ProductDocument {
    pub fn effective_price(&self) -> f64 {
        effective_price(self.price, self.is_on_sale, self.sale_price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDocument {
    pub id: i32,
    pub product_id: i32,
    pub color_name: String,
    pub color_hex: String,
    pub size: String,
    pub extra_price: f64,
    pub media: Vec<MediaDocument>,
}

impl From<variant::Model> for VariantDocument {
    fn from(model: variant::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            color_name: model.color_name,
            color_hex: model.color_hex,
            size: model.size,
            extra_price: model.extra_price,
            media: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDocument {
    pub id: i32,
    pub variant_id: i32,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
}

impl MediaDocument {
    pub fn is_image(&self) -> bool {
        self.kind == media::MediaType::Image.as_str()
    }
}

impl From<media::Model> for MediaDocument {
    fn from(model: media::Model) -> Self {
        let embed_url = (model.kind == media::MediaType::Youtube.as_str())
            .then(|| crate::services::media::youtube_embed_url(&model.url));
        Self {
            id: model.id,
            variant_id: model.variant_id,
            url: model.url,
            kind: model.kind,
            embed_url,
            display_url: None,
        }
    }
}

/// One selectable color of a product with the sizes offered in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub color_name: String,
    pub color_hex: String,
    pub media: Vec<MediaDocument>,
    pub sizes: Vec<SizeOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: String,
    pub extra_price: f64,
    pub variant_id: i32,
}
