//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use super::DomainError;
use crate::models::ProductDocument;
use crate::models::media::MediaType;

/// Filter criteria for product queries. All fields combine with AND.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring of `name` or `design_code`
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// Exact color name of any variant
    pub color: Option<String>,
}

impl ProductFilter {
    /// The active color filter, ignoring blank values
    pub fn color(&self) -> Option<&str> {
        non_blank(&self.color)
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn search(&self) -> Option<&str> {
        non_blank(&self.search)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// One media item of a submitted variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInput {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
}

/// One submitted variant (color + size) with its media
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantInput {
    #[serde(default)]
    pub color_name: String,
    #[serde(default)]
    pub color_hex: String,
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub extra_price: Option<f64>,
    #[serde(default)]
    pub media: Vec<MediaInput>,
}

/// Product body for create and full update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub design_code: Option<String>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub variants: Vec<VariantInput>,
}

impl ProductInput {
    /// Reject malformed scalar fields before anything is written
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }
        if let Some(sale) = self.sale_price
            && (!sale.is_finite() || sale < 0.0)
        {
            return Err(DomainError::Validation(
                "sale_price must be a non-negative number".to_string(),
            ));
        }
        if self.stock.is_some_and(|s| s < 0) {
            return Err(DomainError::Validation(
                "stock cannot be negative".to_string(),
            ));
        }
        for variant in &self.variants {
            if let Some(extra) = variant.extra_price
                && !extra.is_finite()
            {
                return Err(DomainError::Validation(
                    "extra_price must be a number".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Distinct color with every hex code used for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSwatch {
    pub color_name: String,
    pub color_hexes: Vec<String>,
}

/// Repository trait for products and their variant/media subtree
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products matching the filter, newest first
    async fn find_all(&self, filter: ProductFilter) -> Result<Vec<ProductDocument>, DomainError>;

    /// Find a single product with its variants and media
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductDocument>, DomainError>;

    /// Create a product with its variants, returning the new id
    async fn create(&self, input: ProductInput) -> Result<i32, DomainError>;

    /// Replace the product fields and its whole variant set
    async fn update(&self, id: i32, input: ProductInput) -> Result<(), DomainError>;

    /// Delete a product with its variants and media
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Distinct variant colors, by name
    async fn list_colors(&self) -> Result<Vec<ColorSwatch>, DomainError>;
}

/// Category data for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Input for creating or updating a category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
    pub image_url: Option<String>,
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find all categories ordered by name
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Create a new category
    async fn create(&self, input: CategoryInput) -> Result<Category, DomainError>;

    /// Rename a category or change its image
    async fn update(&self, id: i32, input: CategoryInput) -> Result<Category, DomainError>;

    /// Delete a category by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Homepage carousel slide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
    pub created_at: String,
}

/// Input for creating or updating a banner
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerInput {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
}

impl BannerInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.image_url.trim().is_empty() {
            return Err(DomainError::Validation("image_url is required".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        Ok(())
    }
}

/// Repository trait for Banner entity
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Find all banners, newest first
    async fn find_all(&self) -> Result<Vec<Banner>, DomainError>;

    /// Create a new banner
    async fn create(&self, input: BannerInput) -> Result<Banner, DomainError>;

    /// Update a banner
    async fn update(&self, id: i32, input: BannerInput) -> Result<Banner, DomainError>;

    /// Delete a banner by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

// Admin forms post prices either as JSON numbers or as the raw input string.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {:?}", s))),
    }
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {:?}", s))),
    }
}
