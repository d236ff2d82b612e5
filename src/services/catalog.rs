//! Catalog assembly - folds product, variant and media rows into documents
//!
//! Everything here is pure: repositories load the rows, these functions shape
//! them. Row order as loaded from the store is preserved at every level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, MediaInput, ProductInput, VariantInput};
use crate::models::media::{self, MediaType};
use crate::models::variant::{self, NO_SIZE};
use crate::models::{ColorOption, MediaDocument, ProductDocument, SizeOption, VariantDocument};
use crate::models::product;
use crate::services::cart::{NewCartItem, SizeEntry};
use crate::services::colors;

/// Build one document per product, attaching variants and their media.
///
/// Products without variants get `variants: []`, variants without media get
/// `media: []`.
pub fn assemble(
    products: Vec<product::Model>,
    variants: Vec<variant::Model>,
    media: Vec<media::Model>,
) -> Vec<ProductDocument> {
    let mut media_by_variant: HashMap<i32, Vec<MediaDocument>> = HashMap::new();
    for item in media {
        media_by_variant
            .entry(item.variant_id)
            .or_default()
            .push(MediaDocument::from(item));
    }

    let mut variants_by_product: HashMap<i32, Vec<VariantDocument>> = HashMap::new();
    for row in variants {
        let mut doc = VariantDocument::from(row);
        doc.media = media_by_variant.remove(&doc.id).unwrap_or_default();
        variants_by_product
            .entry(doc.product_id)
            .or_default()
            .push(doc);
    }

    products
        .into_iter()
        .map(|p| {
            let variants = variants_by_product.remove(&p.id).unwrap_or_default();
            to_document(p, variants)
        })
        .collect()
}

/// Wrap a product row and its already-nested variants into a document
pub fn to_document(model: product::Model, variants: Vec<VariantDocument>) -> ProductDocument {
    let colors = color_options(&variants);
    ProductDocument {
        id: model.id,
        in_stock: model.stock > 0,
        name: model.name,
        description: model.description,
        price: model.price,
        image_url: model.image_url,
        category: model.category,
        stock: model.stock,
        design_code: model.design_code,
        is_on_sale: model.is_on_sale,
        sale_price: model.sale_price,
        created_at: model.created_at,
        display_image_url: None,
        variants,
        colors,
    }
}

/// Group variants by color for the color/size pickers.
///
/// Colors keep the order of their first appearance. A (color, size) pair that
/// occurs twice keeps its first position but takes the later row's values.
pub fn color_options(variants: &[VariantDocument]) -> Vec<ColorOption> {
    let mut options: Vec<ColorOption> = Vec::new();

    for v in variants {
        let idx = match options.iter().position(|o| o.color_name == v.color_name) {
            Some(idx) => idx,
            None => {
                options.push(ColorOption {
                    color_name: v.color_name.clone(),
                    color_hex: v.color_hex.clone(),
                    media: Vec::new(),
                    sizes: Vec::new(),
                });
                options.len() - 1
            }
        };
        let option = &mut options[idx];

        if option.media.is_empty() && !v.media.is_empty() {
            option.media = v.media.clone();
        }

        let size = SizeOption {
            size: v.size.clone(),
            extra_price: v.extra_price,
            variant_id: v.id,
        };
        match option.sizes.iter_mut().find(|s| s.size == v.size) {
            Some(existing) => *existing = size,
            None => option.sizes.push(size),
        }
    }

    options
}

/// First image belonging to a variant of the given color
pub fn color_image<'a>(variants: &'a [VariantDocument], color: &str) -> Option<&'a str> {
    variants
        .iter()
        .filter(|v| v.color_name == color)
        .flat_map(|v| v.media.iter())
        .find(|m| m.is_image())
        .map(|m| m.url.as_str())
}

/// Swap the representative image for the filtered color's photo when one exists
pub fn apply_color_image(doc: &mut ProductDocument, color: &str) {
    if let Some(url) = color_image(&doc.variants, color) {
        doc.image_url = Some(url.to_string());
    }
}

/// A variant ready to be inserted, defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub color_name: String,
    pub color_hex: String,
    pub size: String,
    pub extra_price: f64,
    pub media: Vec<MediaInput>,
}

/// Apply variant defaults: blank size becomes `N/A`, missing surcharge is 0,
/// and a blank color name is taken from the nearest standard swatch.
pub fn prepare_variants(inputs: &[VariantInput]) -> Result<Vec<NewVariant>, DomainError> {
    inputs.iter().map(prepare_variant).collect()
}

fn prepare_variant(input: &VariantInput) -> Result<NewVariant, DomainError> {
    let color_hex = input.color_hex.trim().to_string();
    if color_hex.is_empty() {
        return Err(DomainError::Validation("color_hex is required".to_string()));
    }

    let color_name = match input.color_name.trim() {
        "" => colors::closest_standard_color(&color_hex)
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "color_name is required when {:?} is not a hex color",
                    color_hex
                ))
            })?,
        name => name.to_string(),
    };

    let size = match input.size.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NO_SIZE.to_string(),
    };

    if input.media.iter().any(|m| m.url.trim().is_empty()) {
        return Err(DomainError::Validation("media url is required".to_string()));
    }

    Ok(NewVariant {
        color_name,
        color_hex,
        size,
        extra_price: input.extra_price.unwrap_or(0.0),
        media: input.media.clone(),
    })
}

/// The product's display image: the explicit one, or the first image of the
/// first submitted variant.
pub fn fallback_image(input: &ProductInput) -> Option<String> {
    if let Some(url) = input.image_url.as_deref()
        && !url.trim().is_empty()
    {
        return Some(url.to_string());
    }
    input
        .variants
        .first()?
        .media
        .iter()
        .find(|m| m.kind == MediaType::Image)
        .map(|m| m.url.clone())
}

/// Requested quantity for one size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeRequest {
    pub size: String,
    pub qty: u32,
}

/// Resolve the unit prices and image of a (product, color) selection into a
/// cart line item.
pub fn line_item_for(
    product: &ProductDocument,
    color_name: &str,
    sizes: &[SizeRequest],
) -> Result<NewCartItem, DomainError> {
    let colors = color_options(&product.variants);
    let option = colors
        .iter()
        .find(|o| o.color_name == color_name)
        .ok_or_else(|| {
            DomainError::Validation(format!("{} is not available in {}", product.name, color_name))
        })?;

    let base = product.effective_price();
    let mut entries = Vec::new();
    for req in sizes.iter().filter(|s| s.qty > 0) {
        let offered = option
            .sizes
            .iter()
            .find(|s| s.size == req.size)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "size {} is not available in {}",
                    req.size, color_name
                ))
            })?;
        entries.push(SizeEntry {
            size: req.size.clone(),
            qty: req.qty,
            price: base + offered.extra_price,
        });
    }

    if entries.is_empty() {
        return Err(DomainError::Validation(
            "select a quantity for at least one size".to_string(),
        ));
    }

    let image_url = color_image(&product.variants, color_name)
        .map(str::to_string)
        .or_else(|| product.image_url.clone())
        .unwrap_or_default();

    Ok(NewCartItem {
        product_id: product.id,
        product_name: product.name.clone(),
        design_code: product.design_code.clone().filter(|c| !c.is_empty()),
        color_name: option.color_name.clone(),
        color_hex: option.color_hex.clone(),
        image_url,
        sizes: entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_row(id: i32) -> product::Model {
        product::Model {
            id,
            name: format!("Product {}", id),
            description: None,
            price: 100.0,
            image_url: Some("default.jpg".to_string()),
            category: Some("Kurti".to_string()),
            stock: 3,
            design_code: Some(format!("D{}", id)),
            is_on_sale: false,
            sale_price: None,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn variant_row(id: i32, product_id: i32, color: &str, size: &str, extra: f64) -> variant::Model {
        variant::Model {
            id,
            product_id,
            color_name: color.to_string(),
            color_hex: "#ff0000".to_string(),
            size: size.to_string(),
            extra_price: extra,
        }
    }

    fn media_row(id: i32, variant_id: i32, url: &str, kind: &str) -> media::Model {
        media::Model {
            id,
            variant_id,
            url: url.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn absent_relations_become_empty_lists() {
        let docs = assemble(
            vec![product_row(1), product_row(2)],
            vec![variant_row(10, 2, "Red", "M", 0.0)],
            vec![],
        );
        assert_eq!(docs.len(), 2);
        assert!(docs[0].variants.is_empty());
        assert_eq!(docs[1].variants.len(), 1);
        assert!(docs[1].variants[0].media.is_empty());

        let json = serde_json::to_value(&docs[0]).unwrap();
        assert_eq!(json["variants"], serde_json::json!([]));
    }

    #[test]
    fn nesting_preserves_row_order() {
        let docs = assemble(
            vec![product_row(1)],
            vec![
                variant_row(10, 1, "Red", "M", 0.0),
                variant_row(11, 1, "Blue", "L", 5.0),
            ],
            vec![
                media_row(100, 11, "blue.jpg", "image"),
                media_row(101, 10, "red-1.jpg", "image"),
                media_row(102, 10, "https://youtube.com/watch?v=abc", "youtube"),
            ],
        );
        let variants = &docs[0].variants;
        assert_eq!(variants[0].color_name, "Red");
        assert_eq!(
            variants[0].media.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![101, 102]
        );
        assert_eq!(
            variants[0].media[1].embed_url.as_deref(),
            Some("https://youtube.com/embed/abc")
        );
        assert_eq!(variants[1].media[0].url, "blue.jpg");
    }

    #[test]
    fn repeated_color_size_keeps_last_values() {
        let docs = assemble(
            vec![product_row(1)],
            vec![
                variant_row(10, 1, "Red", "M", 0.0),
                variant_row(11, 1, "Red", "L", 10.0),
                variant_row(12, 1, "Red", "M", 20.0),
                variant_row(13, 1, "Blue", "M", 0.0),
            ],
            vec![media_row(100, 11, "red.jpg", "image")],
        );
        let colors = &docs[0].colors;
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].color_name, "Red");
        assert_eq!(colors[0].sizes.len(), 2);
        assert_eq!(colors[0].sizes[0].size, "M");
        assert_eq!(colors[0].sizes[0].extra_price, 20.0);
        assert_eq!(colors[0].sizes[0].variant_id, 12);
        assert_eq!(colors[0].media[0].url, "red.jpg");
        assert!(colors[1].media.is_empty());
    }

    #[test]
    fn color_image_prefers_matching_variant() {
        let mut doc = assemble(
            vec![product_row(1)],
            vec![
                variant_row(10, 1, "Red", "M", 0.0),
                variant_row(11, 1, "Blue", "M", 0.0),
                variant_row(12, 1, "Green", "M", 0.0),
            ],
            vec![
                media_row(100, 10, "red.jpg", "image"),
                media_row(101, 11, "https://youtu.be/x", "youtube"),
                media_row(102, 11, "blue.jpg", "image"),
            ],
        )
        .remove(0);

        apply_color_image(&mut doc, "Blue");
        assert_eq!(doc.image_url.as_deref(), Some("blue.jpg"));

        apply_color_image(&mut doc, "Green");
        assert_eq!(doc.image_url.as_deref(), Some("blue.jpg"));
    }

    #[test]
    fn variant_defaults_are_applied() {
        let prepared = prepare_variants(&[VariantInput {
            color_name: "".to_string(),
            color_hex: "#010101".to_string(),
            size: Some("  ".to_string()),
            extra_price: None,
            media: vec![],
        }])
        .unwrap();
        assert_eq!(prepared[0].color_name, "Black");
        assert_eq!(prepared[0].size, NO_SIZE);
        assert_eq!(prepared[0].extra_price, 0.0);
    }

    #[test]
    fn prepared_variant_keeps_media_in_order() {
        let media = vec![
            MediaInput { url: "/uploads/front.jpg".to_string(), kind: MediaType::Image },
            MediaInput { url: "https://youtu.be/abc123".to_string(), kind: MediaType::Youtube },
        ];
        let prepared = prepare_variants(&[VariantInput {
            color_name: " Red ".to_string(),
            color_hex: "#FF0000".to_string(),
            size: Some("M".to_string()),
            extra_price: Some(50.0),
            media: media.clone(),
        }])
        .unwrap();
        assert_eq!(
            prepared,
            vec![NewVariant {
                color_name: "Red".to_string(),
                color_hex: "#FF0000".to_string(),
                size: "M".to_string(),
                extra_price: 50.0,
                media,
            }]
        );
    }

    #[test]
    fn unnamed_variant_needs_a_hex_color() {
        let res = prepare_variants(&[VariantInput {
            color_hex: "teal".to_string(),
            ..Default::default()
        }]);
        assert!(matches!(res, Err(DomainError::Validation(_))));
    }

    #[test]
    fn fallback_image_uses_first_image_of_first_variant() {
        let input = ProductInput {
            name: "Top".to_string(),
            price: 10.0,
            image_url: Some("".to_string()),
            variants: vec![
                VariantInput {
                    color_name: "Red".to_string(),
                    color_hex: "#f00".to_string(),
                    media: vec![
                        MediaInput {
                            url: "https://youtu.be/x".to_string(),
                            kind: MediaType::Youtube,
                        },
                        MediaInput {
                            url: "a.jpg".to_string(),
                            kind: MediaType::Image,
                        },
                    ],
                    ..Default::default()
                },
                VariantInput {
                    color_name: "Blue".to_string(),
                    color_hex: "#00f".to_string(),
                    media: vec![MediaInput {
                        url: "b.jpg".to_string(),
                        kind: MediaType::Image,
                    }],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(fallback_image(&input).as_deref(), Some("a.jpg"));

        let explicit = ProductInput {
            image_url: Some("main.jpg".to_string()),
            ..input
        };
        assert_eq!(fallback_image(&explicit).as_deref(), Some("main.jpg"));
    }

    #[test]
    fn line_item_resolves_sale_price_plus_surcharge() {
        let mut doc = assemble(
            vec![product_row(1)],
            vec![
                variant_row(10, 1, "Red", "M", 0.0),
                variant_row(11, 1, "Red", "XL", 50.0),
            ],
            vec![media_row(100, 11, "red.jpg", "image")],
        )
        .remove(0);
        doc.is_on_sale = true;
        doc.sale_price = Some(80.0);

        let item = line_item_for(
            &doc,
            "Red",
            &[
                SizeRequest { size: "M".to_string(), qty: 2 },
                SizeRequest { size: "XL".to_string(), qty: 1 },
                SizeRequest { size: "M".to_string(), qty: 0 },
            ],
        )
        .unwrap();

        assert_eq!(item.sizes.len(), 2);
        assert_eq!(item.sizes[0].price, 80.0);
        assert_eq!(item.sizes[1].price, 130.0);
        assert_eq!(item.image_url, "red.jpg");
        assert_eq!(item.design_code.as_deref(), Some("D1"));
    }

    #[test]
    fn line_item_rejects_unknown_size() {
        let doc = assemble(
            vec![product_row(1)],
            vec![variant_row(10, 1, "Red", "M", 0.0)],
            vec![],
        )
        .remove(0);
        let res = line_item_for(&doc, "Red", &[SizeRequest { size: "3XL".to_string(), qty: 1 }]);
        assert!(matches!(res, Err(DomainError::Validation(_))));

        let res = line_item_for(&doc, "Blue", &[SizeRequest { size: "M".to_string(), qty: 1 }]);
        assert!(matches!(res, Err(DomainError::Validation(_))));
    }
}
