//! Inquiry cart - line items keyed by (product, color)
//!
//! The cart never talks to the store. Adding merges into an existing line item
//! for the same product and color, quantities add up and the first recorded
//! unit price of a size is kept.

use serde::{Deserialize, Serialize};

/// Key of the line item holding a product in a given color
pub fn line_key(product_id: i32, color_name: &str) -> String {
    format!("{}-{}", product_id, color_name)
}

/// Quantity of one size with its fully resolved unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub size: String,
    pub qty: u32,
    pub price: f64,
}

impl SizeEntry {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// What the storefront submits on "add to cart"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: i32,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_code: Option<String>,
    pub color_name: String,
    #[serde(default)]
    pub color_hex: String,
    #[serde(default)]
    pub image_url: String,
    pub sizes: Vec<SizeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_id: i32,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_code: Option<String>,
    pub color_name: String,
    #[serde(default)]
    pub color_hex: String,
    #[serde(default)]
    pub image_url: String,
    pub sizes: Vec<SizeEntry>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.sizes.iter().map(SizeEntry::line_total).sum()
    }

    pub fn quantity(&self) -> u64 {
        self.sizes.iter().map(|s| u64::from(s.qty)).sum()
    }

    fn merge_sizes(&mut self, incoming: Vec<SizeEntry>) {
        for entry in incoming {
            match self.sizes.iter_mut().find(|s| s.size == entry.size) {
                Some(existing) => existing.qty = existing.qty.saturating_add(entry.qty),
                None => self.sizes.push(entry),
            }
        }
    }
}

impl From<NewCartItem> for CartItem {
    fn from(item: NewCartItem) -> Self {
        Self {
            id: line_key(item.product_id, &item.color_name),
            product_id: item.product_id,
            product_name: item.product_name,
            design_code: item.design_code,
            color_name: item.color_name,
            color_hex: item.color_hex,
            image_url: item.image_url,
            sizes: item.sizes,
        }
    }
}

/// Client-local cart. Serializes as the bare list of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line item, merging sizes into an existing (product, color) entry
    pub fn add(&mut self, item: NewCartItem) {
        let id = line_key(item.product_id, &item.color_name);
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(existing) => existing.merge_sizes(item.sizes),
            None => self.items.push(CartItem::from(item)),
        }
    }

    /// Remove a whole line item; unknown keys are ignored
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of pieces across all sizes of all line items
    pub fn count(&self) -> u64 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

}
