//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Nothing here touches the database or the network.

pub mod cart;
pub mod cart_store;
pub mod catalog;
pub mod colors;
pub mod media;
pub mod order_summary;

// Re-export for convenience
pub use cart::{Cart, CartItem, NewCartItem, SizeEntry};
pub use cart_store::{CartStore, JsonFileCartStore, MemoryCartStore, PersistentCart};
pub use order_summary::{format_inr, render_order_summary, whatsapp_link};
