pub mod banner;
pub mod category;
pub mod media;
pub mod product;
pub mod user;
pub mod variant;

pub use product::{ColorOption, MediaDocument, ProductDocument, SizeOption, VariantDocument};
