//! Repository implementations using SeaORM

pub mod banner_repository;
pub mod category_repository;
pub mod product_repository;

pub use banner_repository::SeaOrmBannerRepository;
pub use category_repository::SeaOrmCategoryRepository;
pub use product_repository::SeaOrmProductRepository;
