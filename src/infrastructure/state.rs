//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BannerRepository, CategoryRepository, ProductRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::uploads::UploadStorage;
use crate::infrastructure::{
    SeaOrmBannerRepository, SeaOrmCategoryRepository, SeaOrmProductRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (auth lookups go straight to the entity)
    db: DatabaseConnection,
    /// Product repository (products, variants, media)
    pub product_repo: Arc<dyn ProductRepository>,
    /// Category repository
    pub category_repo: Arc<dyn CategoryRepository>,
    /// Banner repository
    pub banner_repo: Arc<dyn BannerRepository>,
    /// Uploaded image storage
    pub uploads: UploadStorage,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let product_repo = Arc::new(SeaOrmProductRepository::new(db.clone()));
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let banner_repo = Arc::new(SeaOrmBannerRepository::new(db.clone()));
        let uploads = UploadStorage::new(config.upload_dir.clone());

        Self {
            db,
            product_repo,
            category_repo,
            banner_repo,
            uploads,
            config: Arc::new(config),
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
