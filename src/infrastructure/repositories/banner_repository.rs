//! SeaORM implementation of BannerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{Banner, BannerInput, BannerRepository, DomainError};
use crate::models::banner::{ActiveModel, Column, Entity as BannerEntity, Model};

/// SeaORM-based implementation of BannerRepository
pub struct SeaOrmBannerRepository {
    db: DatabaseConnection,
}

impl SeaOrmBannerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for Banner {
    fn from(b: Model) -> Self {
        Banner {
            id: b.id,
            image_url: b.image_url,
            title: b.title,
            subtitle: b.subtitle,
            link_url: b.link_url,
            created_at: b.created_at,
        }
    }
}

#[async_trait]
impl BannerRepository for SeaOrmBannerRepository {
    async fn find_all(&self) -> Result<Vec<Banner>, DomainError> {
        let banners = BannerEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(banners.into_iter().map(Banner::from).collect())
    }

    async fn create(&self, input: BannerInput) -> Result<Banner, DomainError> {
        input.validate()?;

        let banner = ActiveModel {
            image_url: Set(input.image_url),
            title: Set(input.title),
            subtitle: Set(input.subtitle),
            link_url: Set(input.link_url),
            created_at: Set(chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            ..Default::default()
        };

        let result = banner.insert(&self.db).await?;
        tracing::info!("Created banner {} ({})", result.id, result.title);
        Ok(Banner::from(result))
    }

    async fn update(&self, id: i32, input: BannerInput) -> Result<Banner, DomainError> {
        input.validate()?;

        let existing = BannerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.image_url = Set(input.image_url);
        active.title = Set(input.title);
        active.subtitle = Set(input.subtitle);
        active.link_url = Set(input.link_url);

        let result = active.update(&self.db).await?;
        Ok(Banner::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BannerEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
