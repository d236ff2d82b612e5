//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{Category, CategoryInput, CategoryRepository, DomainError};
use crate::models::category::{ActiveModel, Column, Entity as CategoryEntity, Model};

/// SeaORM-based implementation of CategoryRepository
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Names are unique; `except` skips the category being renamed
    async fn ensure_name_free(&self, name: &str, except: Option<i32>) -> Result<(), DomainError> {
        let mut query = CategoryEntity::find().filter(Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            return Err(DomainError::Validation(format!(
                "category {} already exists",
                name
            )));
        }
        Ok(())
    }
}

fn validated_name(input: &CategoryInput) -> Result<String, DomainError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation("name is required".to_string()));
    }
    Ok(name.to_string())
}

impl From<Model> for Category {
    fn from(c: Model) -> Self {
        Category {
            id: c.id,
            name: c.name,
            image_url: c.image_url,
            created_at: c.created_at,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = CategoryEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn create(&self, input: CategoryInput) -> Result<Category, DomainError> {
        let name = validated_name(&input)?;
        self.ensure_name_free(&name, None).await?;

        let category = ActiveModel {
            name: Set(name),
            image_url: Set(input.image_url),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = category.insert(&self.db).await?;
        tracing::info!("Created category {}", result.name);
        Ok(Category::from(result))
    }

    async fn update(&self, id: i32, input: CategoryInput) -> Result<Category, DomainError> {
        let name = validated_name(&input)?;
        let existing = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;
        self.ensure_name_free(&name, Some(id)).await?;

        // Products keep the old name string; categories are matched by name only
        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.image_url = Set(input.image_url);

        let result = active.update(&self.db).await?;
        Ok(Category::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = CategoryEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
