//! SeaORM implementation of ProductRepository
//!
//! Reads load products, then all their variants, then all those variants'
//! media: three queries per request whatever the number of products.
//! Writes replace the whole variant subtree inside one transaction.

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{ColorSwatch, DomainError, ProductFilter, ProductInput, ProductRepository};
use crate::models::ProductDocument;
use crate::models::media::{self, Entity as MediaEntity};
use crate::models::product::{self, ActiveModel, Column, Entity as ProductEntity};
use crate::models::variant::{self, Entity as VariantEntity};
use crate::services::catalog::{self, NewVariant};

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load the variant and media rows of the given products and nest them
async fn load_documents<C: ConnectionTrait>(
    conn: &C,
    products: Vec<product::Model>,
) -> Result<Vec<ProductDocument>, DomainError> {
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    let variants = VariantEntity::find()
        .filter(variant::Column::ProductId.is_in(product_ids))
        .order_by_asc(variant::Column::Id)
        .all(conn)
        .await?;

    let media = if variants.is_empty() {
        Vec::new()
    } else {
        let variant_ids: Vec<i32> = variants.iter().map(|v| v.id).collect();
        MediaEntity::find()
            .filter(media::Column::VariantId.is_in(variant_ids))
            .order_by_asc(media::Column::Id)
            .all(conn)
            .await?
    };

    Ok(catalog::assemble(products, variants, media))
}

async fn insert_variants(
    txn: &DatabaseTransaction,
    product_id: i32,
    variants: Vec<NewVariant>,
) -> Result<(), DomainError> {
    for v in variants {
        let row = variant::ActiveModel {
            product_id: Set(product_id),
            color_name: Set(v.color_name),
            color_hex: Set(v.color_hex),
            size: Set(v.size),
            extra_price: Set(v.extra_price),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for m in v.media {
            media::ActiveModel {
                variant_id: Set(row.id),
                url: Set(m.url),
                kind: Set(m.kind.as_str().to_string()),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }
    }
    Ok(())
}

/// Remove every variant of a product together with their media
async fn delete_variants(txn: &DatabaseTransaction, product_id: i32) -> Result<(), DomainError> {
    let variant_ids = Query::select()
        .column(variant::Column::Id)
        .from(VariantEntity)
        .and_where(variant::Column::ProductId.eq(product_id))
        .to_owned();

    MediaEntity::delete_many()
        .filter(media::Column::VariantId.in_subquery(variant_ids))
        .exec(txn)
        .await?;
    VariantEntity::delete_many()
        .filter(variant::Column::ProductId.eq(product_id))
        .exec(txn)
        .await?;
    Ok(())
}

/// Commit on success, roll back explicitly on failure
async fn finish<T>(txn: DatabaseTransaction, result: Result<T, DomainError>) -> Result<T, DomainError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Rolling back product write: {}", e);
            txn.rollback().await?;
            Err(e)
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self, filter: ProductFilter) -> Result<Vec<ProductDocument>, DomainError> {
        tracing::debug!(
            "List products - Filters: search={:?}, category={:?}, color={:?}",
            filter.search,
            filter.category,
            filter.color
        );

        let mut condition = Condition::all();

        if let Some(category) = filter.category() {
            condition = condition.add(Column::Category.eq(category));
        }

        // SQLite LIKE is case-insensitive for ASCII
        if let Some(q) = filter.search() {
            condition = condition.add(
                Condition::any()
                    .add(Column::Name.contains(q))
                    .add(Column::DesignCode.contains(q)),
            );
        }

        if let Some(color) = filter.color() {
            let with_color = Query::select()
                .column(variant::Column::ProductId)
                .from(VariantEntity)
                .and_where(variant::Column::ColorName.eq(color))
                .to_owned();
            condition = condition.add(Column::Id.in_subquery(with_color));
        }

        let products = ProductEntity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        let mut docs = load_documents(&self.db, products).await?;

        if let Some(color) = filter.color() {
            for doc in &mut docs {
                catalog::apply_color_image(doc, color);
            }
        }

        tracing::debug!("Returning {} products", docs.len());
        Ok(docs)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductDocument>, DomainError> {
        let Some(model) = ProductEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(load_documents(&self.db, vec![model]).await?.pop())
    }

    async fn create(&self, input: ProductInput) -> Result<i32, DomainError> {
        input.validate()?;
        let variants = catalog::prepare_variants(&input.variants)?;
        let image_url = catalog::fallback_image(&input);
        let variant_count = variants.len();

        let new_product = ActiveModel {
            name: Set(input.name.trim().to_string()),
            description: Set(input.description),
            price: Set(input.price),
            image_url: Set(image_url),
            category: Set(non_blank(input.category)),
            stock: Set(input.stock.unwrap_or(0)),
            design_code: Set(non_blank(input.design_code)),
            is_on_sale: Set(input.is_on_sale),
            sale_price: Set(input.sale_price),
            created_at: Set(chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = async {
            let product = new_product.insert(&txn).await?;
            insert_variants(&txn, product.id, variants).await?;
            Ok::<_, DomainError>(product)
        }
        .await;
        let product = finish(txn, result).await?;

        tracing::info!(
            "Created product {} ({}) with {} variants",
            product.id,
            product.name,
            variant_count
        );
        Ok(product.id)
    }

    async fn update(&self, id: i32, input: ProductInput) -> Result<(), DomainError> {
        input.validate()?;
        let variants = catalog::prepare_variants(&input.variants)?;
        let image_url = catalog::fallback_image(&input);
        let variant_count = variants.len();

        let txn = self.db.begin().await?;
        let result = async {
            let existing = ProductEntity::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or(DomainError::NotFound)?;

            let mut active: ActiveModel = existing.into();
            active.name = Set(input.name.trim().to_string());
            active.description = Set(input.description);
            active.price = Set(input.price);
            active.image_url = Set(image_url);
            active.category = Set(non_blank(input.category));
            active.stock = Set(input.stock.unwrap_or(0));
            active.design_code = Set(non_blank(input.design_code));
            active.is_on_sale = Set(input.is_on_sale);
            active.sale_price = Set(input.sale_price);
            active.update(&txn).await?;

            // Destructive replace: variant and media ids do not survive an edit
            delete_variants(&txn, id).await?;
            insert_variants(&txn, id, variants).await?;
            Ok::<_, DomainError>(())
        }
        .await;
        finish(txn, result).await?;

        tracing::info!("Updated product {} with {} variants", id, variant_count);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        let result = async {
            delete_variants(&txn, id).await?;
            let deleted = ProductEntity::delete_by_id(id).exec(&txn).await?;
            if deleted.rows_affected == 0 {
                return Err(DomainError::NotFound);
            }
            Ok::<_, DomainError>(())
        }
        .await;
        finish(txn, result).await?;

        tracing::info!("Deleted product {}", id);
        Ok(())
    }

    async fn list_colors(&self) -> Result<Vec<ColorSwatch>, DomainError> {
        let variants = VariantEntity::find()
            .order_by_asc(variant::Column::ColorName)
            .order_by_asc(variant::Column::Id)
            .all(&self.db)
            .await?;

        let mut swatches: Vec<ColorSwatch> = Vec::new();
        for v in variants {
            match swatches.last_mut() {
                Some(last) if last.color_name == v.color_name => {
                    if !last.color_hexes.contains(&v.color_hex) {
                        last.color_hexes.push(v.color_hex);
                    }
                }
                _ => swatches.push(ColorSwatch {
                    color_name: v.color_name,
                    color_hexes: vec![v.color_hex],
                }),
            }
        }
        Ok(swatches)
    }
}
