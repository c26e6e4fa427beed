use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{FieldValue, NewProduct, ProductChanges},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Builds `UPDATE products SET <col> = $n, ..., last_updated = NOW() WHERE id = $k`.
///
/// Column identifiers come from
/// [`ProductField::column`](crate::domain::requests::ProductField::column); every value is
/// bound.
pub fn build_update_query(id: i32, changes: &ProductChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE products SET ");

    for (field, value) in changes.iter() {
        builder.push(field.column());
        builder.push(" = ");
        match value {
            FieldValue::Text(v) => builder.push_bind(v.clone()),
            FieldValue::Decimal(v) => builder.push_bind(*v),
            FieldValue::Integer(v) => builder.push_bind(*v),
            FieldValue::TextArray(v) => builder.push_bind(v.clone()),
        };
        builder.push(", ");
    }

    builder.push("last_updated = NOW() WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING *");

    builder
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products
                (name, slug, description, price, category, inventory, image_urls, image_public_ids)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(product.inventory)
        .bind(&product.image_urls)
        .bind(&product.image_public_ids)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.slug, err);
            RepositoryError::from_write(err, || {
                "Product with this slug already exists".to_string()
            })
        })?;

        info!("✅ Created product ID {} ({})", result.id, result.slug);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = build_update_query(id, changes);

        let result = builder
            .build_query_as::<ProductModel>()
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        match &result {
            Some(product) => info!(
                "🔄 Updated product ID {} ({} field(s))",
                product.id,
                changes.len()
            ),
            None => info!("⚠️ No product with ID {} to update", id),
        }

        Ok(result)
    }
}
