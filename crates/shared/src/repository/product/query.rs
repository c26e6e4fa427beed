use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{InventoryStats, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products =
            sqlx::query_as::<_, ProductModel>("SELECT * FROM products ORDER BY name ASC")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch products: {:?}", e);
                    RepositoryError::from(e)
                })?;

        Ok(products)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🏷️ Fetching product by slug: {}", slug);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>("SELECT * FROM products WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {}: {:?}", slug, e);
                RepositoryError::from(e)
            })?;

        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_low_stock(&self, threshold: i32) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("📉 Fetching products with inventory below {}", threshold);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT * FROM products
            WHERE inventory < $1
            ORDER BY inventory ASC
            "#,
        )
        .bind(threshold)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch low-stock products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn inventory_stats(&self, threshold: i32) -> Result<InventoryStats, RepositoryError> {
        info!("📊 Aggregating inventory stats (threshold {})", threshold);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let stats = sqlx::query_as::<_, InventoryStats>(
            r#"
            SELECT
                COUNT(*) AS total_products,
                COALESCE(SUM(inventory), 0)::BIGINT AS total_inventory,
                COUNT(*) FILTER (WHERE inventory < $1) AS low_stock_count,
                ROUND(AVG(price), 4) AS avg_price
            FROM products
            "#,
        )
        .bind(threshold)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate inventory stats: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(stats)
    }
}
