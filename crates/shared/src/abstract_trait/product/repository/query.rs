use crate::{
    errors::RepositoryError,
    model::{InventoryStats, Product as ProductModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_low_stock(&self, threshold: i32) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn inventory_stats(&self, threshold: i32) -> Result<InventoryStats, RepositoryError>;
}
