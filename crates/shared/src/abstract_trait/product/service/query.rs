use crate::{
    domain::{
        requests::FindAllProducts,
        responses::{DashboardResponse, InventoryStatsResponse, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<ProductResponse, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn find_categories(&self) -> Result<Vec<String>, ServiceError>;
    async fn find_low_stock(&self, threshold: i32) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn inventory_stats(
        &self,
        threshold: i32,
    ) -> Result<InventoryStatsResponse, ServiceError>;
    async fn dashboard(&self, threshold: i32) -> Result<DashboardResponse, ServiceError>;
}
