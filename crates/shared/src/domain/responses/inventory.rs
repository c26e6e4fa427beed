use crate::{domain::responses::ProductResponse, model::InventoryStats};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct InventoryStatsResponse {
    pub total_products: i64,
    pub total_inventory: i64,
    pub low_stock_count: i64,
    pub low_stock_threshold: i32,
    /// `null` when the catalog is empty.
    pub avg_price: Option<f64>,
}

impl InventoryStatsResponse {
    pub fn new(stats: InventoryStats, threshold: i32) -> Self {
        Self {
            total_products: stats.total_products,
            total_inventory: stats.total_inventory,
            low_stock_count: stats.low_stock_count,
            low_stock_threshold: threshold,
            avg_price: stats.avg_price.as_ref().and_then(Decimal::to_f64),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DashboardResponse {
    pub products: Vec<ProductResponse>,
    pub stats: InventoryStatsResponse,
    pub low_stock: Vec<ProductResponse>,
    pub generated_at: String,
}
