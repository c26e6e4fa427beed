use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub inventory: i32,
    pub last_updated: DateTime<Utc>,
    pub image_urls: Option<Vec<String>>,
    pub image_public_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InventoryStats {
    pub total_products: i64,
    pub total_inventory: i64,
    pub low_stock_count: i64,
    pub avg_price: Option<Decimal>,
}
