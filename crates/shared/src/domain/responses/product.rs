use crate::model::Product as ProductModel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category: String,
    pub inventory: i32,
    pub last_updated: String,
    pub image_urls: Option<Vec<String>>,
    pub image_public_ids: Option<Vec<String>>,
}

// dari model to response
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            price: value.price,
            category: value.category,
            inventory: value.inventory,
            last_updated: value.last_updated.to_rfc3339(),
            image_urls: value.image_urls,
            image_public_ids: value.image_public_ids,
        }
    }
}
