use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::ProductResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        slug: &str,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
}
