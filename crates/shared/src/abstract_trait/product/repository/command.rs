use crate::{
    domain::requests::{NewProduct, ProductChanges},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Fails with `RepositoryError::Conflict` when the slug is taken.
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError>;

    /// Applies `changes` and refreshes `last_updated`; `None` when no row has `id`.
    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<ProductModel>, RepositoryError>;
}
