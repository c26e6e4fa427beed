mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl ProductService {
    pub fn new(repository: ProductRepository, registry: &mut Registry) -> Self {
        let query = Arc::new(ProductQueryService::new(
            repository.query.clone(),
            registry,
        )) as DynProductQueryService;

        let command = Arc::new(ProductCommandService::new(
            repository.query,
            repository.command,
            registry,
        )) as DynProductCommandService;

        Self { query, command }
    }
}
