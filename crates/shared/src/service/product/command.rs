use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, NewProduct, ProductChanges, UpdateProductRequest},
        responses::ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::info;

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    tracer: ServiceTracer,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            tracer: ServiceTracer::new("product-command-service", registry),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let new_product = NewProduct::try_from(req.clone())?;

        info!("🏗️ Creating product: {}", new_product.slug);

        let ctx = self.tracer.start(
            "product_create",
            Method::Post,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("slug", new_product.slug.clone()),
            ],
        );

        match self.command.create_product(&new_product).await {
            Ok(product) => {
                self.tracer
                    .success(ctx, &format!("Created product ID {}", product.id));
                Ok(ProductResponse::from(product))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn update_product(
        &self,
        slug: &str,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        if req.slug.as_deref().is_some_and(|requested| requested != slug) {
            return Err(ServiceError::Validation(vec![
                "slug cannot be changed".to_string(),
            ]));
        }

        let changes = ProductChanges::from(req);

        info!("🔄 Updating product {slug} ({} field(s))", changes.len());

        let ctx = self.tracer.start(
            "product_update",
            Method::Put,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("slug", slug.to_string()),
            ],
        );

        let existing = match self.query.find_by_slug(slug).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.tracer.failure(ctx, &format!("Product {slug} not found"));
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                return Err(ServiceError::Repo(err));
            }
        };

        match self.command.update_product(existing.id, &changes).await {
            Ok(Some(product)) => {
                self.tracer
                    .success(ctx, &format!("Updated product ID {}", product.id));
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.tracer
                    .failure(ctx, &format!("Product ID {} vanished", existing.id));
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
