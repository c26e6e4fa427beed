use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
        responses::{DashboardResponse, InventoryStatsResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::info;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: ServiceTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: ServiceTracer::new("product-query-service", registry),
        }
    }

    fn to_responses(products: Vec<crate::model::Product>) -> Vec<ProductResponse> {
        products.into_iter().map(ProductResponse::from).collect()
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError> {
        info!(
            "🔍 Finding products | search: {:?}, category: {:?}",
            req.search, req.category
        );

        let ctx = self.tracer.start(
            "product_find_all",
            Method::Get,
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("search", req.search.clone().unwrap_or_default()),
                KeyValue::new("category", req.category.clone().unwrap_or_default()),
            ],
        );

        match self.query.find_all().await {
            Ok(products) => {
                let total = products.len();
                let filtered: Vec<_> = if req.is_empty() {
                    products
                } else {
                    products.into_iter().filter(|p| req.matches(p)).collect()
                };

                self.tracer.success(
                    ctx,
                    &format!("{} of {} products matched", filtered.len(), total),
                );
                Ok(Self::to_responses(filtered))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<ProductResponse, ServiceError> {
        let ctx = self.tracer.start(
            "product_find_by_slug",
            Method::Get,
            vec![KeyValue::new("slug", slug.to_string())],
        );

        match self.query.find_by_slug(slug).await {
            Ok(Some(product)) => {
                self.tracer.success(ctx, "Product found");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.tracer.failure(ctx, &format!("Product {slug} not found"));
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let ctx = self.tracer.start(
            "product_find_by_id",
            Method::Get,
            vec![KeyValue::new("product.id", id as i64)],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer.success(ctx, "Product found");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.tracer.failure(ctx, &format!("Product ID {id} not found"));
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_categories(&self) -> Result<Vec<String>, ServiceError> {
        let ctx = self
            .tracer
            .start("product_find_categories", Method::Get, vec![]);

        match self.query.find_all().await {
            Ok(products) => {
                let mut categories: Vec<String> = Vec::new();
                for product in products {
                    if !product.category.is_empty() && !categories.contains(&product.category) {
                        categories.push(product.category);
                    }
                }

                self.tracer
                    .success(ctx, &format!("{} categories", categories.len()));
                Ok(categories)
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_low_stock(&self, threshold: i32) -> Result<Vec<ProductResponse>, ServiceError> {
        let ctx = self.tracer.start(
            "product_find_low_stock",
            Method::Get,
            vec![KeyValue::new("threshold", threshold as i64)],
        );

        match self.query.find_low_stock(threshold).await {
            Ok(products) => {
                self.tracer.success(
                    ctx,
                    &format!("{} products below {threshold}", products.len()),
                );
                Ok(Self::to_responses(products))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn inventory_stats(
        &self,
        threshold: i32,
    ) -> Result<InventoryStatsResponse, ServiceError> {
        let ctx = self.tracer.start(
            "product_inventory_stats",
            Method::Get,
            vec![KeyValue::new("threshold", threshold as i64)],
        );

        match self.query.inventory_stats(threshold).await {
            Ok(stats) => {
                self.tracer.success(ctx, "Inventory stats aggregated");
                Ok(InventoryStatsResponse::new(stats, threshold))
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn dashboard(&self, threshold: i32) -> Result<DashboardResponse, ServiceError> {
        info!("📊 Building dashboard (threshold {threshold})");

        let ctx = self.tracer.start(
            "product_dashboard",
            Method::Get,
            vec![KeyValue::new("threshold", threshold as i64)],
        );

        let reads = tokio::try_join!(
            self.query.find_all(),
            self.query.inventory_stats(threshold),
            self.query.find_low_stock(threshold),
        );

        match reads {
            Ok((products, stats, low_stock)) => {
                self.tracer.success(ctx, "Dashboard assembled");
                Ok(DashboardResponse {
                    products: Self::to_responses(products),
                    stats: InventoryStatsResponse::new(stats, threshold),
                    low_stock: Self::to_responses(low_stock),
                    generated_at: Utc::now().to_rfc3339(),
                })
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(ServiceError::Repo(err))
            }
        }
    }
}
