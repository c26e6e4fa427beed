use crate::di::{DependenciesInject, DependenciesInjectDeps};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynMediaHost, DynSessionToken},
    config::{AdminKeys, Config, ConnectionPool},
    media::CloudinaryClient,
    repository::ProductRepository,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tracing::info;

/// Inventory below this count is reported as low stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockThreshold(pub i32);

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub admin: AdminKeys,
    pub low_stock_threshold: LowStockThreshold,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let repository = ProductRepository::new(pool);

        let media_host = Arc::new(
            CloudinaryClient::new(config.cloudinary.clone())
                .context("Failed to build Cloudinary client")?,
        ) as DynMediaHost;

        let deps = DependenciesInjectDeps {
            product_query_repo: repository.query,
            product_command_repo: repository.command,
            media_host,
            session_tokens: Arc::new(config.session.clone()) as DynSessionToken,
            admin_password: config.admin.password.clone(),
        };

        let state = Self::from_deps(
            deps,
            config.admin.clone(),
            LowStockThreshold(config.low_stock_threshold),
        );

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));
        info!("📈 System metrics collector started");

        Ok(state)
    }

    /// Builds the state around already constructed dependencies, without
    /// spawning background tasks.
    pub fn from_deps(
        deps: DependenciesInjectDeps,
        admin: AdminKeys,
        low_stock_threshold: LowStockThreshold,
    ) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            admin,
            low_stock_threshold,
            registry: Arc::new(registry),
            system_metrics,
        }
    }
}
