use crate::{
    middleware::extract::QueryParams,
    state::{AppState, LowStockThreshold},
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynProductQueryService,
    domain::{
        requests::LowStockQuery,
        responses::{DashboardResponse, InventoryStatsResponse, ProductResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn resolve_threshold(query: &LowStockQuery, default: LowStockThreshold) -> i32 {
    query.threshold.unwrap_or(default.0)
}

#[utoipa::path(
    get,
    path = "/api/inventory/stats",
    tag = "Inventory",
    params(LowStockQuery),
    responses(
        (status = 200, description = "Aggregate inventory statistics", body = InventoryStatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_inventory_stats(
    Extension(service): Extension<DynProductQueryService>,
    Extension(default): Extension<LowStockThreshold>,
    QueryParams(query): QueryParams<LowStockQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .inventory_stats(resolve_threshold(&query, default))
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/low-stock",
    tag = "Inventory",
    params(LowStockQuery),
    responses(
        (status = 200, description = "Products below the threshold, lowest first", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_low_stock(
    Extension(service): Extension<DynProductQueryService>,
    Extension(default): Extension<LowStockThreshold>,
    QueryParams(query): QueryParams<LowStockQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_low_stock(resolve_threshold(&query, default))
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Inventory",
    responses(
        (status = 200, description = "Products, stats and low-stock list", body = DashboardResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_dashboard(
    Extension(service): Extension<DynProductQueryService>,
    Extension(threshold): Extension<LowStockThreshold>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.dashboard(threshold.0).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn inventory_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/inventory/stats", get(get_inventory_stats))
        .route("/api/inventory/low-stock", get(get_low_stock))
        .route("/api/dashboard", get(get_dashboard))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.low_stock_threshold))
}
