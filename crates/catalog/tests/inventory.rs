mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn low_stock_excludes_the_threshold_and_sorts_ascending() {
    let app = TestApp::new();
    app.seed("Exactly", "Misc", 30).await;
    app.seed("Plenty", "Misc", 50).await;
    app.seed("Almost", "Misc", 29).await;
    app.seed("Scarce", "Misc", 5).await;

    let (status, body) = app.get("/api/inventory/low-stock").await;

    assert_eq!(status, StatusCode::OK);
    let inventories: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["inventory"].as_i64().unwrap())
        .collect();
    assert_eq!(inventories, vec![5, 29]);

    let (_, custom) = app.get("/api/inventory/low-stock?threshold=31").await;
    assert_eq!(custom.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn stats_for_two_products() {
    let app = TestApp::new();
    app.seed("A", "Misc", 5).await;
    app.seed("B", "Misc", 50).await;

    let (status, stats) = app.get("/api/inventory/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_products"], 2);
    assert_eq!(stats["total_inventory"], 55);
    assert_eq!(stats["low_stock_count"], 1);
    assert_eq!(stats["low_stock_threshold"], 30);
    assert_eq!(stats["avg_price"], json!(19.99));
}

#[tokio::test]
async fn stats_on_an_empty_catalog() {
    let app = TestApp::new();

    let (_, stats) = app.get("/api/inventory/stats").await;

    assert_eq!(stats["total_products"], 0);
    assert_eq!(stats["total_inventory"], 0);
    assert_eq!(stats["avg_price"], json!(null));
}

#[tokio::test]
async fn dashboard_combines_products_stats_and_low_stock() {
    let app = TestApp::new();
    app.seed("A", "Misc", 5).await;
    app.seed("B", "Misc", 50).await;

    let (status, dashboard) = app.get("/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["products"].as_array().unwrap().len(), 2);
    assert_eq!(dashboard["stats"]["low_stock_count"], 1);
    assert_eq!(dashboard["low_stock"][0]["name"], "A");
    assert!(dashboard["generated_at"].as_str().is_some());
}

#[tokio::test]
async fn health_and_metrics_are_served() {
    let app = TestApp::new();
    app.get("/api/products").await;

    let (status, health) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let request = axum::http::Request::get("/metrics")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&text);
    assert!(text.contains("product_query_service_requests_total"));
    assert!(text.contains("process_start_time_seconds"));
}

#[tokio::test]
async fn non_numeric_threshold_is_a_json_400() {
    let app = TestApp::new();

    for uri in [
        "/api/inventory/low-stock?threshold=abc",
        "/api/inventory/stats?threshold=abc",
    ] {
        let (status, error) = app.get(uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error["status"], "error");
        assert!(
            error["error"].as_str().unwrap().starts_with("Invalid query"),
            "{uri}: {error}"
        );
    }
}
