#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use catalog::{
    di::DependenciesInjectDeps,
    handler::AppRouter,
    state::{AppState, LowStockThreshold},
};
use serde_json::Value;
use shared::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::{AdminKeys, SessionConfig},
    domain::requests::NewProduct,
    testing::{FakeMediaHost, MemoryProducts},
};
use std::sync::Arc;
use tower::ServiceExt;

pub const PRODUCT_KEY: &str = "product-key";
pub const UPLOAD_KEY: &str = "upload-key";
pub const PASSWORD: &str = "let-me-in";

pub struct TestApp {
    pub router: Router,
    pub products: MemoryProducts,
    pub media: Arc<FakeMediaHost>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_media(FakeMediaHost::default())
    }

    pub fn with_media(media: FakeMediaHost) -> Self {
        let products = MemoryProducts::default();
        let media = Arc::new(media);

        let deps = DependenciesInjectDeps {
            product_query_repo: Arc::new(products.clone()),
            product_command_repo: Arc::new(products.clone()),
            media_host: media.clone(),
            session_tokens: Arc::new(SessionConfig::new("test-session-secret", 60)),
            admin_password: PASSWORD.to_string(),
        };

        let admin = AdminKeys {
            product_key: PRODUCT_KEY.to_string(),
            upload_key: UPLOAD_KEY.to_string(),
            password: PASSWORD.to_string(),
        };

        let state = AppState::from_deps(deps, admin, LowStockThreshold(30));

        Self {
            router: AppRouter::router(Arc::new(state)),
            products,
            media,
        }
    }

    pub async fn seed(&self, name: &str, category: &str, inventory: i32) {
        self.products
            .create_product(&NewProduct {
                name: name.to_string(),
                slug: name.to_lowercase().replace(' ', "-"),
                description: format!("{name} description"),
                price: rust_decimal::Decimal::new(1999, 2),
                category: category.to_string(),
                inventory,
                image_urls: None,
                image_public_ids: None,
            })
            .await
            .unwrap();
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value, Vec<String>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_owned))
            .collect();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body, cookies)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body, _) = self.send(request).await;
        (status, body)
    }

    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        bearer: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        let (status, body, _) = self.send(request).await;
        (status, body)
    }
}

pub const BOUNDARY: &str = "catalog-test-boundary";

pub enum Part<'a> {
    /// Field name, file name, content.
    File(&'a str, &'a str, &'a [u8]),
    /// Field name, value.
    Text(&'a str, &'a str),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File(name, file_name, content) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: image/png\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(method: &str, bearer: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}
