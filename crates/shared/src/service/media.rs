use crate::{
    abstract_trait::{DynMediaHost, MediaServiceTrait},
    domain::{requests::UploadFile, responses::UploadResponse},
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::{info, warn};

/// Relays admin uploads to the media host.
pub struct MediaService {
    host: DynMediaHost,
    tracer: ServiceTracer,
}

impl MediaService {
    pub fn new(host: DynMediaHost, registry: &mut Registry) -> Self {
        Self {
            host,
            tracer: ServiceTracer::new("media-service", registry),
        }
    }
}

#[async_trait]
impl MediaServiceTrait for MediaService {
    async fn upload_image(&self, file: UploadFile) -> Result<UploadResponse, ServiceError> {
        info!(
            "📤 Uploading {} ({} bytes)",
            file.file_name,
            file.bytes.len()
        );

        let ctx = self.tracer.start(
            "media_upload",
            Method::Post,
            vec![
                KeyValue::new("file_name", file.file_name.clone()),
                KeyValue::new("size", file.bytes.len() as i64),
            ],
        );

        match self.host.upload(&file).await {
            Ok(uploaded) => {
                self.tracer
                    .success(ctx, &format!("Stored as {}", uploaded.public_id));
                Ok(uploaded)
            }
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                Err(err)
            }
        }
    }

    async fn replace_image(
        &self,
        file: UploadFile,
        previous_public_id: Option<String>,
    ) -> Result<UploadResponse, ServiceError> {
        let previous = previous_public_id.filter(|id| !id.is_empty());

        let ctx = self.tracer.start(
            "media_replace",
            Method::Put,
            vec![
                KeyValue::new("file_name", file.file_name.clone()),
                KeyValue::new("previous", previous.clone().unwrap_or_default()),
            ],
        );

        // The old asset is only touched once the new one is safely stored.
        let mut uploaded = match self.host.upload(&file).await {
            Ok(uploaded) => uploaded,
            Err(err) => {
                self.tracer.failure(ctx, &err.to_string());
                return Err(err);
            }
        };

        if let Some(previous) = previous {
            let deleted = match self.host.destroy(&previous).await {
                Ok(()) => true,
                Err(err) => {
                    warn!(
                        "⚠️ Uploaded {} but failed to delete {previous}: {err}",
                        uploaded.public_id
                    );
                    false
                }
            };
            uploaded.previous_deleted = Some(deleted);
        }

        self.tracer
            .success(ctx, &format!("Replaced with {}", uploaded.public_id));
        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMediaHost;
    use std::sync::Arc;

    fn file() -> UploadFile {
        UploadFile {
            file_name: "new.jpg".into(),
            content_type: Some("image/jpeg".into()),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    fn service(host: Arc<FakeMediaHost>) -> MediaService {
        MediaService::new(host, &mut Registry::default())
    }

    #[tokio::test]
    async fn upload_returns_url_and_public_id() {
        let host = Arc::new(FakeMediaHost::default());

        let uploaded = service(host.clone()).upload_image(file()).await.unwrap();

        assert_eq!(uploaded.public_id, "products/new.jpg");
        assert_eq!(uploaded.previous_deleted, None);
        assert_eq!(host.calls(), vec!["upload:new.jpg"]);
    }

    #[tokio::test]
    async fn replace_uploads_before_deleting() {
        let host = Arc::new(FakeMediaHost::default());

        let uploaded = service(host.clone())
            .replace_image(file(), Some("products/old".into()))
            .await
            .unwrap();

        assert_eq!(uploaded.previous_deleted, Some(true));
        assert_eq!(
            host.calls(),
            vec!["upload:new.jpg", "destroy:products/old"]
        );
    }

    #[tokio::test]
    async fn failed_upload_keeps_the_old_asset() {
        let host = Arc::new(FakeMediaHost::failing_upload());

        let result = service(host.clone())
            .replace_image(file(), Some("products/old".into()))
            .await;

        assert!(matches!(result, Err(ServiceError::Media(_))));
        assert_eq!(host.calls(), vec!["upload:new.jpg"]);
    }

    #[tokio::test]
    async fn failed_delete_still_returns_the_new_image() {
        let host = Arc::new(FakeMediaHost::failing_destroy());

        let uploaded = service(host)
            .replace_image(file(), Some("products/old".into()))
            .await
            .unwrap();

        assert_eq!(uploaded.url, "https://cdn.example/products/new.jpg");
        assert_eq!(uploaded.previous_deleted, Some(false));
    }

    #[tokio::test]
    async fn replace_without_previous_is_a_plain_upload() {
        let host = Arc::new(FakeMediaHost::default());

        let uploaded = service(host.clone())
            .replace_image(file(), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(uploaded.previous_deleted, None);
        assert_eq!(host.calls().len(), 1);
    }
}
