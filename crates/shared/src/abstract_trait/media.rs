use crate::{
    domain::{requests::UploadFile, responses::UploadResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMediaHost = Arc<dyn MediaHostTrait + Send + Sync>;
pub type DynMediaService = Arc<dyn MediaServiceTrait + Send + Sync>;

/// Third-party host that owns the image bytes.
#[async_trait]
pub trait MediaHostTrait {
    async fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ServiceError>;
    async fn destroy(&self, public_id: &str) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait MediaServiceTrait {
    async fn upload_image(&self, file: UploadFile) -> Result<UploadResponse, ServiceError>;
    async fn replace_image(
        &self,
        file: UploadFile,
        previous_public_id: Option<String>,
    ) -> Result<UploadResponse, ServiceError>;
}
