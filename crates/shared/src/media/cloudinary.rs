use crate::{
    abstract_trait::MediaHostTrait,
    config::CloudinaryConfig,
    domain::{requests::UploadFile, responses::UploadResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info};

/// Signs an upload API call: parameters sorted by key, joined as
/// `k=v&k=v`, with the API secret appended, then SHA-1 hex encoded.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResult {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Cloudinary upload API client.
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { http, config })
    }

    fn signed(&self, mut params: BTreeMap<&'static str, String>) -> BTreeMap<&'static str, String> {
        params.insert("timestamp", Utc::now().timestamp().to_string());
        let signature = sign_params(&params, &self.config.api_secret);
        params.insert("api_key", self.config.api_key.clone());
        params.insert("signature", signature);
        params
    }

    async fn read_error(response: reqwest::Response) -> ServiceError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => status.to_string(),
        };
        ServiceError::Media(format!("{status}: {message}"))
    }
}

#[async_trait]
impl MediaHostTrait for CloudinaryClient {
    async fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ServiceError> {
        let params = self.signed(BTreeMap::from([("folder", self.config.folder.clone())]));

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = params
            .into_iter()
            .fold(Form::new(), |form, (k, v)| form.text(k, v))
            .part("file", part);

        let response = self
            .http
            .post(self.config.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            error!("❌ Cloudinary upload failed: {err}");
            return Err(err);
        }

        let result = response.json::<UploadResult>().await?;
        info!("☁️ Uploaded {} to Cloudinary", result.public_id);

        Ok(UploadResponse {
            url: result.secure_url,
            public_id: result.public_id,
            previous_deleted: None,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ServiceError> {
        let params = self.signed(BTreeMap::from([("public_id", public_id.to_string())]));

        let response = self
            .http
            .post(self.config.endpoint("destroy"))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            error!("❌ Cloudinary destroy of {public_id} failed: {err}");
            return Err(err);
        }

        let result = response.json::<DestroyResult>().await?;
        match result.result.as_str() {
            "ok" => {
                info!("🗑️ Deleted {public_id} from Cloudinary");
                Ok(())
            }
            other => Err(ServiceError::Media(format!(
                "destroy of {public_id} returned '{other}'"
            ))),
        }
    }
}
