use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
    pub base_url: String,
}

impl CloudinaryConfig {
    pub fn init() -> Result<Self> {
        let cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME")
            .context("Missing environment variable: CLOUDINARY_CLOUD_NAME")?;
        let api_key = std::env::var("CLOUDINARY_API_KEY")
            .context("Missing environment variable: CLOUDINARY_API_KEY")?;
        let api_secret = std::env::var("CLOUDINARY_API_SECRET")
            .context("Missing environment variable: CLOUDINARY_API_SECRET")?;
        let folder = std::env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| "products".into());
        let base_url = std::env::var("CLOUDINARY_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1".into());

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            folder,
            base_url,
        })
    }

    pub fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}
