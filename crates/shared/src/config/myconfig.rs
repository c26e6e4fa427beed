use crate::config::{media::CloudinaryConfig, session::SessionConfig};
use anyhow::{Context, Result, anyhow};

/// Static bearer secrets guarding the mutating endpoints.
#[derive(Clone)]
pub struct AdminKeys {
    pub product_key: String,
    pub upload_key: String,
    pub password: String,
}

impl std::fmt::Debug for AdminKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKeys")
            .field("product_key", &"<redacted>")
            .field("upload_key", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub low_stock_threshold: i32,
    pub admin: AdminKeys,
    pub session: SessionConfig,
    pub cloudinary: CloudinaryConfig,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = env_or("DB_MIN_CONN", 1u32)?;
        let db_max_conn = env_or("DB_MAX_CONN", 5u32)?;
        let low_stock_threshold = env_or("LOW_STOCK_THRESHOLD", 30i32)?;

        let product_key = secret("ADMIN_API_KEY", std::env::var("ADMIN_API_KEY"))?;
        let upload_key = secret("ADMIN_UPLOAD_KEY", std::env::var("ADMIN_UPLOAD_KEY"))?;
        let password = secret("ADMIN_PASSWORD", std::env::var("ADMIN_PASSWORD"))
            .unwrap_or_else(|_| product_key.clone());

        let session_secret = secret("SESSION_SECRET", std::env::var("SESSION_SECRET"))?;
        let session_ttl_minutes = env_or("SESSION_TTL_MINUTES", 60i64)?;

        let cloudinary = CloudinaryConfig::init().context("failed cloudinary config")?;

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let dev_mode = env_flag("DEV_MODE");
        let enable_file_log = env_flag("ENABLE_FILE_LOG");

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            low_stock_threshold,
            admin: AdminKeys {
                product_key,
                upload_key,
                password,
            },
            session: SessionConfig::new(&session_secret, session_ttl_minutes),
            cloudinary,
            otel_endpoint,
            dev_mode,
            enable_file_log,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// A secret must be present and non-blank.
fn secret(key: &str, value: Result<String, std::env::VarError>) -> Result<String> {
    let value = value.with_context(|| format!("Missing environment variable: {key}"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|val| val == "true" || val == "1")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_to_default() {
        let value: i32 = env_or("CATALOG_TEST_UNSET_VARIABLE", 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn secrets_must_be_present_and_non_blank() {
        let blank = secret("ADMIN_API_KEY", Ok("   ".to_string())).unwrap_err();
        assert_eq!(blank.to_string(), "ADMIN_API_KEY must not be empty");

        let missing = secret("ADMIN_UPLOAD_KEY", Err(std::env::VarError::NotPresent)).unwrap_err();
        assert_eq!(
            missing.to_string(),
            "Missing environment variable: ADMIN_UPLOAD_KEY"
        );

        assert_eq!(
            secret("SESSION_SECRET", Ok("s3cret".to_string())).unwrap(),
            "s3cret"
        );
    }

    #[test]
    fn env_flag_is_false_when_unset() {
        assert!(!env_flag("CATALOG_TEST_UNSET_FLAG"));
    }
}
