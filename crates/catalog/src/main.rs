use anyhow::{Context, Result};
use catalog::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init("catalog", config.otel_endpoint.as_deref())
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.logger_provider(),
        "catalog",
        config.dev_mode,
        config.enable_file_log,
    );

    info!("🛒 Starting catalog service initialization...");

    let db_pool =
        ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    if config.run_migrations {
        info!("📦 Running database migrations...");
        ConnectionManager::run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let port = config.port;
    let state = AppState::new(db_pool, &config).context("Failed to create AppState")?;

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Err(e) = telemetry.shutdown() {
        error!("❌ {e}");
    }

    Ok(())
}
