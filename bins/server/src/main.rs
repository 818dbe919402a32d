//! Coinvault server
//!
//! Main entry point for the currency ledger service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinvault_api::{AppState, create_router};
use coinvault_db::connect;
use coinvault_db::migration::{Migrator, MigratorTrait};
use coinvault_shared::{AppConfig, DatabaseBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinvault=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // A fresh SQLite deployment may point at a directory that does not exist yet.
    if config.database.backend == DatabaseBackend::Sqlite {
        if let Some(parent) = std::path::Path::new(&config.database.sqlite.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create SQLite database directory")?;
            }
        }
    }

    // Connect to the configured backend; failure here disables the whole
    // currency service, so it is fatal.
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    // Idempotent schema setup, safe on every startup.
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    info!("Schema is up to date");

    // Create application state
    let state = AppState { db: Arc::new(db) };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
