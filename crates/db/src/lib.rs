//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the `currency` and `currency_transaction` tables
//! - The schema migration (shared by SQLite and MySQL)
//! - Repositories owning every mutation path into the ledger

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{AccountBalances, AccountRepository, LedgerRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use coinvault_shared::DatabaseConfig;

/// Establishes a connection pool for the configured backend.
///
/// The backend (SQLite file or MySQL server) is picked by the configuration
/// enum; from here on a single `DatabaseConnection` serves both.
///
/// # Errors
///
/// Returns an error if the configuration is incomplete or the connection
/// cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.url().map_err(|e| DbErr::Custom(e.to_string()))?;

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
