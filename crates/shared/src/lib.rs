//! Shared types and configuration for Coinvault.
//!
//! This crate provides:
//! - Typed application configuration
//! - The `Denomination` domain type used across all layers

pub mod config;
pub mod types;

pub use config::{
    AppConfig, DatabaseBackend, DatabaseConfig, MysqlConfig, ServerConfig, SqliteConfig,
};
pub use types::Denomination;
