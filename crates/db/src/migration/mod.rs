//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and are written with the
//! schema DSL so the same migration runs on SQLite and MySQL.

pub use sea_orm_migration::prelude::*;

mod m20260801_000001_currency;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260801_000001_currency::Migration)]
    }
}
