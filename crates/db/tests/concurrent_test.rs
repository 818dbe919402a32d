//! Concurrent access stress tests for the ledger engine.
//!
//! These tests verify that:
//! - Concurrent transfers on the same account never lose updates
//! - A sender can never be driven below zero, however many callers race
//! - Exactly one log row exists per committed transfer

use std::sync::Arc;

use futures::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tempfile::TempDir;
use tokio::sync::Barrier;
use uuid::Uuid;

use coinvault_core::LedgerError;
use coinvault_db::entities::transactions;
use coinvault_db::migration::{Migrator, MigratorTrait};
use coinvault_db::{AccountRepository, LedgerRepository, connect};
use coinvault_shared::{DatabaseBackend, DatabaseConfig, Denomination, SqliteConfig};

async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        backend: DatabaseBackend::Sqlite,
        sqlite: SqliteConfig {
            path: dir.path().join("ledger.db").display().to_string(),
        },
        mysql: None,
        max_connections: 10,
        min_connections: 1,
    };
    let db = connect(&config).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    (dir, db)
}

async fn log_row_count(db: &DatabaseConnection) -> u64 {
    transactions::Entity::find().count(db).await.unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transfers_lose_no_updates() {
    const TRANSFERS: usize = 8;
    let amount = dec!(5);

    let (_dir, db) = setup().await;
    let accounts = AccountRepository::new(db.clone());
    let ledger = LedgerRepository::new(db.clone());

    let sender = Uuid::new_v4();
    let receiver = Uuid::new_v4();
    accounts.init_account(sender).await.unwrap();
    accounts.init_account(receiver).await.unwrap();
    ledger
        .credit(sender, Denomination::Coin, amount * Decimal::from(TRANSFERS as u64))
        .await
        .unwrap();

    let barrier = Arc::new(Barrier::new(TRANSFERS));
    let tasks: Vec<_> = (0..TRANSFERS)
        .map(|_| {
            let ledger = ledger.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                ledger
                    .transfer(sender, receiver, Denomination::Coin, amount, None)
                    .await
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    assert_eq!(
        accounts.balance(sender, Denomination::Coin).await.unwrap(),
        Decimal::ZERO
    );
    assert_eq!(
        accounts.balance(receiver, Denomination::Coin).await.unwrap(),
        amount * Decimal::from(TRANSFERS as u64)
    );
    assert_eq!(log_row_count(&db).await, TRANSFERS as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transfers_cannot_overdraw() {
    // Twice as many attempts as the funded count: exactly half must win.
    const FUNDED: usize = 4;
    const ATTEMPTS: usize = 8;
    let amount = dec!(5);

    let (_dir, db) = setup().await;
    let accounts = AccountRepository::new(db.clone());
    let ledger = LedgerRepository::new(db.clone());

    let sender = Uuid::new_v4();
    let receiver = Uuid::new_v4();
    accounts.init_account(sender).await.unwrap();
    accounts.init_account(receiver).await.unwrap();
    ledger
        .credit(sender, Denomination::Gold, amount * Decimal::from(FUNDED as u64))
        .await
        .unwrap();

    let barrier = Arc::new(Barrier::new(ATTEMPTS));
    let tasks: Vec<_> = (0..ATTEMPTS)
        .map(|_| {
            let ledger = ledger.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                ledger
                    .transfer(sender, receiver, Denomination::Gold, amount, None)
                    .await
            })
        })
        .collect();

    let mut succeeded = 0usize;
    let mut short = 0usize;
    for result in join_all(tasks).await {
        match result.unwrap() {
            Ok(_) => succeeded += 1,
            Err(LedgerError::InsufficientFunds { .. }) => short += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(succeeded, FUNDED);
    assert_eq!(short, ATTEMPTS - FUNDED);
    assert_eq!(
        accounts.balance(sender, Denomination::Gold).await.unwrap(),
        Decimal::ZERO
    );
    assert_eq!(
        accounts.balance(receiver, Denomination::Gold).await.unwrap(),
        amount * Decimal::from(FUNDED as u64)
    );
    assert_eq!(log_row_count(&db).await, FUNDED as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_credits_accumulate() {
    const CREDITS: usize = 8;
    let amount = dec!(1.25);

    let (_dir, db) = setup().await;
    let accounts = AccountRepository::new(db.clone());
    let ledger = LedgerRepository::new(db.clone());

    let player = Uuid::new_v4();
    accounts.init_account(player).await.unwrap();

    let barrier = Arc::new(Barrier::new(CREDITS));
    let tasks: Vec<_> = (0..CREDITS)
        .map(|_| {
            let ledger = ledger.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                ledger.credit(player, Denomination::Silver, amount).await
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    assert_eq!(
        accounts.balance(player, Denomination::Silver).await.unwrap(),
        amount * Decimal::from(CREDITS as u64)
    );
}
